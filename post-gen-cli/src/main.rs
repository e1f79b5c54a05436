use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use post_gen_core::io::read_file;
use post_gen_core::model::chain::MarkovModel;
use post_gen_core::model::generator::Generator;
use post_gen_core::model::tokenizer::tokenize;

/// Reads an integer of at least `min` from `input`, re-prompting until
/// one is supplied.
///
/// The first attempt uses `prompt`; failed attempts re-prompt with a
/// retry message. A closed input stream is an error rather than an
/// endless loop.
fn prompt_integer<R: BufRead>(input: &mut R, prompt: &str, min: i64) -> io::Result<i64> {
	print!("{prompt}");
	io::stdout().flush()?;

	loop {
		let mut line = String::new();
		if input.read_line(&mut line)? == 0 {
			return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"));
		}
		match line.trim().parse::<i64>() {
			Ok(value) if value >= min => return Ok(value),
			_ => {
				print!("Input was not an integer. Try again: ");
				io::stdout().flush()?;
			}
		}
	}
}

fn main() -> ExitCode {
	env_logger::init();

	let args: Vec<String> = env::args().collect();
	if args.len() != 2 {
		eprintln!("usage: {} <corpus-file>", args.first().map(String::as_str).unwrap_or("post-gen-cli"));
		return ExitCode::FAILURE;
	}

	let lines = match read_file(&args[1]) {
		Ok(lines) => lines,
		Err(err) => {
			eprintln!("cannot open {}: {err}", args[1]);
			return ExitCode::FAILURE;
		}
	};
	log::info!("loaded {} corpus lines from {}", lines.len(), args[1]);

	let stdin = io::stdin();
	let mut input = stdin.lock();

	// A bigram looks at the previous word; an n-gram at the previous n - 1.
	let n = match prompt_integer(
		&mut input,
		"Enter the value of 'n' for n-grams (e.g. '2' for bigrams): ",
		1,
	) {
		Ok(n) => n,
		Err(err) => {
			eprintln!("cannot read n-gram order: {err}");
			return ExitCode::FAILURE;
		}
	};
	let order = (n - 1) as usize;

	// Any integer is accepted here; a negative count simply generates
	// no posts.
	let count = match prompt_integer(&mut input, "How many posts do you want?: ", i64::MIN) {
		Ok(count) => count.max(0) as usize,
		Err(err) => {
			eprintln!("cannot read post count: {err}");
			return ExitCode::FAILURE;
		}
	};
	println!();

	let tokens = tokenize(&lines);
	let model = MarkovModel::train(&tokens, order);
	log::info!("model holds {} contexts built from {} tokens", model.context_count(), tokens.len());

	// Seeded once from the wall clock, so runs differ unless a test
	// drives the library with its own RNG.
	let seed = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_secs())
		.unwrap_or_default();
	log::debug!("rng seed: {seed}");
	let mut generator = Generator::new(&model, ChaCha8Rng::seed_from_u64(seed));

	let stdout = io::stdout();
	let mut out = stdout.lock();
	if let Err(err) = generator.generate(count, &mut out) {
		eprintln!("generation failed: {err}");
		return ExitCode::FAILURE;
	}
	if writeln!(out).is_err() {
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}
