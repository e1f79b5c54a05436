use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use post_gen_core::model::chain::MarkovModel;
use post_gen_core::model::generator::Generator;
use post_gen_core::model::tokenizer::tokenize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A tiny embedded corpus; each line trains as its own sequence
    let corpus = [
        "cats like dogs, and dogs like cats.",
        "dogs chase cats; cats ignore dogs.",
        "everyone likes #caturday &amp; @dog_account posts.",
        "read more at https://example.com/pets today.",
    ];

    // Tokenize the corpus into the flat training stream.
    // Punctuation collapses to ".", mentions/hashtags/URLs stay whole,
    // and every line ends with a terminator token.
    let tokens = tokenize(&corpus);
    println!("corpus tokens: {}", tokens.len());

    // Train a bigram model: each word is predicted from the single
    // word before it (context length 1)
    let model = MarkovModel::train(&tokens, 1);
    println!("distinct contexts: {}", model.context_count());

    // The random source is injected, so a fixed seed makes this demo
    // print the same posts on every run
    let rng = ChaCha8Rng::seed_from_u64(2024);
    let mut generator = Generator::new(&model, rng);

    // Generate 3 posts straight to stdout
    let stdout = std::io::stdout();
    generator.generate(3, &mut stdout.lock())?;

    Ok(())
}
