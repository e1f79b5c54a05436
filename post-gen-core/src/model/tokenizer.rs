//! Turns raw corpus lines into the token stream the model trains on.

/// A single unit of the tokenized corpus: a word, a punctuation marker,
/// a special run (mention, hashtag, URL) or a terminator.
pub type Token = String;

/// Generic sentence-punctuation token.
///
/// `.`, `,` and `;` all collapse to this one marker; the original
/// character is not preserved.
pub const PUNCTUATION: &str = ".";

/// Terminator token, closing a corpus line during training and a post
/// during generation.
pub const TERMINATOR: &str = "\n";

/// Padding token used to fill context windows at the start of a sequence
/// and after each terminator. Never emitted as text.
pub const PADDING: &str = "";

/// Number of characters consumed after an `&`, covering the `amp;` tail
/// of an HTML-escaped ampersand.
const ENTITY_TAIL: usize = 4;

/// Tokenizes an entire corpus, line by line.
///
/// Each line is scanned independently and always contributes a trailing
/// [`TERMINATOR`] token, blank lines included, so every line forms its
/// own training sequence.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
	let mut tokens = Vec::new();
	for line in lines {
		tokenize_line(line.as_ref(), &mut tokens);
	}
	log::debug!("tokenized {} lines into {} tokens", lines.len(), tokens.len());
	tokens
}

/// Tokenizes one corpus line, appending to `tokens`.
///
/// The line is scanned left to right; at each position the first matching
/// rule wins:
/// 1. `.` / `,` / `;` — flush the pending word, emit [`PUNCTUATION`]
/// 2. `&` — flush, emit `"&"`, skip the `amp;` entity tail
/// 3. `@` / `#` / a literal `https` — flush, then capture everything up
///    to the next whitespace verbatim as one token
/// 4. `--` — flush, discard both dashes
/// 5. word characters (letters, digits, `-`, `'`, `"`, `’`) — accumulate
/// 6. anything else — flush, discard the character
///
/// # Notes
/// - Every lookahead is bounds-checked; a line ending mid-entity or with
///   fewer than five characters left for the `https` match is treated as
///   "no match" instead of reading past the end.
fn tokenize_line(line: &str, tokens: &mut Vec<Token>) {
	let chars: Vec<char> = line.chars().collect();
	let mut word = String::new();

	let mut i = 0;
	while i < chars.len() {
		let c = chars[i];
		if c == '.' || c == ',' || c == ';' {
			flush(&mut word, tokens);
			tokens.push(PUNCTUATION.to_owned());
			i += 1;
		} else if c == '&' {
			// Ampersands appear as "&amp;" in this corpus; keep the
			// marker and drop the entity tail, however much of it the
			// line still holds.
			flush(&mut word, tokens);
			tokens.push("&".to_owned());
			i += 1 + ENTITY_TAIL.min(chars.len() - (i + 1));
		} else if c == '@' || c == '#' || starts_url(&chars, i) {
			// Mentions, hashtags and URLs are kept verbatim, marker
			// included, with no internal structure parsed.
			flush(&mut word, tokens);
			let mut run = String::new();
			while i < chars.len() && !chars[i].is_whitespace() {
				run.push(chars[i]);
				i += 1;
			}
			tokens.push(run);
		} else if c == '-' && chars.get(i + 1) == Some(&'-') {
			// A double dash separates words but belongs to neither.
			flush(&mut word, tokens);
			i += 2;
		} else if is_word_char(c) {
			word.push(c);
			i += 1;
		} else {
			flush(&mut word, tokens);
			i += 1;
		}
	}

	flush(&mut word, tokens);
	tokens.push(TERMINATOR.to_owned());
}

/// Pushes the accumulated word as a token, if any.
fn flush(word: &mut String, tokens: &mut Vec<Token>) {
	if !word.is_empty() {
		tokens.push(std::mem::take(word));
	}
}

/// Returns true if the literal `https` starts at `i`.
///
/// Requires five characters of lookahead; a shorter remainder never
/// matches.
fn starts_url(chars: &[char], i: usize) -> bool {
	chars[i..].starts_with(&['h', 't', 't', 'p', 's'])
}

/// Characters that may appear inside an ordinary word, including the
/// right single quote (U+2019) this corpus uses for apostrophes.
fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '-' || c == '\'' || c == '"' || c == '\u{2019}'
}
