use std::io::{self, Write};

use rand::Rng;
use thiserror::Error;

use super::chain::MarkovModel;
use super::tokenizer::{PUNCTUATION, TERMINATOR, Token};
use super::window::ContextWindow;

/// Errors raised while generating posts.
#[derive(Debug, Error)]
pub enum GenerateError {
	/// The walk reached a context window the corpus never produced, so
	/// there is nothing to sample from. Raised immediately on the first
	/// lookup when the model is empty.
	#[error("no followers recorded for context {0:?}")]
	UnseenContext(Vec<Token>),

	/// The output writer failed.
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Generates posts by random walk over a trained [`MarkovModel`].
///
/// # Responsibilities
/// - Sample the next token uniformly from the current context's
///   follower multiset, so each token is drawn with its empirical
///   follower frequency
/// - Stream text to the output writer: tokens joined by single spaces,
///   punctuation glued to the preceding word, a blank line after each
///   post
/// - Reset the context window after each terminator
///
/// # Notes
/// - The random source is injected at construction; callers wanting
///   reproducible output pass a seeded RNG.
/// - Model lookups are checked: a context with no recorded followers
///   raises [`GenerateError::UnseenContext`] instead of sampling from
///   an empty list.
#[derive(Debug)]
pub struct Generator<'a, R: Rng> {
	model: &'a MarkovModel,
	rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator walking `model`, drawing from `rng`.
	pub fn new(model: &'a MarkovModel, rng: R) -> Self {
		Self { model, rng }
	}

	/// Generates `count` posts, streaming them to `out`.
	///
	/// Runs until `count` terminators have been drawn. Each terminator
	/// closes the current post with a blank line and resets the walk to
	/// the all-padding context. Requesting zero posts writes nothing.
	///
	/// # Errors
	/// - [`GenerateError::UnseenContext`] if the walk reaches a context
	///   absent from the model (always the case for an empty corpus)
	/// - [`GenerateError::Io`] if writing to `out` fails
	pub fn generate<W: Write>(&mut self, count: usize, out: &mut W) -> Result<(), GenerateError> {
		let mut window = ContextWindow::new(self.model.order());
		// Whether a separator is owed before the next word; posts never
		// start with a space.
		let mut space_pending = false;

		let mut produced = 0;
		while produced < count {
			let followers = self
				.model
				.followers(window.as_slice())
				.ok_or_else(|| GenerateError::UnseenContext(window.as_slice().to_vec()))?;

			// Follower lists are non-empty by construction, so the
			// uniform draw is always over at least one occurrence.
			let token = &followers[self.rng.random_range(0..followers.len())];

			if token == TERMINATOR {
				produced += 1;
				write!(out, "\n\n")?;
				window.reset();
				space_pending = false;
			} else if token == PUNCTUATION {
				write!(out, "{token}")?;
				window.slide(token);
			} else {
				if space_pending {
					write!(out, " ")?;
				}
				space_pending = true;
				write!(out, "{token}")?;
				window.slide(token);
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::tokenize;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	fn example_model(order: usize) -> MarkovModel {
		let tokens = tokenize(&["cats like dogs. dogs like cats."]);
		MarkovModel::train(&tokens, order)
	}

	fn generate_to_string<R: Rng>(model: &MarkovModel, rng: R, count: usize) -> String {
		let mut out = Vec::new();
		Generator::new(model, rng)
			.generate(count, &mut out)
			.unwrap();
		String::from_utf8(out).unwrap()
	}

	/// Splits a generated post back into tokens, detaching the glued
	/// punctuation markers.
	fn post_tokens(post: &str) -> Vec<Token> {
		let mut tokens = Vec::new();
		for chunk in post.split(' ') {
			let word = chunk.trim_end_matches('.');
			if !word.is_empty() {
				tokens.push(word.to_owned());
			}
			for _ in word.len()..chunk.len() {
				tokens.push(PUNCTUATION.to_owned());
			}
		}
		tokens
	}

	#[test]
	fn equal_seeds_give_byte_identical_output() {
		let model = example_model(1);
		let first = generate_to_string(&model, ChaCha8Rng::seed_from_u64(7), 5);
		let second = generate_to_string(&model, ChaCha8Rng::seed_from_u64(7), 5);
		assert_eq!(first, second);
		assert!(!first.is_empty());
	}

	#[test]
	fn zero_posts_write_nothing() {
		let model = example_model(1);
		let output = generate_to_string(&model, ChaCha8Rng::seed_from_u64(1), 0);
		assert!(output.is_empty());
	}

	#[test]
	fn posts_are_separated_by_blank_lines() {
		let model = example_model(1);
		let output = generate_to_string(&model, ChaCha8Rng::seed_from_u64(3), 3);
		assert_eq!(output.matches("\n\n").count(), 3);
		assert!(output.ends_with("\n\n"));
		assert!(!output.starts_with(' '));
	}

	#[test]
	fn every_emitted_transition_exists_in_the_model() {
		let model = example_model(1);
		let output = generate_to_string(&model, ChaCha8Rng::seed_from_u64(11), 8);

		for post in output.split("\n\n").filter(|p| !p.is_empty()) {
			let mut window = ContextWindow::new(model.order());
			for token in post_tokens(post) {
				let followers = model
					.followers(window.as_slice())
					.unwrap_or_else(|| panic!("context {:?} not in model", window.as_slice()));
				assert!(
					followers.contains(&token),
					"{token:?} never follows {:?}",
					window.as_slice()
				);
				window.slide(&token);
			}
			// the post ended because the terminator followed this context
			let followers = model.followers(window.as_slice()).unwrap();
			assert!(followers.contains(&TERMINATOR.to_owned()));
		}
	}

	#[test]
	fn uniform_draws_reproduce_empirical_frequency() {
		// "a" follows the empty context twice as often as "b"
		let tokens = tokenize(&["a a b"]);
		let model = MarkovModel::train(&tokens, 0);
		let output = generate_to_string(&model, ChaCha8Rng::seed_from_u64(42), 300);

		let count_a = output.split_whitespace().filter(|w| *w == "a").count();
		let count_b = output.split_whitespace().filter(|w| *w == "b").count();
		assert!(count_a > 0 && count_b > 0);

		let ratio = count_a as f64 / count_b as f64;
		assert!((1.6..=2.5).contains(&ratio), "ratio {ratio} out of tolerance");
	}

	#[test]
	fn empty_model_fails_on_the_first_lookup() {
		let model = MarkovModel::train(&[], 2);
		let mut out = Vec::new();
		let result = Generator::new(&model, ChaCha8Rng::seed_from_u64(0)).generate(1, &mut out);
		assert!(matches!(result, Err(GenerateError::UnseenContext(_))));
		assert!(out.is_empty());
	}
}
