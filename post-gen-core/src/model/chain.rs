use std::collections::HashMap;

use super::tokenizer::{TERMINATOR, Token};
use super::window::ContextWindow;

/// An order-M Markov model over corpus tokens.
///
/// Maps every context window observed in the corpus to the list of
/// tokens that followed it, in order of occurrence and with duplicates
/// kept. Each recorded occurrence carries equal weight during sampling,
/// so a uniform draw over a follower list reproduces the empirical
/// follower frequency of that context.
///
/// # Responsibilities
/// - Build the mapping in a single pass over the token stream
/// - Reset the training context at every terminator, so each corpus
///   line trains as an independent sequence
/// - Answer checked follower lookups during generation
///
/// # Invariants
/// - Every stored follower list is non-empty: a context is only ever
///   inserted together with at least one follower
/// - The model is immutable once built
#[derive(Clone, Debug)]
pub struct MarkovModel {
	/// Context window length M.
	order: usize,

	/// Mapping from window contents to the tokens observed to follow.
	transitions: HashMap<Vec<Token>, Vec<Token>>,
}

impl MarkovModel {
	/// Trains a model of order `order` from a token stream.
	///
	/// For every token: record it as a follower of the current window,
	/// then either reset the window (if the token is the terminator) or
	/// slide it forward.
	///
	/// # Notes
	/// - With `order` 0 the window is always empty and the model
	///   degrades to a single global unigram frequency entry.
	/// - An empty token stream produces an empty model; generation from
	///   an empty model fails on the first lookup.
	pub fn train(tokens: &[Token], order: usize) -> Self {
		let mut transitions: HashMap<Vec<Token>, Vec<Token>> = HashMap::new();
		let mut window = ContextWindow::new(order);

		for token in tokens {
			transitions
				.entry(window.as_slice().to_vec())
				.or_default()
				.push(token.clone());

			if token == TERMINATOR {
				window.reset();
			} else {
				window.slide(token);
			}
		}

		log::debug!("trained order-{} model: {} contexts", order, transitions.len());
		Self { order, transitions }
	}

	/// Returns the context window length M.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Returns the followers recorded for `window`, or `None` if that
	/// exact window never occurred in the corpus.
	///
	/// A returned list is never empty.
	pub fn followers(&self, window: &[Token]) -> Option<&[Token]> {
		self.transitions.get(window).map(Vec::as_slice)
	}

	/// Number of distinct context windows in the model.
	pub fn context_count(&self) -> usize {
		self.transitions.len()
	}

	/// True if the corpus contributed no tokens at all.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	#[cfg(test)]
	pub(crate) fn contexts(&self) -> impl Iterator<Item = &Vec<Token>> {
		self.transitions.keys()
	}
}
