use super::tokenizer::{PADDING, Token};

/// The M tokens immediately preceding the position being predicted.
///
/// # Responsibilities
/// - Start out (and reset to) M copies of the padding token
/// - Slide forward one token at a time, dropping the oldest
/// - Expose its contents as the model lookup key
///
/// # Invariants
/// - The window always holds exactly M tokens
/// - With M = 0 the window is permanently empty, which degrades the
///   model to a single global unigram entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextWindow {
	/// Window length M (the Markov order).
	order: usize,
	/// Current contents, oldest token first.
	tokens: Vec<Token>,
}

impl ContextWindow {
	/// Creates a window of length `order`, filled with padding.
	pub fn new(order: usize) -> Self {
		Self {
			order,
			tokens: vec![PADDING.to_owned(); order],
		}
	}

	/// Returns the window length M.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Refills the window with padding, discarding any accumulated
	/// sentence context.
	pub fn reset(&mut self) {
		self.tokens.clear();
		self.tokens.resize(self.order, PADDING.to_owned());
	}

	/// Slides the window forward: appends `token` and drops the oldest
	/// entry, keeping the length at exactly M.
	///
	/// A zero-length window stays empty.
	pub fn slide(&mut self, token: &str) {
		if self.order == 0 {
			return;
		}
		self.tokens.remove(0);
		self.tokens.push(token.to_owned());
	}

	/// The window contents, oldest token first. Used as the model key.
	pub fn as_slice(&self) -> &[Token] {
		&self.tokens
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_fully_padded() {
		let window = ContextWindow::new(3);
		assert_eq!(window.as_slice(), ["", "", ""]);
	}

	#[test]
	fn slide_appends_and_drops_the_oldest() {
		let mut window = ContextWindow::new(2);
		window.slide("a");
		assert_eq!(window.as_slice(), ["", "a"]);
		window.slide("b");
		assert_eq!(window.as_slice(), ["a", "b"]);
		window.slide("c");
		assert_eq!(window.as_slice(), ["b", "c"]);
	}

	#[test]
	fn length_is_always_exactly_the_order() {
		let mut window = ContextWindow::new(4);
		for token in ["a", "b", "c", "d", "e", "f"] {
			window.slide(token);
			assert_eq!(window.as_slice().len(), 4);
		}
	}

	#[test]
	fn reset_discards_accumulated_context() {
		let mut window = ContextWindow::new(2);
		window.slide("a");
		window.slide("b");
		window.reset();
		assert_eq!(window.as_slice(), ["", ""]);
	}

	#[test]
	fn zero_order_window_stays_empty() {
		let mut window = ContextWindow::new(0);
		assert!(window.as_slice().is_empty());
		window.slide("a");
		assert!(window.as_slice().is_empty());
		window.reset();
		assert!(window.as_slice().is_empty());
	}
}
