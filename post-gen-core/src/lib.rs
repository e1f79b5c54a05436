//! Corpus-driven post generation library.
//!
//! This crate provides a word-level Markov generation system including:
//! - A corpus tokenizer tuned for social-media text (mentions, hashtags,
//!   URLs, HTML ampersand entities)
//! - An order-M Markov model mapping context windows to observed followers
//! - A random-walk generator producing synthetic posts
//!
//! The model is built in one pass per run and is read-only afterwards;
//! nothing is persisted between runs.

/// Core Markov model and generation logic.
///
/// This module exposes the tokenizer, the model builder and the
/// high-level generator interface.
pub mod model;

/// I/O utilities (corpus file loading).
pub mod io;
