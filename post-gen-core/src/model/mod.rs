//! Top-level module for the Markov post-generation system.
//!
//! This module provides the full training/generation pipeline, including:
//! - Corpus tokenization (`tokenizer`)
//! - Fixed-length context windows (`ContextWindow`)
//! - The order-M Markov model (`MarkovModel`)
//! - A random-walk post generator (`Generator`)

/// Corpus tokenizer.
///
/// Turns raw corpus lines into the flat token stream the model is
/// trained on, handling punctuation, ampersand entities, mentions,
/// hashtags, URLs and line terminators.
pub mod tokenizer;

/// Fixed-length context window state.
///
/// Tracks the M tokens immediately preceding the current position,
/// with padding fill, sliding and reset.
pub mod window;

/// Order-M Markov model.
///
/// Maps each observed context window to the order-of-occurrence list
/// of tokens that followed it in the corpus.
pub mod chain;

/// High-level interface for generating posts by random walk.
///
/// Streams generated text to any writer, with separator handling and
/// checked model lookups.
pub mod generator;
