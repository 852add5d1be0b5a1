//! Core engine for DiffPad: language detection and code beautification.
//!
//! The UI layer (editor panes, diff viewer) owns all text state and calls
//! into this crate with plain strings; every operation here is a pure,
//! synchronous function of its arguments.

/// Beautifier facade, formatting strategies, and JSON utilities.
pub mod beautify;
/// Heuristic language detection.
pub mod detect;
/// Error types for beautification and conversion.
pub mod error;
/// Closed language tag set and alias handling.
pub mod language;
/// Indentation options shared by all formatters.
pub mod options;
/// Text statistics helpers.
pub mod stats;

pub use beautify::Beautifier;
pub use detect::detect_language;
pub use error::BeautifyError;
pub use language::Language;
pub use options::IndentOptions;
pub use stats::{text_stats, TextStats};
