//! Error types for beautification and format conversion.

use crate::language::Language;
use thiserror::Error;

/// Failures reported by [`Beautifier`](crate::Beautifier) operations.
///
/// Detection never fails; only formatting and conversion do. The core never
/// swallows a failure and returns the input unchanged. Callers decide
/// whether to keep the old text, surface the message, or retry.
#[derive(Error, Debug)]
pub enum BeautifyError {
    /// The language has no formatter binding. Checkable up front via
    /// [`Beautifier::is_beautifiable`](crate::Beautifier::is_beautifiable).
    #[error("language '{0}' is not supported for beautification")]
    UnsupportedLanguage(Language),

    /// A bound formatter could not process the input.
    #[error("failed to beautify {language}: {reason}")]
    Format { language: Language, reason: String },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

impl BeautifyError {
    /// Wrap a strategy failure with the language that was being formatted.
    pub(crate) fn format_failure(language: Language, cause: impl std::fmt::Display) -> Self {
        Self::Format {
            language,
            reason: cause.to_string(),
        }
    }
}
