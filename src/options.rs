//! Indentation options shared by every formatting strategy.

use serde::{Deserialize, Serialize};

/// Caller-supplied indentation settings.
///
/// Call sites pass `Option<IndentOptions>`; `None` means "use the
/// formatter's default width" (2 for the JSON family and Ruby, 4
/// everywhere else). The custom structural re-indenters are space-only
/// and ignore `use_tabs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentOptions {
    /// Indent width in columns. Must be positive; zero falls back to the
    /// formatter default.
    pub size: usize,
    /// Emit tab characters instead of spaces (generic formatter tier only).
    pub use_tabs: bool,
}

impl IndentOptions {
    /// Space-indented options with the given width.
    pub fn spaces(size: usize) -> Self {
        Self {
            size,
            use_tabs: false,
        }
    }

    /// Tab-indented options.
    pub fn tabs() -> Self {
        Self {
            size: 1,
            use_tabs: true,
        }
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self::spaces(4)
    }
}

/// Resolve the effective indent width for a strategy.
pub(crate) fn resolve_size(options: Option<IndentOptions>, default_size: usize) -> usize {
    match options {
        Some(opts) if opts.size > 0 => opts.size,
        _ => default_size,
    }
}

/// One unit of indentation for the generic formatter tier.
pub(crate) fn indent_unit(options: Option<IndentOptions>, default_size: usize) -> String {
    match options {
        Some(opts) if opts.use_tabs => "\t".to_string(),
        _ => " ".repeat(resolve_size(options, default_size)),
    }
}
