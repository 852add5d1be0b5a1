//! Generic formatter tier: languages formatted by an internal
//! pretty-printer rather than a structural re-indenter.
//!
//! Fixed conventions across the tier: LF line endings, a single trailing
//! newline, canonical single-space token spacing. Indent width and
//! tabs-vs-spaces come from the caller's [`IndentOptions`].

mod markdown;
mod markup;
mod script;
mod style;

use crate::error::BeautifyError;
use crate::language::Language;
use crate::options::{indent_unit, IndentOptions};

/// Which pretty-printer a tier-1 language binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrettyKind {
    /// JavaScript/TypeScript/TSX.
    Script,
    /// CSS/SCSS/LESS.
    Style,
    /// HTML/XML.
    Markup,
    Markdown,
    Yaml,
}

pub(crate) fn format(
    code: &str,
    kind: PrettyKind,
    language: Language,
    options: Option<IndentOptions>,
) -> Result<String, BeautifyError> {
    let indent = indent_unit(options, 4);
    match kind {
        PrettyKind::Script => Ok(script::format(code, &indent)),
        PrettyKind::Style => Ok(style::format(code, &indent)),
        PrettyKind::Markup => Ok(markup::format(code, &indent)),
        PrettyKind::Markdown => Ok(markdown::format(code)),
        PrettyKind::Yaml => yaml_roundtrip(code)
            .map_err(|err| BeautifyError::format_failure(language, err)),
    }
}

/// Parse and re-dump YAML. The emitter always uses its fixed 2-space
/// indent; parse failures surface as format errors.
fn yaml_roundtrip(code: &str) -> Result<String, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(code)?;
    serde_yaml::to_string(&value)
}
