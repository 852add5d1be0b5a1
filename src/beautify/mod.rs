//! Beautifier facade: capability query, strategy dispatch, JSON utilities.

mod indent;
mod json;
mod pretty;
mod sql;
#[cfg(test)]
mod tests;

use crate::error::BeautifyError;
use crate::language::Language;
use crate::options::{resolve_size, IndentOptions};
use pretty::PrettyKind;

/// How a beautifiable language is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Generic pretty-printer tier; honors `use_tabs`.
    Pretty(PrettyKind),
    /// Brace-counting structural re-indenter (C-style languages).
    BraceIndent,
    PythonIndent,
    RubyIndent,
    /// Whole-document pretty-print with line recovery.
    Json,
    /// Uppercase keywords, one clause per line.
    Sql,
}

/// Exhaustive binding table from language to formatting strategy.
///
/// Adding a [`Language`] variant forces a decision here at compile time;
/// `None` means the language is not beautifiable.
fn binding(language: Language) -> Option<Strategy> {
    match language {
        Language::JavaScript | Language::TypeScript | Language::Tsx => {
            Some(Strategy::Pretty(PrettyKind::Script))
        }
        Language::Css | Language::Scss | Language::Less => {
            Some(Strategy::Pretty(PrettyKind::Style))
        }
        Language::Html | Language::Xml => Some(Strategy::Pretty(PrettyKind::Markup)),
        Language::Markdown => Some(Strategy::Pretty(PrettyKind::Markdown)),
        Language::Yaml => Some(Strategy::Pretty(PrettyKind::Yaml)),
        Language::Java
        | Language::C
        | Language::Cpp
        | Language::CSharp
        | Language::Php
        | Language::Go
        | Language::Rust
        | Language::Kotlin => Some(Strategy::BraceIndent),
        Language::Python => Some(Strategy::PythonIndent),
        Language::Ruby => Some(Strategy::RubyIndent),
        Language::Json => Some(Strategy::Json),
        Language::Sql => Some(Strategy::Sql),
        Language::Bash | Language::Plaintext => None,
    }
}

/// Stateless beautification facade.
///
/// Every method is a pure function of its arguments; the value exists so
/// the UI layer has one object to hand around.
#[derive(Debug, Clone, Copy, Default)]
pub struct Beautifier;

impl Beautifier {
    pub fn new() -> Self {
        Self
    }

    /// Whether [`beautify`](Self::beautify) has a strategy for `language`.
    pub fn is_beautifiable(&self, language: Language) -> bool {
        binding(language).is_some()
    }

    /// Every language with a formatter binding, in display order.
    pub fn supported_languages(&self) -> Vec<Language> {
        Language::ALL
            .iter()
            .copied()
            .filter(|language| self.is_beautifiable(*language))
            .collect()
    }

    /// Reformat `code` as `language`.
    ///
    /// `None` options select the strategy default (2 columns for JSON and
    /// Ruby, 4 elsewhere). The custom re-indenter tier is space-only and
    /// ignores `use_tabs`.
    ///
    /// # Errors
    /// [`BeautifyError::UnsupportedLanguage`] when the language has no
    /// binding; [`BeautifyError::Format`] when the bound strategy cannot
    /// process the input. On error no partial output is produced; the
    /// caller keeps its original text.
    pub fn beautify(
        &self,
        code: &str,
        language: Language,
        options: Option<IndentOptions>,
    ) -> Result<String, BeautifyError> {
        let Some(strategy) = binding(language) else {
            return Err(BeautifyError::UnsupportedLanguage(language));
        };
        tracing::debug!(language = %language, ?strategy, "dispatching beautify");
        match strategy {
            Strategy::Pretty(kind) => pretty::format(code, kind, language, options),
            Strategy::BraceIndent => Ok(indent::reindent_braces(
                code,
                resolve_size(options, 4),
            )),
            Strategy::PythonIndent => Ok(indent::reindent_python(
                code,
                resolve_size(options, 4),
            )),
            Strategy::RubyIndent => {
                Ok(indent::reindent_ruby(code, resolve_size(options, 2)))
            }
            Strategy::Json => json::format(code, resolve_size(options, 2))
                .map_err(|err| BeautifyError::format_failure(language, err)),
            Strategy::Sql => Ok(sql::format(code)),
        }
    }

    /// Recursively sort JSON object keys and reserialize.
    ///
    /// Array order is preserved; array elements are sorted recursively.
    ///
    /// # Errors
    /// [`BeautifyError::InvalidJson`] naming the parse failure.
    pub fn sort_json(
        &self,
        code: &str,
        options: Option<IndentOptions>,
    ) -> Result<String, BeautifyError> {
        json::sort(code, resolve_size(options, 2))
    }

    /// Reserialize JSON with no interstitial whitespace.
    ///
    /// # Errors
    /// [`BeautifyError::InvalidJson`] naming the parse failure.
    pub fn compact_json(&self, code: &str) -> Result<String, BeautifyError> {
        json::compact(code)
    }

    /// Convert a JSON document to YAML, preserving key order and scalar
    /// types.
    ///
    /// # Errors
    /// [`BeautifyError::InvalidJson`] naming the parse failure.
    pub fn convert_json_to_yaml(&self, code: &str) -> Result<String, BeautifyError> {
        json::to_yaml(code)
    }

    /// Convert a YAML document to pretty-printed JSON (2-space indent).
    ///
    /// # Errors
    /// [`BeautifyError::InvalidYaml`] naming the parse failure.
    pub fn convert_yaml_to_json(&self, code: &str) -> Result<String, BeautifyError> {
        json::from_yaml(code)
    }
}
