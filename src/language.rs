//! Closed language tag set and alias canonicalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages this tool recognizes for detection and beautification.
///
/// The set is closed on purpose: formatter dispatch is an exhaustive match
/// over this enum, so adding a language forces a binding decision at
/// compile time instead of a silent dictionary miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Yaml,
    JavaScript,
    TypeScript,
    Tsx,
    Html,
    Xml,
    Css,
    Scss,
    Less,
    Markdown,
    Python,
    Java,
    C,
    Cpp,
    CSharp,
    Php,
    Go,
    Rust,
    Ruby,
    Kotlin,
    Bash,
    Sql,
    Plaintext,
}

impl Language {
    /// Every recognized language, in display order.
    pub const ALL: &'static [Language] = &[
        Language::Bash,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Css,
        Language::Go,
        Language::Html,
        Language::Java,
        Language::JavaScript,
        Language::Json,
        Language::Kotlin,
        Language::Less,
        Language::Markdown,
        Language::Php,
        Language::Plaintext,
        Language::Python,
        Language::Ruby,
        Language::Rust,
        Language::Scss,
        Language::Sql,
        Language::Tsx,
        Language::TypeScript,
        Language::Xml,
        Language::Yaml,
    ];

    /// Canonical lowercase tag for this language.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Less => "less",
            Language::Markdown => "markdown",
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Ruby => "ruby",
            Language::Kotlin => "kotlin",
            Language::Bash => "bash",
            Language::Sql => "sql",
            Language::Plaintext => "plaintext",
        }
    }

    /// Friendly label for UI selectors.
    pub fn label(self) -> &'static str {
        match self {
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Css => "CSS",
            Language::Scss => "SCSS",
            Language::Less => "Less",
            Language::Markdown => "Markdown",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Kotlin => "Kotlin",
            Language::Bash => "Bash",
            Language::Sql => "SQL",
            Language::Plaintext => "Plain text",
        }
    }

    /// Parse a tag, accepting aliases and legacy names case-insensitively.
    ///
    /// # Returns
    /// The matching language, or `None` for an unknown tag.
    pub fn from_tag(tag: &str) -> Option<Language> {
        let lowered = tag.trim().to_ascii_lowercase();
        let language = match lowered.as_str() {
            "json" | "jsonl" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "javascript" | "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "typescript" | "ts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "html" | "htm" => Language::Html,
            "xml" => Language::Xml,
            "css" => Language::Css,
            "scss" | "sass" => Language::Scss,
            "less" => Language::Less,
            "markdown" | "md" => Language::Markdown,
            "python" | "py" => Language::Python,
            "java" => Language::Java,
            "c" => Language::C,
            "cpp" | "c++" | "cc" | "cxx" => Language::Cpp,
            "csharp" | "c#" | "cs" => Language::CSharp,
            "php" => Language::Php,
            "go" | "golang" => Language::Go,
            "rust" | "rs" => Language::Rust,
            "ruby" | "rb" => Language::Ruby,
            "kotlin" | "kt" => Language::Kotlin,
            "bash" | "sh" | "shell" | "zsh" => Language::Bash,
            "sql" => Language::Sql,
            "plaintext" | "plain text" | "plain" | "text" | "txt" => Language::Plaintext,
            _ => return None,
        };
        Some(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
