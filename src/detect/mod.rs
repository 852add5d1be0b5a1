//! Heuristic language detection over raw editor text.

#[cfg(test)]
mod tests;

use crate::language::Language;

/// Classify a text blob into a [`Language`].
///
/// Rules run in a fixed order from most specific (structural JSON/YAML
/// parses) to least specific (keyword substrings); the first match wins.
/// The order is part of the contract: a document that parses as both JSON
/// and YAML is always reported as JSON, and scalar-only YAML (`42`,
/// `true`) is never reported as YAML.
///
/// # Returns
/// Exactly one tag per call; [`Language::Plaintext`] when nothing matches.
/// Never fails.
pub fn detect_language(text: &str) -> Language {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Language::Plaintext;
    }
    if trimmed.starts_with("#!") {
        return Language::Bash;
    }
    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Language::Json;
    }
    if parses_as_structured_yaml(trimmed) {
        return Language::Yaml;
    }
    keyword_heuristics(trimmed).unwrap_or(Language::Plaintext)
}

/// YAML parse that only accepts a non-empty mapping or sequence, so plain
/// prose and bare scalars are not misread as YAML.
fn parses_as_structured_yaml(text: &str) -> bool {
    match serde_yaml::from_str::<serde_yaml::Value>(text) {
        Ok(serde_yaml::Value::Mapping(map)) => !map.is_empty(),
        Ok(serde_yaml::Value::Sequence(seq)) => !seq.is_empty(),
        _ => false,
    }
}

/// Ordered keyword/structural heuristics. Many languages share tokens
/// (`class`, `function`, braces), so ties resolve by position in this list
/// rather than by scoring.
fn keyword_heuristics(t: &str) -> Option<Language> {
    if looks_like_react_import(t) || (has_jsx_tag(t) && t.contains(';')) {
        return Some(Language::JavaScript);
    }
    if t.starts_with('<') && t.ends_with('>') {
        return Some(Language::Html);
    }
    if leading_keyword_ident(t, "interface")
        || leading_keyword_ident(t, "type")
        || leading_keyword_ident(t, "enum")
        || (t.contains("import ") && t.contains(" from ") && t.contains(';'))
    {
        return Some(Language::TypeScript);
    }
    if (t.starts_with("import ") && t.contains(" from "))
        || t.contains("function(")
        || t.contains("const ")
        || t.contains("let ")
    {
        return Some(Language::JavaScript);
    }
    if t.contains('{') && t.contains(';') && t.contains(':') && !t.contains('<') && !t.contains('>')
    {
        return Some(Language::Css);
    }
    if leading_def_call(t) || (t.contains("import ") && t.contains(':')) {
        return Some(Language::Python);
    }
    if t.starts_with("package main") || t.starts_with("func main()") {
        return Some(Language::Go);
    }
    if t.starts_with("<?php") || (t.contains("function ") && t.contains('$')) {
        return Some(Language::Php);
    }
    if leading_keyword_ident(t, "def") || leading_keyword_ident(t, "class") || t.contains("puts ")
    {
        return Some(Language::Ruby);
    }
    if t.starts_with("fn main()") || t.starts_with("mod ") || t.starts_with("use ") {
        return Some(Language::Rust);
    }
    if t.starts_with("fun main()") || t.starts_with("package ") || t.starts_with("class ") {
        return Some(Language::Kotlin);
    }
    if t.starts_with("#include <iostream>") || leading_keyword_ident(t, "class") {
        return Some(Language::Cpp);
    }
    if t.starts_with("#include") || t.contains("int main(") {
        return Some(Language::C);
    }
    if t.starts_with("package ") || t.contains("public class") {
        return Some(Language::Java);
    }
    if t.starts_with("using System") || t.contains("namespace ") {
        return Some(Language::CSharp);
    }
    if has_ci_prefix(t, "select ") || has_ci_prefix(t, "create ") {
        return Some(Language::Sql);
    }
    if t.starts_with("# ") || leading_markdown_link(t) {
        return Some(Language::Markdown);
    }
    None
}

fn looks_like_react_import(t: &str) -> bool {
    if t.starts_with("import React ") {
        return true;
    }
    let Some(first_line) = t.lines().next() else {
        return false;
    };
    first_line.starts_with("import ")
        && (first_line.contains(" from 'react'") || first_line.contains(" from \"react\""))
}

/// A `<` immediately followed by a letter, JSX-style. Preprocessor-led
/// sources (`#include <stdio.h>`) are exempt so C/C++ rules can fire.
fn has_jsx_tag(t: &str) -> bool {
    if t.starts_with('#') {
        return false;
    }
    t.as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'<' && pair[1].is_ascii_alphabetic())
}

/// `keyword` followed by whitespace and an identifier start.
fn leading_keyword_ident(text: &str, keyword: &str) -> bool {
    let Some(rest) = text.strip_prefix(keyword) else {
        return false;
    };
    if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return false;
    }
    rest.trim_start()
        .starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

/// `def name(` at the start of the text.
fn leading_def_call(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("def ") else {
        return false;
    };
    let rest = rest.trim_start();
    let ident_end = rest
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    ident_end > 0 && rest[ident_end..].starts_with('(')
}

fn has_ci_prefix(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `[text](url)` at the start of the text.
fn leading_markdown_link(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('[') else {
        return false;
    };
    let Some(first_line) = rest.lines().next() else {
        return false;
    };
    first_line
        .find("](")
        .is_some_and(|idx| first_line[idx + 2..].contains(')'))
}
