//! Detection tests: rule ordering, structural parses, and the keyword matrix.

use super::detect_language;
use crate::language::Language;

fn assert_detection_cases(cases: &[(&str, Language)]) {
    for (content, expected) in cases {
        assert_eq!(detect_language(content), *expected, "content: {content}");
    }
}

#[test]
fn empty_and_whitespace_input_is_plaintext() {
    let cases = [
        ("", Language::Plaintext),
        ("   ", Language::Plaintext),
        ("\n\t\n", Language::Plaintext),
    ];
    assert_detection_cases(cases.as_slice());
}

#[test]
fn shebang_wins_before_everything_else() {
    let cases = [
        ("#!/bin/bash\necho hi", Language::Bash),
        ("#!/usr/bin/env python3\nprint('hi')", Language::Bash),
    ];
    assert_detection_cases(cases.as_slice());
}

#[test]
fn valid_json_is_always_json() {
    let cases = [
        ("{\"b\":2,\"a\":1}", Language::Json),
        ("[1, 2, 3]", Language::Json),
        ("\"quoted\"", Language::Json),
        ("42", Language::Json),
        ("true", Language::Json),
    ];
    assert_detection_cases(cases.as_slice());
}

#[test]
fn json_beats_yaml_when_both_parse() {
    // Every JSON document is valid YAML; the JSON rule runs first.
    assert_eq!(detect_language("{\"a\": 1}"), Language::Json);
    assert_eq!(detect_language("[true, false]"), Language::Json);
}

#[test]
fn structured_yaml_is_yaml_but_scalars_are_not() {
    let cases = [
        (
            "apiVersion: v1\nkind: Service\nmetadata:\n  name: demo",
            Language::Yaml,
        ),
        ("- apples\n- oranges", Language::Yaml),
        // Scalar-only YAML must not be reported as YAML; these are valid
        // JSON scalars and resolve earlier.
        ("42", Language::Json),
        ("plain prose that is one yaml scalar", Language::Plaintext),
    ];
    assert_detection_cases(cases.as_slice());
}

#[test]
fn keyword_matrix_detects_expected_languages() {
    let cases = [
        (
            "import React from 'react';\nconst x = 1;",
            Language::JavaScript,
        ),
        ("const x = 1;\nconsole.log(x);", Language::JavaScript),
        ("<div>Hello</div>", Language::Html),
        ("<html>\n<body>\n</body>\n</html>", Language::Html),
        (
            "import { x } from './mod';\nexport const y = x;",
            Language::TypeScript,
        ),
        ("body {\n  color: red;\n}", Language::Css),
        (
            "def greet():\nprint(\"hi\")\nif True:\nprint(\"ok\")",
            Language::Python,
        ),
        (
            "package main\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}",
            Language::Go,
        ),
        ("<?php\necho \"hi\";", Language::Php),
        (
            "class Greeter\n  def initialize(name)\n  end\nend",
            Language::Ruby,
        ),
        // No `:` (which would hit the css rule) and no `let`/`const`
        // (which would hit the javascript rule).
        ("fn main() {\n    println!(\"hi\");\n}", Language::Rust),
        ("fun main() {\n    println(\"hi\")\n}", Language::Kotlin),
        (
            "#include <iostream>\nint main() { return 0; }",
            Language::Cpp,
        ),
        (
            "#include <stdio.h>\nint main(void) { return 0; }",
            Language::C,
        ),
        (
            "public class Main {\n    public static void main(String[] args) {}\n}",
            Language::Java,
        ),
        ("using System;\nnamespace Demo { }", Language::CSharp),
        ("SELECT id, name FROM users WHERE id = 1;", Language::Sql),
        ("select * from t", Language::Sql),
        ("# Title\n\nSome prose.", Language::Markdown),
        ("[DiffPad](https://example.com) is neat.", Language::Markdown),
        ("nothing recognizable here", Language::Plaintext),
    ];
    assert_detection_cases(cases.as_slice());
}

#[test]
fn rule_order_breaks_overlapping_token_ties() {
    // `class` alone belongs to Kotlin before C++ and Java; Ruby claims it
    // only at line start via its own earlier rule position.
    assert_eq!(detect_language("class Greeter\nend"), Language::Ruby);
    // `package` without `main` is Kotlin before Java.
    assert_eq!(detect_language("package demo.app"), Language::Kotlin);
}
