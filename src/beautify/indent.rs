//! Line-based structural re-indenters for the custom formatter tier.
//!
//! These are shallow syntactic heuristics by design: they never parse
//! expressions, so multi-line statements or braces inside strings and
//! comments can mis-indent. Space-only output; `use_tabs` does not apply.

/// Brace-counting re-indenter shared by Java/C/C++/C#/PHP/Go/Rust/Kotlin.
///
/// A leading `}` dedents before its line is emitted; a trailing `{`
/// indents after. Blank lines pass through empty.
pub(crate) fn reindent_braces(code: &str, size: usize) -> String {
    let mut level = 0usize;
    let mut out = Vec::new();
    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }
        if trimmed.starts_with('}') {
            level = level.saturating_sub(1);
        }
        out.push(indented(trimmed, level, size));
        if trimmed.ends_with('{') {
            level += 1;
        }
    }
    out.join("\n")
}

const PYTHON_DEDENT_KEYWORDS: &[&str] = &["except", "elif", "else", "finally", "case"];

/// Keyword-block re-indenter for Python.
///
/// Tracks naive quote state character by character; a line that leaves a
/// string open is emitted verbatim so multi-line string content is never
/// re-indented. Indents after any line ending in `:` that is not a comment
/// and carries no triple-quote delimiter.
pub(crate) fn reindent_python(code: &str, size: usize) -> String {
    let mut level = 0usize;
    let mut out = Vec::new();
    let mut in_string = false;
    let mut string_delim = '"';
    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }
        for ch in trimmed.chars() {
            if !in_string && (ch == '"' || ch == '\'') {
                in_string = true;
                string_delim = ch;
            } else if in_string && ch == string_delim {
                in_string = false;
            }
        }
        if in_string {
            out.push(line.to_string());
            continue;
        }
        if PYTHON_DEDENT_KEYWORDS
            .iter()
            .any(|kw| word_prefix(trimmed, kw))
        {
            level = level.saturating_sub(1);
        }
        out.push(indented(trimmed, level, size));
        if trimmed.ends_with(':')
            && !trimmed.starts_with('#')
            && !trimmed.contains("\"\"\"")
            && !trimmed.contains("'''")
        {
            level += 1;
        }
    }
    out.join("\n")
}

const RUBY_INDENT_KEYWORDS: &[&str] = &[
    "def", "class", "module", "if", "unless", "while", "until", "for", "begin", "case",
];

/// Keyword-block re-indenter for Ruby: dedent on `end`, indent after block
/// openers or a `do` anywhere in the line.
pub(crate) fn reindent_ruby(code: &str, size: usize) -> String {
    let mut level = 0usize;
    let mut out = Vec::new();
    for line in code.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }
        if word_prefix(trimmed, "end") {
            level = level.saturating_sub(1);
        }
        out.push(indented(trimmed, level, size));
        if RUBY_INDENT_KEYWORDS
            .iter()
            .any(|kw| word_prefix(trimmed, kw))
            || contains_word(trimmed, "do")
        {
            level += 1;
        }
    }
    out.join("\n")
}

fn indented(trimmed: &str, level: usize, size: usize) -> String {
    let mut line = " ".repeat(level * size);
    line.push_str(trimmed);
    line
}

fn word_prefix(line: &str, word: &str) -> bool {
    line.strip_prefix(word).is_some_and(|rest| {
        rest.chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    })
}

fn contains_word(line: &str, word: &str) -> bool {
    line.match_indices(word).any(|(idx, _)| {
        let boundary_before = line[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        let boundary_after = line[idx + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        boundary_before && boundary_after
    })
}

#[cfg(test)]
mod tests {
    use super::{reindent_braces, reindent_python, reindent_ruby};

    #[test]
    fn braces_reindent_nested_blocks() {
        let input = "int main() {\nif (x) {\nreturn 1;\n}\nreturn 0;\n}";
        let expected = "int main() {\n    if (x) {\n        return 1;\n    }\n    return 0;\n}";
        assert_eq!(reindent_braces(input, 4), expected);
    }

    #[test]
    fn braces_level_saturates_on_unbalanced_input() {
        let input = "}\n}\nint x;";
        assert_eq!(reindent_braces(input, 4), "}\n}\nint x;");
    }

    #[test]
    fn python_indents_after_colon_and_dedents_on_else() {
        let input = "if x:\na()\nelse:\nb()";
        let expected = "if x:\n    a()\nelse:\n    b()";
        assert_eq!(reindent_python(input, 4), expected);
    }

    #[test]
    fn python_line_with_open_string_passes_through() {
        let input = "x = \"start\ny = 1";
        let formatted = reindent_python(input, 4);
        assert!(formatted.starts_with("x = \"start"));
    }

    #[test]
    fn ruby_indents_blocks_and_dedents_end() {
        let input = "class Greeter\ndef hello\nputs \"hi\"\nend\nend";
        let expected = "class Greeter\n  def hello\n    puts \"hi\"\n  end\nend";
        assert_eq!(reindent_ruby(input, 2), expected);
    }

    #[test]
    fn ruby_do_block_indents() {
        let input = "items.each do |item|\nputs item\nend";
        let expected = "items.each do |item|\n  puts item\nend";
        assert_eq!(reindent_ruby(input, 2), expected);
    }
}
