//! Line normalizer for Markdown.
//!
//! Strips trailing whitespace, fixes `#heading` spacing, and collapses
//! runs of blank lines, leaving fenced code blocks untouched.

pub(crate) fn format(code: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in code.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if is_fence_delimiter(line) {
            in_fence = !in_fence;
            out.push(line.trim_end().to_string());
            continue;
        }
        if in_fence {
            out.push(line.to_string());
            continue;
        }

        let trimmed_end = line.trim_end();
        if trimmed_end.is_empty() {
            if !out.last().is_some_and(String::is_empty) {
                out.push(String::new());
            }
            continue;
        }
        out.push(normalize_heading(trimmed_end));
    }

    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    while out.first().is_some_and(String::is_empty) {
        out.remove(0);
    }
    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

fn is_fence_delimiter(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// `##Heading` → `## Heading`; already-spaced headings pass through.
fn normalize_heading(line: &str) -> String {
    if !line.starts_with('#') {
        return line.to_string();
    }
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes > 6 {
        return line.to_string();
    }
    let title = line[hashes..].trim_start();
    if title.is_empty() {
        return line.to_string();
    }
    format!("{} {}", "#".repeat(hashes), title)
}

#[cfg(test)]
mod tests {
    use super::format;

    #[test]
    fn fixes_heading_spacing_and_blank_runs() {
        let input = "#Title\n\n\n\nBody text.   \n";
        assert_eq!(format(input), "# Title\n\nBody text.\n");
    }

    #[test]
    fn fenced_code_is_untouched() {
        let input = "# T\n\n```\n  raw   spaces\n\n\nmore\n```\n";
        let formatted = format(input);
        assert!(formatted.contains("  raw   spaces\n\n\nmore"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format("##One\n\n\ntext  \n\n```\ncode\n```\n");
        assert_eq!(format(&once), once);
    }
}
