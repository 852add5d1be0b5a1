//! Structural re-indenter for HTML/XML markup.
//!
//! Scans tag by tag and emits every tag and text run on its own line at
//! the current depth. Void and self-closing elements do not change depth;
//! `<script>`, `<style>`, and `<pre>` bodies pass through verbatim so code
//! and preformatted text are never re-indented.

/// HTML elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose raw text content must not be touched.
const RAW_ELEMENTS: &[&str] = &["script", "style", "pre"];

pub(crate) fn format(code: &str, indent: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut level = 0usize;
    let mut rest = code;

    while let Some(pos) = rest.find('<') {
        emit_text(&mut out, &rest[..pos], level, indent);
        rest = &rest[pos..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |e| e + 3);
            push_line(&mut out, &rest[..end], level, indent);
            rest = &rest[end..];
            continue;
        }

        let end = rest.find('>').map_or(rest.len(), |e| e + 1);
        let tag = collapse_whitespace(&rest[..end]);
        rest = &rest[end..];
        let name = tag_name(&tag);

        if tag.starts_with("</") {
            level = level.saturating_sub(1);
            push_line(&mut out, &tag, level, indent);
        } else if tag.starts_with("<!") || tag.starts_with("<?") {
            push_line(&mut out, &tag, level, indent);
        } else if tag.ends_with("/>") || VOID_ELEMENTS.contains(&name.as_str()) {
            push_line(&mut out, &tag, level, indent);
        } else {
            push_line(&mut out, &tag, level, indent);
            level += 1;
            if RAW_ELEMENTS.contains(&name.as_str()) {
                rest = emit_raw_content(&mut out, rest, &name);
            }
        }
    }
    emit_text(&mut out, rest, level, indent);

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

/// Emit raw element content verbatim up to (not including) its close tag.
///
/// # Returns
/// The remaining input starting at the close tag.
fn emit_raw_content<'a>(out: &mut Vec<String>, rest: &'a str, name: &str) -> &'a str {
    let close = format!("</{name}");
    let lower = rest.to_ascii_lowercase();
    let end = lower.find(&close).unwrap_or(rest.len());
    let content = &rest[..end];
    for line in content.split('\n') {
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            out.push(line.to_string());
        }
    }
    &rest[end..]
}

fn emit_text(out: &mut Vec<String>, text: &str, level: usize, indent: &str) {
    let collapsed = collapse_whitespace(text);
    if !collapsed.is_empty() {
        push_line(out, &collapsed, level, indent);
    }
}

fn push_line(out: &mut Vec<String>, line: &str, level: usize, indent: &str) {
    let mut rendered = indent.repeat(level);
    rendered.push_str(line);
    out.push(rendered);
}

fn collapse_whitespace(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased element name of a tag fragment (`</div ...` → `div`).
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::format;

    #[test]
    fn nests_elements_by_depth() {
        let input = "<div><span>Hello</span></div>";
        let expected = "<div>\n    <span>\n        Hello\n    </span>\n</div>\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn void_and_self_closing_tags_do_not_indent() {
        let input = "<div><br><img src=\"x.png\"/></div>";
        let expected = "<div>\n    <br>\n    <img src=\"x.png\"/>\n</div>\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn doctype_stays_at_top_level() {
        let input = "<!DOCTYPE html><html><body></body></html>";
        let expected = "<!DOCTYPE html>\n<html>\n    <body>\n    </body>\n</html>\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn script_content_passes_through_verbatim() {
        let input = "<div><script>var a = 1;\nif (a) { go(); }</script></div>";
        let formatted = format(input, "    ");
        assert!(formatted.contains("var a = 1;"));
        assert!(formatted.contains("if (a) { go(); }"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "<div><p>One</p><p>Two</p></div>",
            "<!DOCTYPE html><html><head><title>T</title></head><body><br></body></html>",
        ];
        for input in inputs {
            let once = format(input, "  ");
            assert_eq!(format(&once, "  "), once, "input: {input}");
        }
    }
}
