//! Block-structural re-emitter for CSS-family stylesheets.
//!
//! Splits the sheet on braces and semicolons (outside strings and
//! comments), then re-emits one selector or declaration per line with
//! normalized `prop: value;` spacing. Nested blocks (media queries, SCSS
//! nesting) indent by depth.

pub(crate) fn format(code: &str, indent: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut level = 0usize;
    let mut buf = String::new();
    let mut chars = code.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\'' => {
                buf.push(ch);
                for inner in chars.by_ref() {
                    buf.push(inner);
                    if inner == ch {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                flush_fragment(&mut out, &buf, level, indent, FragmentKind::Bare);
                buf.clear();
                let mut comment = String::from('/');
                let mut prev = ' ';
                for inner in chars.by_ref() {
                    comment.push(inner);
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                push_line(&mut out, comment.trim(), level, indent);
            }
            '{' => {
                flush_fragment(&mut out, &buf, level, indent, FragmentKind::BlockOpen);
                buf.clear();
                level += 1;
            }
            '}' => {
                flush_fragment(&mut out, &buf, level, indent, FragmentKind::Declaration);
                buf.clear();
                level = level.saturating_sub(1);
                push_line(&mut out, "}", level, indent);
            }
            ';' => {
                flush_fragment(&mut out, &buf, level, indent, FragmentKind::Declaration);
                buf.clear();
            }
            _ => buf.push(ch),
        }
    }
    flush_fragment(&mut out, &buf, level, indent, FragmentKind::Bare);

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

enum FragmentKind {
    /// Selector or at-rule prelude, rendered as `prelude {`.
    BlockOpen,
    /// Property/value pair or statement, rendered with a trailing `;`.
    Declaration,
    /// Trailing text with no terminator; emitted as-is.
    Bare,
}

fn flush_fragment(
    out: &mut Vec<String>,
    fragment: &str,
    level: usize,
    indent: &str,
    kind: FragmentKind,
) {
    let collapsed = collapse_whitespace(fragment);
    if collapsed.is_empty() {
        return;
    }
    let line = match kind {
        FragmentKind::BlockOpen => format!("{collapsed} {{"),
        FragmentKind::Declaration => format!("{};", normalize_declaration(&collapsed)),
        FragmentKind::Bare => collapsed,
    };
    push_line(out, &line, level, indent);
}

fn push_line(out: &mut Vec<String>, line: &str, level: usize, indent: &str) {
    let mut rendered = indent.repeat(level);
    rendered.push_str(line);
    out.push(rendered);
}

fn collapse_whitespace(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `color:red` → `color: red`; fragments without a colon pass through.
fn normalize_declaration(fragment: &str) -> String {
    match fragment.split_once(':') {
        Some((property, value)) if !value.trim().is_empty() => {
            format!("{}: {}", property.trim_end(), value.trim_start())
        }
        _ => fragment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format;

    #[test]
    fn expands_compact_rule() {
        let input = ".btn{color:red;margin:0}";
        let expected = ".btn {\n    color: red;\n    margin: 0;\n}\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn nested_media_query_indents() {
        let input = "@media (min-width: 600px){.btn{color:blue;}}";
        let expected =
            "@media (min-width: 600px) {\n    .btn {\n        color: blue;\n    }\n}\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format(".a{x:1;y:2}.b{z:3}", "  ");
        assert_eq!(format(&once, "  "), once);
    }
}
