//! Approximate SQL formatter: uppercase everything, one clause per line.
//!
//! Lossy for quoted string literals containing clause keywords; that is a
//! documented limitation of this formatter, not a defect to patch over.

/// Clause starters, multi-word phrases first so `LEFT JOIN` stays intact.
const CLAUSE_KEYWORDS: &[&[&str]] = &[
    &["LEFT", "JOIN"],
    &["RIGHT", "JOIN"],
    &["INNER", "JOIN"],
    &["OUTER", "JOIN"],
    &["ORDER", "BY"],
    &["GROUP", "BY"],
    &["SELECT"],
    &["FROM"],
    &["WHERE"],
    &["HAVING"],
    &["INSERT"],
    &["UPDATE"],
    &["DELETE"],
    &["CREATE"],
    &["ALTER"],
    &["DROP"],
    &["JOIN"],
];

pub(crate) fn format(code: &str) -> String {
    let upper = code.to_uppercase();
    let tokens: Vec<&str> = upper.split_whitespace().collect();

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match clause_at(&tokens, i) {
            Some(words) => {
                if !current.is_empty() {
                    lines.push(current.join(" "));
                }
                current = tokens[i..i + words.len()].to_vec();
                i += words.len();
            }
            None => {
                current.push(tokens[i]);
                i += 1;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines.join("\n")
}

fn clause_at<'a>(tokens: &[&str], i: usize) -> Option<&'a [&'a str]> {
    CLAUSE_KEYWORDS.iter().copied().find(|words| {
        words
            .iter()
            .enumerate()
            .all(|(offset, word)| tokens.get(i + offset) == Some(word))
    })
}
