//! Token-based re-printer for JavaScript/TypeScript family source.
//!
//! Two stages: a scanner that splits source into words, strings, comments,
//! and punctuation, and a printer that re-emits them with canonical
//! spacing and brace-block indentation. It is deliberately not a parser;
//! output is stable under re-formatting, which is the property the editor
//! relies on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokKind {
    Word,
    Str,
    Punct,
    LineComment,
    BlockComment,
    Blank,
}

#[derive(Debug)]
struct Tok<'a> {
    kind: TokKind,
    text: &'a str,
    own_line: bool,
}

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &[
    ">>>=", "===", "!==", "**=", "<<=", ">>=", "...", "&&=", "||=", "??=", ">>>", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "**", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "<<", ">>", "?.",
];

/// Keywords that take a space before a following `(`.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "typeof", "delete", "void", "do", "else",
    "await", "yield", "case", "new", "in", "of", "throw",
];

/// Keywords after which `+`/`-` is unary.
const VALUE_KEYWORDS: &[&str] = &["return", "case", "typeof", "throw", "yield", "in", "of"];

/// Words that keep a closing `}` on their line (`} else {`).
const BRACE_FOLLOWERS: &[&str] = &["else", "catch", "finally", "while"];

pub(crate) fn format(code: &str, indent: &str) -> String {
    let toks = tokenize(code);
    Printer::new(indent).print(&toks)
}

fn tokenize(src: &str) -> Vec<Tok<'_>> {
    let bytes = src.as_bytes();
    let mut toks = Vec::new();
    let mut i = 0;
    let mut at_line_start = true;
    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() {
            let mut newlines = 0usize;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                if bytes[i] == b'\n' {
                    newlines += 1;
                }
                i += 1;
            }
            if newlines > 0 {
                at_line_start = true;
            }
            if newlines >= 2 {
                toks.push(Tok {
                    kind: TokKind::Blank,
                    text: "",
                    own_line: true,
                });
            }
            continue;
        }

        let start = i;
        let kind = if c == b'"' || c == b'\'' {
            i = scan_quoted(bytes, i, c, false);
            TokKind::Str
        } else if c == b'`' {
            i = scan_quoted(bytes, i, b'`', true);
            TokKind::Str
        } else if c == b'/' && bytes.get(i + 1) == Some(&b'/') {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
            TokKind::LineComment
        } else if c == b'/' && bytes.get(i + 1) == Some(&b'*') {
            i += 2;
            while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                i += 1;
            }
            i = (i + 2).min(bytes.len());
            TokKind::BlockComment
        } else if c.is_ascii_digit() {
            i = scan_number(bytes, i);
            TokKind::Word
        } else if is_word_byte(c) {
            while i < bytes.len() && is_word_byte(bytes[i]) {
                i += 1;
            }
            TokKind::Word
        } else {
            i += match_operator(&src[i..]).map_or(1, str::len);
            TokKind::Punct
        };

        toks.push(Tok {
            kind,
            text: &src[start..i],
            own_line: at_line_start,
        });
        at_line_start = false;
    }
    toks
}

fn is_word_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$' || !c.is_ascii()
}

fn scan_quoted(bytes: &[u8], start: usize, delim: u8, multiline: bool) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if !multiline => return i,
            c if c == delim => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        let c = bytes[i];
        let exponent_sign = (c == b'+' || c == b'-')
            && matches!(bytes.get(i.wrapping_sub(1)), Some(b'e') | Some(b'E'))
            && i > start;
        if c.is_ascii_alphanumeric() || c == b'.' || c == b'_' || exponent_sign {
            i += 1;
        } else {
            break;
        }
    }
    i
}

fn match_operator(rest: &str) -> Option<&'static str> {
    OPERATORS.iter().copied().find(|op| rest.starts_with(op))
}

/// What the previously emitted token was, for spacing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Word,
    Str,
    CloseBracket,
    CloseBrace,
    OpenBracket,
    OpenBrace,
    Operator,
    Separator,
    Dot,
    Unary,
}

struct Printer<'a> {
    indent: &'a str,
    out: Vec<String>,
    line: String,
    line_level: usize,
    level: usize,
    containers: Vec<u8>,
    ternary_depth: usize,
    pending_newline: bool,
    pending_space: bool,
    prev: Prev,
    last_word: &'a str,
}

impl<'a> Printer<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            indent,
            out: Vec::new(),
            line: String::new(),
            line_level: 0,
            level: 0,
            containers: Vec::new(),
            ternary_depth: 0,
            pending_newline: false,
            pending_space: false,
            prev: Prev::Start,
            last_word: "",
        }
    }

    fn print(mut self, toks: &[Tok<'a>]) -> String {
        for (idx, tok) in toks.iter().enumerate() {
            match tok.kind {
                TokKind::Blank => self.blank_line(),
                TokKind::Word => self.word(tok.text),
                TokKind::Str => self.value_token(tok.text, Prev::Str),
                TokKind::LineComment => self.line_comment(tok),
                TokKind::BlockComment => self.value_token(tok.text, Prev::Str),
                TokKind::Punct => self.punct(tok.text, toks, idx),
            }
        }
        self.finish()
    }

    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            let mut rendered = self.indent.repeat(self.line_level);
            rendered.push_str(&self.line);
            self.out.push(rendered);
            self.line.clear();
        }
        self.pending_space = false;
    }

    fn start_token(&mut self, space_before: bool) {
        if self.pending_newline {
            self.flush_line();
            self.pending_newline = false;
        }
        if self.line.is_empty() {
            self.line_level = self.level;
        } else if space_before || self.pending_space {
            self.line.push(' ');
        }
        self.pending_space = false;
    }

    fn push(&mut self, text: &str, space_before: bool) {
        self.start_token(space_before);
        self.line.push_str(text);
    }

    /// Previous token produced a value; binary operators and block braces
    /// take a space after one.
    fn after_value(&self) -> bool {
        matches!(
            self.prev,
            Prev::Word | Prev::Str | Prev::CloseBracket | Prev::CloseBrace
        ) && !(self.prev == Prev::Word && VALUE_KEYWORDS.contains(&self.last_word))
    }

    fn innermost(&self) -> Option<u8> {
        self.containers.last().copied()
    }

    fn word(&mut self, text: &'a str) {
        let space = matches!(
            self.prev,
            Prev::Word | Prev::Str | Prev::CloseBracket | Prev::CloseBrace
        );
        self.push(text, space);
        self.prev = Prev::Word;
        self.last_word = text;
    }

    fn value_token(&mut self, text: &str, kind: Prev) {
        let space = matches!(
            self.prev,
            Prev::Word | Prev::Str | Prev::CloseBracket | Prev::CloseBrace
        );
        self.push(text, space);
        self.prev = kind;
    }

    fn blank_line(&mut self) {
        if self.pending_newline {
            self.flush_line();
            self.pending_newline = false;
        }
        let last_is_blank = self.out.last().is_some_and(String::is_empty);
        if self.line.is_empty() && !self.out.is_empty() && !last_is_blank {
            self.out.push(String::new());
        }
    }

    fn line_comment(&mut self, tok: &Tok<'a>) {
        if !tok.own_line && !self.line.is_empty() {
            // Keep a trailing comment on its statement line.
            self.pending_newline = false;
            self.line.push(' ');
            self.line.push_str(tok.text);
        } else {
            self.push(tok.text, false);
        }
        self.pending_newline = true;
        self.prev = Prev::Separator;
    }

    fn punct(&mut self, text: &str, toks: &[Tok<'a>], idx: usize) {
        match text {
            "{" => {
                // An opening brace after an operator, `(`, `[`, or a
                // separator starts an object literal (entries break per
                // comma); anything else, including an arrow body, is a
                // statement block.
                let arrow_body = self.line.ends_with("=>");
                let object_literal = !arrow_body
                    && matches!(
                        self.prev,
                        Prev::Operator | Prev::OpenBracket | Prev::Separator
                    );
                self.push("{", self.after_value() || self.prev == Prev::Operator);
                self.containers
                    .push(if object_literal { b'o' } else { b'{' });
                self.level += 1;
                self.ternary_depth = 0;
                self.pending_newline = true;
                self.prev = Prev::OpenBrace;
            }
            "}" => {
                while let Some(open) = self.containers.pop() {
                    if open == b'{' || open == b'o' {
                        break;
                    }
                }
                self.level = self.level.saturating_sub(1);
                self.ternary_depth = 0;
                self.flush_line();
                self.pending_newline = false;
                self.push("}", false);
                self.prev = Prev::CloseBrace;
                if !brace_follower(toks, idx + 1) {
                    self.pending_newline = true;
                }
            }
            "(" => {
                let space =
                    self.prev == Prev::Word && CONTROL_KEYWORDS.contains(&self.last_word);
                self.push("(", space);
                self.containers.push(b'(');
                self.prev = Prev::OpenBracket;
            }
            ")" => {
                while let Some(open) = self.containers.pop() {
                    if open == b'(' {
                        break;
                    }
                }
                self.push(")", false);
                self.prev = Prev::CloseBracket;
            }
            "[" => {
                self.push("[", false);
                self.containers.push(b'[');
                self.prev = Prev::OpenBracket;
            }
            "]" => {
                while let Some(open) = self.containers.pop() {
                    if open == b'[' {
                        break;
                    }
                }
                self.push("]", false);
                self.prev = Prev::CloseBracket;
            }
            ";" => {
                self.push(";", false);
                self.ternary_depth = 0;
                if self.innermost() == Some(b'(') {
                    self.pending_space = true;
                } else {
                    self.pending_newline = true;
                }
                self.prev = Prev::Separator;
            }
            "," => {
                self.push(",", false);
                if self.innermost() == Some(b'o') {
                    self.pending_newline = true;
                } else {
                    self.pending_space = true;
                }
                self.prev = Prev::Separator;
            }
            ":" => {
                let ternary = self.ternary_depth > 0;
                if ternary {
                    self.ternary_depth -= 1;
                }
                self.push(":", ternary);
                self.pending_space = true;
                self.prev = Prev::Separator;
            }
            "?" => {
                self.push("?", self.after_value());
                self.ternary_depth += 1;
                self.pending_space = true;
                self.prev = Prev::Operator;
            }
            "." | "?." | "..." => {
                self.push(text, false);
                self.prev = Prev::Dot;
            }
            "=>" => {
                self.push("=>", true);
                self.pending_space = true;
                self.prev = Prev::Operator;
            }
            "!" | "~" => {
                self.push(text, self.prev == Prev::Word);
                self.prev = Prev::Unary;
            }
            "++" | "--" => {
                if self.after_value() {
                    self.push(text, false);
                    self.prev = Prev::CloseBracket;
                } else {
                    self.push(text, false);
                    self.prev = Prev::Unary;
                }
            }
            "+" | "-" if !self.after_value() => {
                self.push(text, self.prev == Prev::Word);
                self.prev = Prev::Unary;
            }
            _ => {
                self.push(text, true);
                self.pending_space = true;
                self.prev = Prev::Operator;
            }
        }
    }

    fn finish(mut self) -> String {
        self.flush_line();
        while self.out.last().is_some_and(String::is_empty) {
            self.out.pop();
        }
        let mut rendered = self.out.join("\n");
        rendered.push('\n');
        rendered
    }
}

fn brace_follower(toks: &[Tok<'_>], idx: usize) -> bool {
    match toks.get(idx) {
        Some(tok) if tok.kind == TokKind::Word => BRACE_FOLLOWERS.contains(&tok.text),
        Some(tok) if tok.kind == TokKind::Punct => {
            matches!(tok.text, ")" | "]" | ";" | "," | "." | ":")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::format;

    #[test]
    fn expands_compact_function() {
        let input = "function add(a,b){return a+b;}";
        let expected = "function add(a, b) {\n    return a + b;\n}\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn keeps_else_on_closing_brace_line() {
        let input = "if(x){a();}else{b();}";
        let expected = "if (x) {\n    a();\n} else {\n    b();\n}\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn spaces_binary_but_not_unary_minus() {
        let input = "return -a*b;";
        assert_eq!(format(input, "    "), "return -a * b;\n");
    }

    #[test]
    fn for_loop_semicolons_stay_inline() {
        let input = "for(let i=0;i<n;i++){f(i);}";
        let expected = "for (let i = 0; i < n; i++) {\n    f(i);\n}\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn object_literal_expands_per_entry() {
        let input = "const x={a:1,b:2};";
        let expected = "const x = {\n    a: 1,\n    b: 2\n};\n";
        assert_eq!(format(input, "    "), expected);
    }

    #[test]
    fn trailing_line_comment_stays_on_its_line() {
        let input = "let x = 1; // one\nlet y = 2;";
        assert_eq!(format(input, "    "), "let x = 1; // one\nlet y = 2;\n");
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "function add(a,b){return a+b;}",
            "const f=(a)=>{if(a){return a?1:2;}\n\nreturn 0;};",
            "for(let i=0;i<3;i++){console.log(`v=${i}`);}",
        ];
        for input in inputs {
            let once = format(input, "    ");
            assert_eq!(format(&once, "    "), once, "input: {input}");
        }
    }
}
