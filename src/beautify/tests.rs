use super::Beautifier;
use crate::error::BeautifyError;
use crate::language::Language;
use crate::options::IndentOptions;
use pretty_assertions::assert_eq;

fn beautifier() -> Beautifier {
    Beautifier::new()
}

#[test]
fn json_pretty_print_preserves_key_order() {
    let out = beautifier()
        .beautify("{\"b\":2,\"a\":1}", Language::Json, Some(IndentOptions::spaces(4)))
        .unwrap();
    assert_eq!(out, "{\n    \"b\": 2,\n    \"a\": 1\n}");
}

#[test]
fn json_default_indent_is_two() {
    let out = beautifier()
        .beautify("{\"a\":1}", Language::Json, None)
        .unwrap();
    assert_eq!(out, "{\n  \"a\": 1\n}");
}

#[test]
fn json_lines_input_recovers_per_line() {
    let input = "{\"a\":1}\n{\"b\":2}";
    let out = beautifier()
        .beautify(input, Language::Json, None)
        .unwrap();
    assert_eq!(out, "{\n  \"a\": 1\n}\n{\n  \"b\": 2\n}");
}

#[test]
fn json_recovery_keeps_unparseable_lines() {
    let input = "not json at all\n{\"ok\":true}";
    let out = beautifier()
        .beautify(input, Language::Json, None)
        .unwrap();
    assert_eq!(out, "not json at all\n{\n  \"ok\": true\n}");
}

#[test]
fn json_with_no_parseable_line_is_an_error() {
    let err = beautifier()
        .beautify("{broken\nstill broken", Language::Json, None)
        .unwrap_err();
    assert!(matches!(err, BeautifyError::Format { language: Language::Json, .. }));
}

#[test]
fn sort_json_orders_keys_recursively() {
    let input = "{\"b\":{\"d\":4,\"c\":3},\"a\":[{\"z\":1,\"y\":2}]}";
    let out = beautifier().sort_json(input, None).unwrap();
    assert_eq!(
        out,
        "{\n  \"a\": [\n    {\n      \"y\": 2,\n      \"z\": 1\n    }\n  ],\n  \"b\": {\n    \"c\": 3,\n    \"d\": 4\n  }\n}"
    );
}

#[test]
fn sort_json_honors_requested_indent() {
    let out = beautifier()
        .sort_json("{\"b\":2,\"a\":1}", Some(IndentOptions::spaces(4)))
        .unwrap();
    assert_eq!(out, "{\n    \"a\": 1,\n    \"b\": 2\n}");
}

#[test]
fn sort_json_is_idempotent() {
    let once = beautifier().sort_json("{\"b\":2,\"a\":1}", None).unwrap();
    assert_eq!(beautifier().sort_json(&once, None).unwrap(), once);
}

#[test]
fn sort_json_rejects_invalid_input() {
    let err = beautifier().sort_json("{oops", None).unwrap_err();
    assert!(matches!(err, BeautifyError::InvalidJson(_)));
}

#[test]
fn compact_json_strips_whitespace() {
    let out = beautifier()
        .compact_json("{\n  \"a\": [1, 2],\n  \"b\": \"x y\"\n}")
        .unwrap();
    assert_eq!(out, "{\"a\":[1,2],\"b\":\"x y\"}");
}

#[test]
fn json_yaml_conversion_round_trips() {
    let json = "{\n  \"name\": \"demo\",\n  \"count\": 3,\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}";
    let yaml = beautifier().convert_json_to_yaml(json).unwrap();
    assert!(yaml.contains("name: demo"));
    assert!(yaml.contains("count: 3"));
    let back = beautifier().convert_yaml_to_json(&yaml).unwrap();
    assert_eq!(back, json);
}

#[test]
fn convert_yaml_rejects_malformed_input() {
    let err = beautifier().convert_yaml_to_json("key: [unclosed").unwrap_err();
    assert!(matches!(err, BeautifyError::InvalidYaml(_)));
}

#[test]
fn bash_and_plaintext_are_not_beautifiable() {
    let b = beautifier();
    for language in [Language::Bash, Language::Plaintext] {
        assert!(!b.is_beautifiable(language));
        let err = b.beautify("anything", language, None).unwrap_err();
        assert!(matches!(err, BeautifyError::UnsupportedLanguage(l) if l == language));
    }
}

#[test]
fn supported_languages_excludes_unbound_ones() {
    let supported = beautifier().supported_languages();
    assert!(supported.contains(&Language::Json));
    assert!(supported.contains(&Language::JavaScript));
    assert!(!supported.contains(&Language::Bash));
    assert!(!supported.contains(&Language::Plaintext));
    assert_eq!(supported.len(), Language::ALL.len() - 2);
}

#[test]
fn python_reindents_with_requested_width() {
    let input = "def greet():\nprint(\"hi\")\nif True:\nprint(\"ok\")";
    let out = beautifier()
        .beautify(input, Language::Python, Some(IndentOptions::spaces(2)))
        .unwrap();
    assert_eq!(out, "def greet():\n  print(\"hi\")\n  if True:\n    print(\"ok\")");
}

#[test]
fn brace_languages_share_the_reindenter() {
    let input = "func main() {\nfmt.Println(\"hi\")\n}";
    let out = beautifier().beautify(input, Language::Go, None).unwrap();
    assert_eq!(out, "func main() {\n    fmt.Println(\"hi\")\n}");
}

#[test]
fn ruby_defaults_to_two_columns() {
    let input = "def hello\nputs \"hi\"\nend";
    let out = beautifier().beautify(input, Language::Ruby, None).unwrap();
    assert_eq!(out, "def hello\n  puts \"hi\"\nend");
}

#[test]
fn sql_uppercases_and_splits_clauses() {
    let out = beautifier()
        .beautify("select id from users where id = 1", Language::Sql, None)
        .unwrap();
    assert_eq!(out, "SELECT ID\nFROM USERS\nWHERE ID = 1");
}

#[test]
fn script_formatter_honors_tabs() {
    let out = beautifier()
        .beautify("function f() { return 1; }", Language::JavaScript, Some(IndentOptions::tabs()))
        .unwrap();
    assert_eq!(out, "function f() {\n\treturn 1;\n}\n");
}

#[test]
fn beautify_is_idempotent_per_language() {
    let b = beautifier();
    let cases = [
        (Language::Json, "{\"b\":[1,2],\"a\":{\"c\":3}}"),
        (Language::JavaScript, "const x={a:1,b:2};function f(y){return y+x.a;}"),
        (Language::Css, ".btn{color:red;margin:0}"),
        (Language::Html, "<div><span>Hello</span></div>"),
        (Language::Sql, "select a, b from t where a > 1 order by b"),
    ];
    for (language, input) in cases {
        let once = b.beautify(input, language, None).unwrap();
        let twice = b.beautify(&once, language, None).unwrap();
        assert_eq!(twice, once, "language: {language}");
    }
}
