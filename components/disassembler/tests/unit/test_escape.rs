//! Tests for string escaping

use disassembler::{escape_string, unescape_string};

#[test]
fn test_escape_each_special_character() {
    assert_eq!(escape_string("\\"), "\\\\");
    assert_eq!(escape_string("\""), "\\\"");
    assert_eq!(escape_string("\n"), "\\n");
    assert_eq!(escape_string("\t"), "\\t");
    assert_eq!(escape_string("\r"), "\\r");
    assert_eq!(escape_string("plain text"), "plain text");
}

#[test]
fn test_escape_does_not_double_escape() {
    // A literal backslash followed by `n` is not a newline
    assert_eq!(escape_string("\\n"), "\\\\n");
    assert_eq!(escape_string("say \"hi\"\n"), "say \\\"hi\\\"\\n");
}

#[test]
fn test_round_trip() {
    let samples = [
        "",
        "hello",
        "tab\tnew\nline\r",
        "quote \" and backslash \\",
        "\\n is not a newline",
        "unicode: héllo wörld ✓",
        "\\\\\"\"",
    ];
    for s in samples {
        assert_eq!(unescape_string(&escape_string(s)), s);
    }
}

#[test]
fn test_unescape_recognized_sequences() {
    assert_eq!(unescape_string(r#"a\"b\\c\nd\te\rf"#), "a\"b\\c\nd\te\rf");
}
