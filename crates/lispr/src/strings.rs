//! Escape/unescape tables for string literals, mirroring mpc's
//! `mpcf_escape`/`mpcf_unescape` lookup tables used by
//! `examples/original_source/functions.c::lval_read_str` and `lval_print`.

/// Converts backslash escapes in `s` (the literal's contents, quotes already
/// stripped) into the characters they denote. Unknown escapes pass the
/// escaped character through unchanged rather than failing; mpc's table
/// does the same for any byte it doesn't recognize.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('a') => out.push('\u{7}'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('r') => out.push('\r'),
            Some('v') => out.push('\u{b}'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// The mirror of [`unescape`], used by `Value`'s `Display` impl for strings.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\u{b}' => out.push_str("\\v"),
            other => out.push(other),
        }
    }
    out
}
