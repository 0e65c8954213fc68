//! Character-level scanning of block bodies.
//!
//! Splits text on separators that appear at the top level, i.e. outside of
//! quoted literals, angle-bracket IRIs and `[ ... ]` blank nodes. The scan is
//! iterative and tolerant: unbalanced input never fails, it only changes
//! where the splits land.

use crate::config::DATETIME_MARKERS;

/// Lexical context tracked while scanning.
#[derive(Default)]
struct ScanState {
    in_literal: bool,
    escaped: bool,
    in_iri: bool,
    depth: usize,
}

impl ScanState {
    /// Feed one character. Returns `true` when it sits at the top level.
    fn step(&mut self, c: char) -> bool {
        if self.in_literal {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_literal = false;
            }
            return false;
        }
        if self.in_iri {
            if c == '>' {
                self.in_iri = false;
            }
            return false;
        }

        match c {
            '"' => {
                self.in_literal = true;
                false
            }
            '<' => {
                self.in_iri = true;
                false
            }
            '[' => {
                self.depth += 1;
                false
            }
            ']' => {
                self.depth = self.depth.saturating_sub(1);
                false
            }
            _ => self.depth == 0,
        }
    }
}

/// Remove a `#` comment that starts outside literals and IRIs.
pub fn strip_comment(line: &str) -> &str {
    let mut state = ScanState::default();
    for (i, c) in line.char_indices() {
        if c == '#' && !state.in_literal && !state.in_iri {
            return &line[..i];
        }
        state.step(c);
    }
    line
}

/// Split on a separator character found at the top level.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut state = ScanState::default();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if state.step(c) && c == separator {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Cut the text at the first top-level statement terminator.
///
/// A terminator is a `.` followed by whitespace or the end of input, so
/// decimals and dotted local names are left alone.
pub fn until_terminator(text: &str) -> &str {
    let mut state = ScanState::default();
    for (i, c) in text.char_indices() {
        if state.step(c) && c == '.' {
            let next = text[i + 1..].chars().next();
            if next.is_none_or(char::is_whitespace) {
                return &text[..i];
            }
        }
    }
    text
}

/// Split text into statements at top-level `;` and terminators.
///
/// Used for documents holding several subjects, where [`until_terminator`]
/// would stop at the first one.
pub fn statements(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut state = ScanState::default();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !state.step(c) {
            continue;
        }
        let is_terminator =
            c == '.' && text[i + 1..].chars().next().is_none_or(char::is_whitespace);
        if c == ';' || is_terminator {
            parts.push(&text[start..i]);
            start = i + 1;
        }
    }
    parts.push(&text[start..]);
    parts.retain(|p| !p.trim().is_empty());
    parts
}

/// A recognized object term.
#[derive(Debug, Clone, PartialEq)]
pub enum Object<'a> {
    /// Literal value, quotes removed (typed literals are kept verbatim).
    Literal(String),
    /// Angle-bracket IRI, brackets removed.
    Iri(&'a str),
    /// Inner text of a `[ ... ]` blank node.
    BlankNode(&'a str),
}

/// Recognize a single object term. Returns `None` for anything else.
pub fn parse_object(text: &str) -> Option<Object<'_>> {
    let text = text.trim();
    match text.chars().next()? {
        '"' => parse_literal(text),
        '<' => {
            let inner = text.strip_prefix('<')?.strip_suffix('>')?;
            if inner.is_empty() || inner.contains(['<', '>']) {
                None
            } else {
                Some(Object::Iri(inner))
            }
        }
        '[' => {
            let inner = text.strip_prefix('[')?.strip_suffix(']')?;
            Some(Object::BlankNode(inner))
        }
        _ => None,
    }
}

fn parse_literal(text: &str) -> Option<Object<'_>> {
    let mut escaped = false;
    let mut close = None;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            close = Some(i);
            break;
        }
    }
    let close = close?;
    let rest = text[close + 1..].trim();

    if let Some(datatype) = rest.strip_prefix("^^") {
        // dateTime literals stay verbatim so the renderer can detect them.
        if DATETIME_MARKERS.iter().any(|m| datatype.contains(m)) {
            return Some(Object::Literal(text.to_string()));
        }
        return Some(Object::Literal(unescape(&text[1..close])));
    }
    if rest.is_empty() || rest.starts_with('@') {
        return Some(Object::Literal(unescape(&text[1..close])));
    }
    None
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("schema:x \"a\" ; # note"), "schema:x \"a\" ; ");
        assert_eq!(
            strip_comment("schema:url <https://x.org/#frag> ;"),
            "schema:url <https://x.org/#frag> ;"
        );
        assert_eq!(strip_comment("schema:x \"C# rocks\""), "schema:x \"C# rocks\"");
    }

    #[test]
    fn test_split_top_level_respects_nesting() {
        let parts = split_top_level(
            "a <urn:T> ; schema:name \"x;y\" ; schema:p [ schema:q \"1\" ; schema:r \"2\" ]",
            ';',
        );
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].trim(), "schema:name \"x;y\"");
        assert!(parts[2].contains("schema:r"));
    }

    #[test]
    fn test_split_top_level_escaped_quote() {
        let parts = split_top_level("\"say \\\"hi, there\\\"\", \"b\"", ',');
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_split_unbalanced_never_panics() {
        let parts = split_top_level("]]] ; [[ ; \"open ; <iri", ';');
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_until_terminator() {
        assert_eq!(until_terminator("schema:n \"a.b\" ."), "schema:n \"a.b\" ");
        assert_eq!(until_terminator("schema:v 1.5 ."), "schema:v 1.5 ");
        assert_eq!(until_terminator("schema:n \"a\""), "schema:n \"a\"");
        assert_eq!(
            until_terminator("schema:n \"a\" . ex:other schema:n \"b\" ."),
            "schema:n \"a\" "
        );
    }

    #[test]
    fn test_statements() {
        let parts = statements("<> a ldp:Container; ldp:contains <a>, <b>.\n<a> stat:size 1.5 .");
        assert_eq!(
            parts.iter().map(|p| p.trim()).collect::<Vec<_>>(),
            vec!["<> a ldp:Container", "ldp:contains <a>, <b>", "<a> stat:size 1.5"]
        );
    }

    #[test]
    fn test_parse_object() {
        assert_eq!(parse_object("\"N\""), Some(Object::Literal("N".into())));
        assert_eq!(parse_object("\"hello\"@en"), Some(Object::Literal("hello".into())));
        assert_eq!(
            parse_object("\"say \\\"hi\\\"\""),
            Some(Object::Literal("say \"hi\"".into()))
        );
        assert_eq!(
            parse_object("\"2024-01-01T00:00:00Z\"^^xsd:dateTime"),
            Some(Object::Literal("\"2024-01-01T00:00:00Z\"^^xsd:dateTime".into()))
        );
        assert_eq!(
            parse_object("\"7\"^^<http://www.w3.org/2001/XMLSchema#integer>"),
            Some(Object::Literal("7".into()))
        );
        assert_eq!(parse_object("<urn:T>"), Some(Object::Iri("urn:T")));
        assert_eq!(
            parse_object("[ schema:q \"1\" ]"),
            Some(Object::BlankNode(" schema:q \"1\" "))
        );
        assert_eq!(parse_object("<>"), None);
        assert_eq!(parse_object("42"), None);
        assert_eq!(parse_object("schema:Thing"), None);
        assert_eq!(parse_object("\"unterminated"), None);
        assert_eq!(parse_object("\"a\" junk"), None);
        assert_eq!(parse_object(""), None);
    }
}
