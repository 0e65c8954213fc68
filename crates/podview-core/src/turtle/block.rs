//! Block splitting and subject extraction.
//!
//! A block is the span of text describing one subject. The boundary is a
//! heuristic: a `.` followed by optional whitespace and then `<`.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner::strip_comment;

/// Leading bracketed subject on the first line of a block.
static SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([^>]+)>").expect("subject pattern is valid"));

/// Split content into candidate blocks.
///
/// The split point is zero-width: the `.` stays with the preceding block and
/// the `<` begins the following one. Empty and whitespace-only spans are
/// dropped.
pub fn split_blocks(content: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '.' {
            continue;
        }
        let after_dot = i + c.len_utf8();
        let next_non_ws = content[after_dot..]
            .char_indices()
            .find(|(_, c)| !c.is_whitespace());
        if let Some((offset, '<')) = next_non_ws {
            blocks.push(&content[start..after_dot]);
            start = after_dot + offset;
            // Resume scanning at the `<`
            while chars.peek().is_some_and(|(j, _)| *j < start) {
                chars.next();
            }
        }
    }
    blocks.push(&content[start..]);

    blocks.retain(|b| !b.trim().is_empty());
    blocks
}

/// Non-empty, trimmed lines of a block with whole-line and trailing comments removed.
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(|line| strip_comment(line).trim())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Match the leading `<subject>` of a line.
///
/// Returns the subject and the text following the closing bracket.
pub fn leading_subject(line: &str) -> Option<(&str, &str)> {
    let caps = SUBJECT.captures(line)?;
    let subject = caps.get(1)?.as_str();
    let rest = &line[caps.get(0)?.end()..];
    Some((subject, rest))
}
