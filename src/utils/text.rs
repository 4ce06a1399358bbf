//! Plain-text helpers shared by config loading, excerpts and CLI output.

/// Characters trimmed from the end of a pruned excerpt before the ellipsis.
const TRAILING_PUNCTUATION: [char; 7] = [',', '.', ';', ':', '!', '?', '-'];

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten `text` to at most `max_chars` characters plus a trailing `…`,
/// cutting at a word boundary.
///
/// Text that already fits is returned unchanged.
pub fn prune(text: &str, max_chars: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let head = &text[..cut];
    let head = if text[cut..].starts_with(char::is_whitespace) {
        head
    } else {
        // Cut landed inside a word: drop the partial word.
        head.rfind(char::is_whitespace).map_or(head, |i| &head[..i])
    };

    let head = head.trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c));
    format!("{head}…")
}

/// `"1 file"`, `"3 files"`.
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
