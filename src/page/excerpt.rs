//! Plain-text excerpts of Markdown bodies.
//!
//! Used as the page description when frontmatter has neither
//! `description` nor `summary`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::utils::text::{collapse_whitespace, prune};

/// Default excerpt length in characters, excluding the ellipsis.
pub const EXCERPT_LENGTH: usize = 160;

/// Extract the visible text of `markdown`, pruned to `max_chars`.
///
/// Code blocks and raw HTML are skipped; inline code is kept. Returns
/// `None` when the body has no text at all.
pub fn excerpt(markdown: &str, max_chars: usize) -> Option<String> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut text = String::with_capacity(max_chars * 2);
    let mut in_code_block = false;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            _ if in_code_block => {}
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::BlockQuote(_)
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    let text = collapse_whitespace(&text);
    (!text.is_empty()).then(|| prune(&text, max_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let md = "# Title\n\nSome *emphasis* and `code` with a [link](https://example.com).";
        assert_eq!(
            excerpt(md, EXCERPT_LENGTH).as_deref(),
            Some("Title Some emphasis and code with a link.")
        );
    }

    #[test]
    fn test_skips_code_blocks_and_html() {
        let md = "Intro.\n\n```rust\nfn main() {}\n```\n\n<div>raw</div>\n\nOutro.";
        assert_eq!(excerpt(md, EXCERPT_LENGTH).as_deref(), Some("Intro. Outro."));
    }

    #[test]
    fn test_list_items_are_separated() {
        let md = "- first\n- second";
        assert_eq!(excerpt(md, EXCERPT_LENGTH).as_deref(), Some("first second"));
    }

    #[test]
    fn test_long_body_is_pruned() {
        let md = "word ".repeat(100);
        let result = excerpt(&md, EXCERPT_LENGTH).unwrap();
        assert!(result.ends_with('…'));
        assert!(result.chars().count() <= EXCERPT_LENGTH + 1);
        assert!(result.trim_end_matches('…').ends_with("word"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(excerpt("", EXCERPT_LENGTH), None);
        assert_eq!(excerpt("```\nonly code\n```", EXCERPT_LENGTH), None);
    }
}
