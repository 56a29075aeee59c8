//! Turns the raw model response into a sequence of display blocks.
//!
//! The generated text is plain prose with a handful of line conventions the
//! model is instructed to use. Four patterns are recognized, in order:
//!
//! 1. `# text` at the start of a line → top-level heading
//! 2. a whole line wrapped in `**` → section heading
//! 3. a line consisting of exactly `---` → divider
//! 4. any remaining `**span**` (non-greedy) → emphasized inline span
//!
//! The whole-line rules must run before the inline rule, otherwise a heading
//! line would be consumed piecemeal by the inline rule and lose its
//! block-level treatment.
//!
//! The response comes from a remote model and is treated as untrusted: all
//! control characters (including ESC, so no terminal escape injection) are
//! stripped before any pattern matching. Tabs and newlines survive.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# (.*)$").expect("heading pattern"));
static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.*)\*\*$").expect("section pattern"));
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

/// Inline fragment of a paragraph line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
}

/// One display block, corresponding to one line of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    SectionHeading(String),
    Divider,
    Paragraph(Vec<Span>),
    Blank,
}

/// Strip control characters from the untrusted remote text, keeping tabs.
/// Newlines are handled by the caller splitting into lines first, but are
/// preserved here so the function is safe on multi-line input too.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

/// Parse sanitized remote text into display blocks.
pub fn render_blocks(raw: &str) -> Vec<Block> {
    let text = sanitize(raw);
    text.lines()
        .map(|line| {
            if let Some(caps) = HEADING_RE.captures(line) {
                Block::Heading(caps[1].to_string())
            } else if let Some(caps) = SECTION_RE.captures(line) {
                Block::SectionHeading(caps[1].to_string())
            } else if line == "---" {
                Block::Divider
            } else if line.trim().is_empty() {
                Block::Blank
            } else {
                Block::Paragraph(parse_spans(line))
            }
        })
        .collect()
}

fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in BOLD_RE.captures_iter(line) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            if whole.start() > last {
                spans.push(Span::Text(line[last..whole.start()].to_string()));
            }
            spans.push(Span::Strong(inner.as_str().to_string()));
            last = whole.end();
        }
    }
    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_four_patterns_in_order() {
        let blocks = render_blocks("# Title\n**Section**\n---\n**bold** text");
        assert_eq!(
            blocks,
            vec![
                Block::Heading("Title".to_string()),
                Block::SectionHeading("Section".to_string()),
                Block::Divider,
                Block::Paragraph(vec![
                    Span::Strong("bold".to_string()),
                    Span::Text(" text".to_string()),
                ]),
            ]
        );
    }

    #[test]
    fn whole_line_bold_is_a_section_heading_not_inline() {
        let blocks = render_blocks("**II. Tujuan Pembelajaran**");
        assert_eq!(
            blocks,
            vec![Block::SectionHeading("II. Tujuan Pembelajaran".to_string())]
        );
    }

    #[test]
    fn inline_bold_is_non_greedy() {
        let blocks = render_blocks("a **b** c **d** e");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                Span::Text("a ".to_string()),
                Span::Strong("b".to_string()),
                Span::Text(" c ".to_string()),
                Span::Strong("d".to_string()),
                Span::Text(" e".to_string()),
            ])]
        );
    }

    #[test]
    fn divider_must_be_the_entire_line() {
        let blocks = render_blocks("--- not a divider");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Span::Text(
                "--- not a divider".to_string()
            )])]
        );
    }

    #[test]
    fn heading_text_is_kept_verbatim() {
        let blocks = render_blocks("# Judul RPP  ");
        assert_eq!(blocks, vec![Block::Heading("Judul RPP  ".to_string())]);
    }

    #[test]
    fn heading_marker_needs_the_space() {
        let blocks = render_blocks("#NoSpace");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![Span::Text("#NoSpace".to_string())])]
        );
    }

    #[test]
    fn control_characters_are_stripped() {
        let blocks = render_blocks("# Ti\u{1b}[31mtle");
        assert_eq!(blocks, vec![Block::Heading("Ti[31mtle".to_string())]);
    }

    #[test]
    fn blank_lines_are_preserved_as_blocks() {
        let blocks = render_blocks("one\n\ntwo");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], Block::Blank);
    }
}
