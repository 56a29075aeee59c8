//! Paints renderer blocks to the terminal with the active theme.

use crate::render::{Block, Span};
use crate::ui::theme::Theme;
use anstream::println as styled_println;
use anstyle::Style;
use std::fmt::Write as _;

const DIVIDER_WIDTH: usize = 60;

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Render blocks into a single styled string.
pub fn blocks_to_string(blocks: &[Block], theme: Theme) -> String {
    let styles = theme.styles();
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading(text) => {
                let _ = writeln!(out, "{}", paint(styles.heading, text));
            }
            Block::SectionHeading(text) => {
                // Section headings get breathing room and an underline, the
                // terminal stand-in for the bordered headings of the source
                // document format.
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", paint(styles.section, text));
                let _ = writeln!(
                    out,
                    "{}",
                    paint(styles.divider, &"─".repeat(text.chars().count().min(DIVIDER_WIDTH)))
                );
            }
            Block::Divider => {
                let _ = writeln!(out, "{}", paint(styles.divider, &"─".repeat(DIVIDER_WIDTH)));
            }
            Block::Paragraph(spans) => {
                let mut line = String::new();
                for span in spans {
                    match span {
                        Span::Text(text) => line.push_str(&paint(styles.text, text)),
                        Span::Strong(text) => line.push_str(&paint(styles.strong, text)),
                    }
                }
                let _ = writeln!(out, "{line}");
            }
            Block::Blank => {
                let _ = writeln!(out);
            }
        }
    }
    out
}

/// Print blocks to stdout, respecting NO_COLOR and terminal detection via
/// anstream.
pub fn print_blocks(blocks: &[Block], theme: Theme) {
    styled_println!("{}", blocks_to_string(blocks, theme));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_blocks;

    #[test]
    fn painted_output_keeps_document_order() {
        let blocks = render_blocks("# Judul\n**Bagian**\n---\n**tebal** biasa");
        let painted = blocks_to_string(&blocks, Theme::Dark);

        let judul = painted.find("Judul").expect("heading");
        let bagian = painted.find("Bagian").expect("section");
        let tebal = painted.find("tebal").expect("strong");
        assert!(judul < bagian && bagian < tebal);
        assert!(painted.contains("─"));
    }

    #[test]
    fn both_themes_paint_without_panicking() {
        let blocks = render_blocks("# A\n\ntext **b**");
        for theme in [Theme::Light, Theme::Dark] {
            assert!(!blocks_to_string(&blocks, theme).is_empty());
        }
    }
}
