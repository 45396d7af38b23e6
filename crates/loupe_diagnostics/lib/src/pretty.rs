//! Styled document IR: a flat list of text fragments, each carrying an
//! [`anstyle::Style`] and an alignment flag, printable with or without
//! escape sequences. Styling never affects layout width.

use std::io::{self, Write};

use anstyle::Style;
use unicode_width::UnicodeWidthStr;

/// A single text fragment. `content` may embed newlines; when `aligned` is
/// set, every embedded newline is re-indented at print time to the column
/// where the fragment started, so multi-line messages stay under their label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Doc {
    pub content: String,
    pub style: Style,
    pub aligned: bool,
}

impl Doc {
    pub fn new(content: impl Into<String>) -> Doc {
        Doc { content: content.into(), style: Style::new(), aligned: false }
    }

    pub fn line() -> Doc {
        Doc::new("\n")
    }

    pub fn style(mut self, style: Style) -> Doc {
        self.style = style;
        self
    }

    pub fn aligned(mut self) -> Doc {
        self.aligned = true;
        self
    }

    /// Display width of the widest embedded line, styling ignored.
    pub fn width(&self) -> usize {
        self.content.split('\n').map(UnicodeWidthStr::width).max().unwrap_or(0)
    }
}

/// An ordered sequence of fragments. Construction is append-only and printing
/// is streaming; nothing is revisited once emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    parts: Vec<Doc>,
}

impl Document {
    pub fn new() -> Document {
        Document { parts: Vec::new() }
    }

    pub fn push(&mut self, part: Doc) {
        self.parts.push(part);
    }

    pub fn append(&mut self, mut other: Document) {
        self.parts.append(&mut other.parts);
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Marks every fragment as column-aligned.
    pub fn aligned(mut self) -> Document {
        for part in &mut self.parts {
            part.aligned = true;
        }
        self
    }

    /// Overrides the style of every fragment.
    pub fn styled(mut self, style: Style) -> Document {
        for part in &mut self.parts {
            part.style = style;
        }
        self
    }

    /// Removes all styling without touching text content. Printing afterwards
    /// yields the colored output minus its escape sequences, byte for byte.
    pub fn strip_styles(&mut self) {
        for part in &mut self.parts {
            part.style = Style::new();
        }
    }

    /// Streams the document to `out`, threading an explicit column cursor.
    ///
    /// Styles are opened and reset around each physical line, never across a
    /// newline, since terminals drop decorations at line breaks.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut column: usize = 1;

        for part in &self.parts {
            let content = if part.aligned && part.content.contains('\n') {
                let padding = " ".repeat(column - 1);
                part.content.replace('\n', &format!("\n{padding}"))
            } else {
                part.content.clone()
            };

            let plain = part.style == Style::new();
            for (index, line) in content.split('\n').enumerate() {
                if index > 0 {
                    out.write_all(b"\n")?;
                }
                if line.is_empty() {
                    continue;
                }
                if plain {
                    write!(out, "{line}")?;
                } else {
                    write!(out, "{}{line}{}", part.style.render(), part.style.render_reset())?;
                }
            }

            column = match content.rfind('\n') {
                Some(index) => content[index + 1..].width() + 1,
                None => column + content.width(),
            };
        }

        Ok(())
    }
}

impl From<Doc> for Document {
    fn from(part: Doc) -> Document {
        let mut doc = Document::new();
        doc.push(part);
        doc
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Document {
        Doc::new(text).into()
    }
}

impl From<String> for Document {
    fn from(text: String) -> Document {
        Doc::new(text).into()
    }
}

#[cfg(test)]
mod tests {
    use anstyle::AnsiColor;

    use super::*;

    fn printed(doc: &Document) -> String {
        let mut out = Vec::new();
        doc.print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn width_is_widest_line() {
        assert_eq!(Doc::new("ab\ncdef\ng").width(), 4);
        assert_eq!(Doc::new("").width(), 0);
    }

    #[test]
    fn aligned_fragment_reindents_to_current_column() {
        let mut doc = Document::new();
        doc.push(Doc::new("Hint: "));
        doc.push(Doc::new("first\nsecond").aligned());

        assert_eq!(printed(&doc), "Hint: first\n      second");
    }

    #[test]
    fn newline_resets_the_column() {
        let mut doc = Document::new();
        doc.push(Doc::new("abc"));
        doc.push(Doc::line());
        doc.push(Doc::new("p\nq").aligned());

        assert_eq!(printed(&doc), "abc\np\nq");
    }

    #[test]
    fn styles_never_span_a_newline() {
        let style = Style::new().fg_color(Some(AnsiColor::Red.into()));
        let mut doc = Document::new();
        doc.push(Doc::new("a\nb").style(style));

        let output = printed(&doc);
        let reset_then_break = format!("{}\n", style.render_reset());
        assert!(output.contains(&reset_then_break));
        assert!(output.ends_with(&style.render_reset().to_string()));
    }

    #[test]
    fn stripping_equals_plain_content() {
        let style = Style::new().fg_color(Some(AnsiColor::Blue.into())).bold();
        let mut doc = Document::new();
        doc.push(Doc::new("left "));
        doc.push(Doc::new("right").style(style));

        let mut stripped = doc.clone();
        stripped.strip_styles();

        assert_ne!(printed(&doc), "left right");
        assert_eq!(printed(&stripped), "left right");
    }

    #[test]
    fn styled_overrides_every_fragment() {
        let style = Style::new().fg_color(Some(AnsiColor::Cyan.into()));
        let doc = Document::from("a").styled(style);

        let mut expected = Document::new();
        expected.push(Doc::new("a").style(style));
        assert_eq!(doc, expected);
    }
}
