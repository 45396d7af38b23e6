use anstyle::{AnsiColor, Color, Style};

use crate::report::{MarkerKind, Severity};

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub charset: Charset,
    pub styles: Styles,
}

impl RenderConfig {
    pub fn new(unicode: bool) -> RenderConfig {
        RenderConfig { charset: Charset::for_unicode(unicode), styles: Styles::default() }
    }
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig::new(true)
    }
}

/// The glyph table. Both charsets occupy identical column widths, so
/// switching them never moves a character.
#[derive(Clone, Debug)]
pub struct Charset {
    /// Arrow between the gutter and the file pointer, e.g. `╭─▶`.
    pub snippet_start: &'static str,
    /// Gutter bar on source and hint rows.
    pub source_border: &'static str,
    /// Gutter dot on underline and message rows.
    pub dot_border: &'static str,
    /// Caret marking the first column of an underline.
    pub underline_start: &'static str,
    /// Continuation of an underline.
    pub underline: &'static str,
    /// Stacked pipe for a still-pending marker.
    pub pipe: &'static str,
    /// Branch glyph when further same-column markers follow.
    pub branch: &'static str,
    /// Branch glyph on a marker's final message row.
    pub branch_last: &'static str,
    /// Horizontal run between a branch glyph and its message.
    pub dash: &'static str,
    /// Tip placed right before a message.
    pub point: &'static str,
    /// First line of a multiline span bracket.
    pub multi_top: &'static str,
    /// First line of a multiline span when an earlier span already opened.
    pub multi_continue: &'static str,
    /// Tee attaching a multiline bracket to its source line.
    pub multi_tee: &'static str,
    /// Footer rule.
    pub rule: &'static str,
    /// Footer corner.
    pub rule_corner: &'static str,
}

impl Charset {
    pub fn unicode() -> Charset {
        Charset {
            snippet_start: "╭─▶",
            source_border: "│",
            dot_border: "•",
            underline_start: "┬",
            underline: "─",
            pipe: "│",
            branch: "├",
            branch_last: "╰",
            dash: "─",
            point: "╸",
            multi_top: "╭",
            multi_continue: "├",
            multi_tee: "┤",
            rule: "─",
            rule_corner: "╯",
        }
    }

    pub fn ascii() -> Charset {
        Charset {
            snippet_start: "+->",
            source_border: "|",
            dot_border: ":",
            underline_start: "^",
            underline: "-",
            pipe: "|",
            branch: "|",
            branch_last: "`",
            dash: "-",
            point: "-",
            multi_top: "+",
            multi_continue: "|",
            multi_tee: ">",
            rule: "-",
            rule_corner: "+",
        }
    }

    pub fn for_unicode(unicode: bool) -> Charset {
        if unicode { Charset::unicode() } else { Charset::ascii() }
    }
}

#[derive(Clone, Debug)]
pub struct Styles {
    pub header_error: Style,
    pub header_warning: Style,

    pub primary_error: Style,
    pub primary_warning: Style,
    pub context: Style,
    pub suggestion: Style,

    pub source_border: Style,
    pub line_number: Style,
    pub file_pointer: Style,
    pub missing_line: Style,
    pub hint_label: Style,
    pub hint_text: Style,
}

impl Styles {
    pub fn header(&self, severity: Severity) -> Style {
        match severity {
            Severity::Error => self.header_error,
            Severity::Warning => self.header_warning,
        }
    }

    pub fn marker(&self, kind: MarkerKind, severity: Severity) -> Style {
        match (kind, severity) {
            (MarkerKind::Primary, Severity::Error) => self.primary_error,
            (MarkerKind::Primary, Severity::Warning) => self.primary_warning,
            (MarkerKind::Context, _) => self.context,
            (MarkerKind::Suggestion, _) => self.suggestion,
        }
    }
}

impl Default for Styles {
    fn default() -> Styles {
        let bold = Style::new().bold();
        let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));
        let bold_fg = |color: AnsiColor| bold.fg_color(Some(Color::Ansi(color)));

        Styles {
            header_error: bold_fg(AnsiColor::Red),
            header_warning: bold_fg(AnsiColor::Yellow),

            primary_error: fg(AnsiColor::Red),
            primary_warning: fg(AnsiColor::Yellow),
            context: fg(AnsiColor::Blue),
            suggestion: fg(AnsiColor::Magenta),

            source_border: bold_fg(AnsiColor::Black),
            line_number: fg(AnsiColor::Black),
            file_pointer: bold_fg(AnsiColor::Green),
            missing_line: fg(AnsiColor::Magenta),
            hint_label: bold_fg(AnsiColor::Cyan),
            hint_text: fg(AnsiColor::Cyan),
        }
    }
}
