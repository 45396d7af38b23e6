//! The report layout engine: turns a [`Report`] plus a source registry into a
//! positioned character grid, as a styled [`Document`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use anstyle::Style;
use loupe_span::files::Sources;
use loupe_span::position::Position;

use crate::pretty::{Doc, Document};
use crate::report::{Marker, MarkerKind, Report, Severity};
use crate::term::config::{Charset, RenderConfig, Styles};

type Entry<'a> = (Position, &'a Marker);

/// Renders one report with the default styles and the unicode or ascii glyph
/// table. Pure: the report and the sources are only read.
pub fn render<S: Sources>(report: &Report, sources: &S, unicode: bool) -> Document {
    render_with(report, sources, &RenderConfig::new(unicode))
}

pub fn render_with<S: Sources>(report: &Report, sources: &S, config: &RenderConfig) -> Document {
    Layout { report, sources, chars: &config.charset, styles: &config.styles }.run()
}

struct Layout<'a, S> {
    report: &'a Report,
    sources: &'a S,
    chars: &'a Charset,
    styles: &'a Styles,
}

impl<'a, S: Sources> Layout<'a, S> {
    fn run(&self) -> Document {
        let mut sorted: Vec<Entry<'a>> =
            self.report.markers.iter().map(|(position, marker)| (*position, marker)).collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut inline: BTreeMap<usize, Vec<Entry<'a>>> = BTreeMap::new();
        let mut multiline: Vec<Entry<'a>> = Vec::new();
        for &(position, marker) in &sorted {
            if position.is_inline() {
                // prepended so each line's list ends up in descending order,
                // the order message rows are stacked in
                inline.entry(position.begin_line).or_default().insert(0, (position, marker));
            } else {
                multiline.push((position, marker));
            }
        }

        let header_position = sorted
            .iter()
            .find(|(_, marker)| marker.kind == MarkerKind::Primary)
            .map_or(Position::UNKNOWN, |(position, _)| *position);

        // line numbers take at least 3 characters of gutter
        let gutter = sorted
            .iter()
            .map(|(position, _)| position.end_line)
            .max()
            .map_or(3, |line| line.to_string().len().max(3));

        let mut lines: BTreeSet<usize> = inline.keys().copied().collect();
        for (position, _) in &multiline {
            lines.extend(position.begin_line..=position.end_line);
        }

        let header_text = match self.report.severity {
            Severity::Error => "[error]",
            Severity::Warning => "[warning]",
        };

        let mut doc = Document::new();
        doc.push(Doc::new(header_text).style(self.styles.header(self.report.severity)));
        doc.push(Doc::new(": "));
        doc.append(self.report.message.clone().aligned());
        doc.push(Doc::line());

        doc.push(Doc::new(" ".repeat(gutter + 2)));
        doc.push(Doc::new(self.chars.snippet_start).style(self.styles.source_border));
        doc.push(Doc::new(" "));
        doc.push(Doc::new(self.file_pointer(header_position)).style(self.styles.file_pointer));
        doc.push(Doc::line());

        doc.push(Doc::new(" "));
        doc.append(self.pipe_prefix(gutter));

        doc.append(self.source_block(gutter, &inline, &multiline, &lines));
        doc.push(Doc::line());

        if !self.report.hints.is_empty() && !self.report.markers.is_empty() {
            doc.push(Doc::new(" "));
            doc.append(self.dot_prefix(gutter));
            doc.append(self.hint_rows(gutter));
            doc.push(Doc::line());
        }

        doc.push(Doc::new(self.chars.rule.repeat(gutter + 2)).style(self.styles.source_border));
        doc.push(Doc::new(self.chars.rule_corner).style(self.styles.source_border));
        doc
    }

    fn source_block(
        &self,
        gutter: usize,
        inline: &BTreeMap<usize, Vec<Entry<'a>>>,
        multiline: &[Entry<'a>],
        lines: &BTreeSet<usize>,
    ) -> Document {
        let mut doc = Document::new();

        for &line in lines {
            let inline_here: &[Entry<'a>] = inline.get(&line).map_or(&[], Vec::as_slice);
            let multi_here: Vec<Entry<'a>> = multiline
                .iter()
                .copied()
                .filter(|(p, _)| p.begin_line == line || p.end_line == line)
                .collect();
            let multi_spanning: Vec<Entry<'a>> = multiline
                .iter()
                .copied()
                .filter(|(p, _)| p.begin_line < line && p.end_line > line)
                .collect();

            let span_style = multi_here
                .iter()
                .chain(multi_spanning.iter())
                .next()
                .map(|(_, marker)| self.marker_style(marker));

            // bracket prefix; blank padding of the same width otherwise, so
            // source text stays column-aligned
            let mut prefix = Document::new();
            if let Some(&(position, marker)) = multi_here.first() {
                let has_predecessor = position.end_line == line
                    || multiline.first().is_some_and(|&(first, _)| first != position);
                let glyph =
                    if has_predecessor { self.chars.multi_continue } else { self.chars.multi_top };
                prefix.push(Doc::new(glyph).style(span_style.unwrap_or_default()));
                prefix.push(Doc::new(self.chars.multi_tee).style(self.marker_style(marker)));
                prefix.push(Doc::new(" "));
            } else if !multiline.is_empty() {
                match span_style {
                    Some(style) => {
                        prefix.push(Doc::new(format!("{}  ", self.chars.pipe)).style(style));
                    }
                    None => prefix.push(Doc::new("   ")),
                }
            }

            // ascending order for excerpt coloring; the per-line inline list
            // itself stays descending
            let mut excerpt_markers: Vec<Entry<'a>> = inline_here.iter().rev().copied().collect();
            excerpt_markers.extend(multi_here.iter().copied());
            excerpt_markers.extend(multi_spanning.iter().copied());

            doc.push(Doc::line());
            doc.append(self.line_prefix(gutter, line));
            doc.push(Doc::new(" "));
            doc.append(prefix);
            doc.append(self.line_excerpt(&excerpt_markers, line));
            doc.append(self.marker_rows(!multiline.is_empty(), span_style, gutter, inline_here));
        }

        if let Some((_, last)) = multiline.last() {
            doc.append(self.multiline_trailer(gutter, multiline, self.marker_style(last)));
        }

        doc
    }

    /// The raw source line with per-column coloring, or the `<no line>`
    /// placeholder when the line cannot be resolved.
    fn line_excerpt(&self, markers: &[Entry<'a>], line: usize) -> Document {
        let code = markers.first().and_then(|(position, _)| self.sources.line(position.file, line));
        let Some(code) = code else {
            return Document::from(Doc::new("<no line>").style(self.styles.missing_line));
        };

        let mut doc = Document::new();
        for (index, ch) in code.chars().enumerate() {
            let col = index + 1;
            match markers.iter().find(|(position, _)| position.covers(line, col)) {
                Some((_, marker)) => {
                    doc.push(Doc::new(ch.to_string()).style(self.marker_style(marker).bold()));
                }
                None => doc.push(Doc::new(ch.to_string())),
            }
        }
        doc
    }

    /// Underline row plus one message row per inline marker on the line,
    /// rightmost first, with stacked pipes for markers still pending.
    fn marker_rows(
        &self,
        has_multiline: bool,
        span_style: Option<Style>,
        gutter: usize,
        inline_here: &[Entry<'a>],
    ) -> Document {
        let mut doc = Document::new();
        if inline_here.is_empty() {
            return doc;
        }

        let special_prefix = {
            let mut prefix = Document::new();
            if let Some(style) = span_style {
                prefix.push(Doc::new(format!("{} ", self.chars.pipe)).style(style));
                prefix.push(Doc::new(" "));
            } else if has_multiline {
                prefix.push(Doc::new("   "));
            }
            prefix
        };

        let max_col = inline_here.iter().map(|(p, _)| p.end_col).max().unwrap_or(1);

        doc.push(Doc::line());
        doc.push(Doc::new(" "));
        doc.append(self.dot_prefix(gutter));
        doc.push(Doc::new(" "));
        doc.append(special_prefix.clone());

        for col in 1..=max_col {
            match inline_here.iter().find(|(p, _)| col >= p.begin_col && col < p.end_col) {
                None => doc.push(Doc::new(" ")),
                Some((position, marker)) => {
                    let glyph = if position.begin_col == col {
                        self.chars.underline_start
                    } else {
                        self.chars.underline
                    };
                    doc.push(Doc::new(glyph).style(self.marker_style(marker)));
                }
            }
        }

        let mut pending: VecDeque<Entry<'a>> = inline_here.iter().copied().collect();
        while let Some((position, marker)) = pending.pop_front() {
            let others: Vec<Entry<'a>> = pending
                .iter()
                .copied()
                .filter(|(p, _)| p.begin_col != position.begin_col)
                .collect();
            let has_successor = others.len() != pending.len();

            let mut pipes = others;
            pipes.sort_by_key(|(p, _)| p.begin_col);
            pipes.dedup_by_key(|(p, _)| p.begin_col);
            let (before, after): (Vec<Entry<'a>>, Vec<Entry<'a>>) =
                pipes.into_iter().partition(|(p, _)| p.begin_col < position.begin_col);

            doc.push(Doc::line());
            doc.push(Doc::new(" "));
            doc.append(self.dot_prefix(gutter));
            doc.push(Doc::new(" "));
            doc.append(special_prefix.clone());

            let mut col = 1;
            for (pipe_position, pipe_marker) in &before {
                while col < pipe_position.begin_col {
                    doc.push(Doc::new(" "));
                    col += 1;
                }
                doc.push(Doc::new(self.chars.pipe).style(self.marker_style(pipe_marker)));
                col += 1;
            }
            while col < position.begin_col {
                doc.push(Doc::new(" "));
                col += 1;
            }

            let style = self.marker_style(marker);
            let branch = if has_successor { self.chars.branch } else { self.chars.branch_last };
            let dashes = after.first().map_or(0, |(p, _)| p.begin_col - position.begin_col);

            doc.push(Doc::new(branch).style(style));
            if dashes > 0 {
                doc.push(Doc::new(self.chars.dash.repeat(dashes)).style(style));
            }
            doc.push(Doc::new(self.chars.point).style(style));
            doc.push(Doc::new(" "));
            doc.append(marker.message.clone().styled(style).aligned());
        }

        doc
    }

    /// Message block for multiline markers, emitted after all source lines:
    /// one bar row, then one capped row per marker in reverse order.
    fn multiline_trailer(
        &self,
        gutter: usize,
        multiline: &[Entry<'a>],
        last_style: Style,
    ) -> Document {
        let mut doc = Document::new();
        let prefix = |doc: &mut Document| {
            doc.push(Doc::line());
            doc.push(Doc::new(" "));
            doc.append(self.dot_prefix(gutter));
            doc.push(Doc::new(" "));
        };

        prefix(&mut doc);
        doc.push(Doc::new(format!("{} ", self.chars.pipe)).style(last_style));
        prefix(&mut doc);

        for (index, (_, marker)) in multiline.iter().enumerate().rev() {
            let style = self.marker_style(marker);
            let cap = if index == 0 {
                format!("{}{} ", self.chars.branch_last, self.chars.point)
            } else {
                format!("{}{} ", self.chars.branch, self.chars.point)
            };
            doc.push(Doc::new(cap).style(style));
            doc.append(marker.message.clone().aligned());
            if index > 0 {
                prefix(&mut doc);
            }
        }

        doc
    }

    fn hint_rows(&self, gutter: usize) -> Document {
        let mut doc = Document::new();
        for hint in &self.report.hints {
            doc.push(Doc::line());
            doc.push(Doc::new(" "));
            doc.append(self.pipe_prefix(gutter));
            doc.push(Doc::new(" "));
            doc.push(Doc::new("Hint:").style(self.styles.hint_label));
            doc.push(Doc::new(" "));
            doc.append(hint.clone().styled(self.styles.hint_text).aligned());
        }
        doc
    }

    fn file_pointer(&self, position: Position) -> String {
        let name = self.sources.name(position.file).unwrap_or("<no-file>");
        format!("{name}@{position}")
    }

    fn pipe_prefix(&self, gutter: usize) -> Document {
        let mut doc = Document::new();
        doc.push(Doc::new(" ".repeat(gutter + 1)));
        doc.push(Doc::new(self.chars.source_border).style(self.styles.source_border));
        doc
    }

    fn dot_prefix(&self, gutter: usize) -> Document {
        let mut doc = Document::new();
        doc.push(Doc::new(" ".repeat(gutter + 1)));
        doc.push(Doc::new(self.chars.dot_border).style(self.styles.source_border));
        doc
    }

    fn line_prefix(&self, gutter: usize, line: usize) -> Document {
        let number = line.to_string();
        let mut doc = Document::new();
        doc.push(Doc::new(" ".repeat(gutter - number.len() + 1)));
        doc.push(Doc::new(number).style(self.styles.line_number));
        doc.push(Doc::new(" "));
        doc.push(Doc::new(self.chars.source_border).style(self.styles.line_number));
        doc
    }

    fn marker_style(&self, marker: &Marker) -> Style {
        self.styles.marker(marker.kind, self.report.severity)
    }
}
