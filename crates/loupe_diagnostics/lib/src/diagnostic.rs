use std::io::{self, Write};

use loupe_span::files::SourceMap;
use loupe_span::position::FileId;

use crate::pretty::{Doc, Document};
use crate::report::Report;
use crate::term::{RenderConfig, render_with};

/// Collects reports together with the sources they point into, and prints
/// them in one batch. Reports are rendered independently, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Diagnostic {
    reports: Vec<Report>,
    files: SourceMap,
}

impl Diagnostic {
    pub fn new() -> Diagnostic {
        Diagnostic { reports: Vec::new(), files: SourceMap::new() }
    }

    /// Registers a source file. The returned id is what report positions
    /// refer to.
    pub fn add_file(&mut self, name: impl Into<String>, source: &str) -> FileId {
        self.files.add(name, source)
    }

    pub fn add_report(&mut self, report: Report) {
        self.reports.push(report);
    }

    pub fn with_report(mut self, report: Report) -> Diagnostic {
        self.reports.push(report);
        self
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn files(&self) -> &SourceMap {
        &self.files
    }

    /// Drops all reports and files so the value can be reused.
    pub fn clear(&mut self) {
        self.reports.clear();
        self.files.clear();
    }

    /// Renders every report, each terminated by a newline.
    pub fn render(&self, unicode: bool) -> Document {
        let config = RenderConfig::new(unicode);
        let mut doc = Document::new();
        for report in &self.reports {
            doc.append(render_with(report, &self.files, &config));
            doc.push(Doc::line());
        }
        doc
    }

    pub fn print(&self, out: &mut dyn Write, unicode: bool, colors: bool) -> io::Result<()> {
        let mut doc = self.render(unicode);
        if !colors {
            doc.strip_styles();
        }
        doc.print(out)
    }

    /// Prints to stderr, letting [`anstream`] drop the colors when stderr is
    /// not a terminal.
    pub fn print_stderr(&self, unicode: bool) -> io::Result<()> {
        let mut out = anstream::AutoStream::auto(io::stderr());
        self.print(&mut out, unicode, true)
    }
}
