use indexmap::IndexMap;
use loupe_span::position::Position;

use crate::pretty::Document;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// The role of a marker, which fixes its color: `Primary` follows the report
/// severity (red/yellow), `Context` is blue, `Suggestion` magenta.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum MarkerKind {
    Primary,
    Context,
    Suggestion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub message: Document,
}

impl Marker {
    pub fn new(kind: MarkerKind, message: impl Into<Document>) -> Marker {
        Marker { kind, message: message.into() }
    }

    /// The primary cause of the report. A report is expected to carry exactly
    /// one; the first one in position order supplies the header file.
    pub fn primary(message: impl Into<Document>) -> Marker {
        Marker::new(MarkerKind::Primary, message)
    }

    pub fn context(message: impl Into<Document>) -> Marker {
        Marker::new(MarkerKind::Context, message)
    }

    pub fn suggestion(message: impl Into<Document>) -> Marker {
        Marker::new(MarkerKind::Suggestion, message)
    }
}

/// A single error or warning, fully specified at construction; rendering
/// never mutates it.
///
/// Markers are keyed by position: inserting a second marker at an identical
/// position silently replaces the first, plain map semantics. That is a
/// caller contract, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub severity: Severity,
    pub message: Document,
    pub markers: IndexMap<Position, Marker>,
    pub hints: Vec<Document>,
}

impl Report {
    pub fn new(severity: Severity) -> Report {
        Report { severity, message: Document::new(), markers: IndexMap::new(), hints: Vec::new() }
    }

    pub fn error() -> Report {
        Report::new(Severity::Error)
    }

    pub fn warning() -> Report {
        Report::new(Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<Document>) -> Report {
        self.message = message.into();
        self
    }

    pub fn with_marker(mut self, position: Position, marker: Marker) -> Report {
        self.markers.insert(position, marker);
        self
    }

    pub fn with_markers(
        mut self,
        markers: impl IntoIterator<Item = (Position, Marker)>,
    ) -> Report {
        self.markers.extend(markers);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<Document>) -> Report {
        self.hints.push(hint.into());
        self
    }

    pub fn with_hints(mut self, hints: impl IntoIterator<Item = Document>) -> Report {
        self.hints.extend(hints);
        self
    }
}

#[cfg(test)]
mod tests {
    use loupe_span::position::FileId;

    use super::*;

    #[test]
    fn builder_collects_markers_and_hints() {
        let file = FileId::new(0);
        let report = Report::error()
            .with_message("boom")
            .with_marker(Position::new(file, 1, 1, 1, 4), Marker::primary("here"))
            .with_marker(Position::new(file, 2, 1, 2, 4), Marker::context("because"))
            .with_hint("try again");

        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.markers.len(), 2);
        assert_eq!(report.hints.len(), 1);
    }

    #[test]
    fn identical_positions_overwrite() {
        let position = Position::new(FileId::new(0), 1, 25, 1, 30);
        let report = Report::warning()
            .with_marker(position, Marker::primary("first"))
            .with_marker(position, Marker::primary("second"));

        assert_eq!(report.markers.len(), 1);
        assert_eq!(report.markers[&position].message, Document::from("second"));
    }
}
