use std::{cmp::Ordering, fmt};

/// Identifier of a file registered in a [`crate::files::SourceMap`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FileId(u32);

impl FileId {
    /// An id that resolves to no file. Positions carrying it display as
    /// `<no-file>`.
    pub const UNKNOWN: FileId = FileId(u32::MAX);

    pub fn new(index: usize) -> FileId {
        FileId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_unknown(self) -> bool {
        self == FileId::UNKNOWN
    }
}

/// A span of source text, with 1-based lines and columns. Columns are
/// half-open: the span covers `[begin_col, end_col)` on its line(s).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: FileId,
    pub begin_line: usize,
    pub begin_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Position {
    /// The fallback position used when a report has no primary marker.
    pub const UNKNOWN: Position =
        Position { file: FileId::UNKNOWN, begin_line: 1, begin_col: 1, end_line: 1, end_col: 1 };

    pub fn new(
        file: FileId,
        begin_line: usize,
        begin_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Position {
        assert!(begin_line >= 1 && begin_col >= 1, "lines and columns are 1-based");
        assert!(
            (begin_line, begin_col) <= (end_line, end_col),
            "position must not end ({end_line}:{end_col}) before it starts ({begin_line}:{begin_col})"
        );

        Position { file, begin_line, begin_col, end_line, end_col }
    }

    pub fn is_inline(&self) -> bool {
        self.begin_line == self.end_line
    }

    pub fn is_multiline(&self) -> bool {
        !self.is_inline()
    }

    /// Whether the character at `(line, col)` is highlighted by this span.
    ///
    /// For a multiline span only the first and last lines carry highlights;
    /// lines strictly inside the span are marked by the gutter bracket alone.
    pub fn covers(&self, line: usize, col: usize) -> bool {
        if self.is_inline() {
            line == self.begin_line && col >= self.begin_col && col < self.end_col
        } else {
            (line == self.begin_line && col >= self.begin_col)
                || (line == self.end_line && col < self.end_col)
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Position) -> Ordering {
        // coordinates first, file id as a tiebreaker so the order stays
        // consistent with equality
        (self.begin_line, self.begin_col, self.end_line, self.end_col, self.file.index()).cmp(&(
            other.begin_line,
            other.begin_col,
            other.end_line,
            other.end_col,
            other.file.index(),
        ))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Position) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}:{}", self.begin_line, self.begin_col, self.end_line, self.end_col)
    }
}
