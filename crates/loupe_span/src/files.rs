use crate::position::FileId;

/// Read-only registry of source files, as consumed by the layout engine.
///
/// Both lookups degrade to `None` for unknown ids and out-of-range lines; the
/// engine turns either into its `<no-file>`/`<no line>` placeholders rather
/// than failing.
pub trait Sources {
    fn name(&self, id: FileId) -> Option<&str>;

    /// The 1-based `line_number`-th line of the file, without its newline.
    fn line(&self, id: FileId, line_number: usize) -> Option<&str>;
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    lines: Vec<String>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: &str) -> SourceFile {
        SourceFile { name: name.into(), lines: source.split('\n').map(str::to_owned).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self, line_number: usize) -> Option<&str> {
        line_number.checked_sub(1).and_then(|index| self.lines.get(index)).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> SourceMap {
        SourceMap { files: Vec::new() }
    }

    pub fn add(&mut self, name: impl Into<String>, source: &str) -> FileId {
        let id = FileId::new(self.files.len());
        self.files.push(SourceFile::new(name, source));
        id
    }

    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn get_by_name(&self, name: &str) -> Option<FileId> {
        self.files.iter().position(|file| file.name() == name).map(FileId::new)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

impl Sources for SourceMap {
    fn name(&self, id: FileId) -> Option<&str> {
        self.get(id).map(SourceFile::name)
    }

    fn line(&self, id: FileId, line_number: usize) -> Option<&str> {
        self.get(id).and_then(|file| file.line(line_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_one_based() {
        let mut map = SourceMap::new();
        let id = map.add("test.zc", "first\nsecond\nthird");

        assert_eq!(map.line(id, 1), Some("first"));
        assert_eq!(map.line(id, 3), Some("third"));
        assert_eq!(map.line(id, 0), None);
        assert_eq!(map.line(id, 4), None);
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        let map = SourceMap::new();
        assert_eq!(map.name(FileId::UNKNOWN), None);
        assert_eq!(map.line(FileId::new(7), 1), None);
    }

    #[test]
    fn lookup_by_name() {
        let mut map = SourceMap::new();
        let a = map.add("a.zc", "");
        let b = map.add("b.zc", "");

        assert_eq!(map.get_by_name("a.zc"), Some(a));
        assert_eq!(map.get_by_name("b.zc"), Some(b));
        assert_eq!(map.get_by_name("c.zc"), None);
    }

    #[test]
    fn clear_for_reuse() {
        let mut map = SourceMap::new();
        let id = map.add("a.zc", "line");
        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.line(id, 1), None);
    }
}
