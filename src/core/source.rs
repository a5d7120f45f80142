use crate::core::ast::Pos;

/// Pure position information in Go source files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with context information in Go source files.
///
/// The source line is only known when the Go file referenced by the dump
/// could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: Option<String>,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: Option<String>) -> Self {
        Self {
            location,
            source_line,
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Text of a Go source file with a line index.
#[derive(Debug, Clone)]
pub struct SourceText {
    text: String,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Content of a 1-based line, without its line terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.text.len(), |next| next - 1);
        let content = self.text.get(start..end)?;
        Some(content.strip_suffix('\r').unwrap_or(content))
    }

    /// Byte offset of a position, if it lies on its line. The column just past
    /// the last character of a line is valid.
    pub fn offset(&self, pos: Pos) -> Option<usize> {
        let start = *self.line_starts.get(pos.line.checked_sub(1)?)?;
        let col = pos.col.checked_sub(1)?;
        if col > self.line(pos.line)?.len() {
            return None;
        }
        let offset = start + col;
        self.text.is_char_boundary(offset).then_some(offset)
    }
}

/// Builds [`SourceContext`]s for positions in one Go file.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    file_path: &'a str,
    text: Option<&'a SourceText>,
}

impl<'a> Locator<'a> {
    pub fn new(file_path: &'a str, text: Option<&'a SourceText>) -> Self {
        Self { file_path, text }
    }

    pub fn file_path(&self) -> &'a str {
        self.file_path
    }

    pub fn context(&self, pos: Pos) -> SourceContext {
        let source_line = self
            .text
            .and_then(|text| text.line(pos.line))
            .map(str::to_string);
        SourceContext::new(
            SourceLocation::new(self.file_path, pos.line, pos.col),
            source_line,
        )
    }
}
