//! Source access shared by every visit over one file.
//!
//! The rule never reads the tree without also needing the bytes behind it:
//! identifier names, string literal contents and the raw quoted title that the
//! fixer rewrites all come from here.
use serde::Serialize;
use std::borrow::Cow;
use tree_sitter::Node;

/// Location of a node, 1-based lines and columns plus the byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn from_node(node: &Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            line: start.row + 1,
            column: start.column + 1,
            end_line: end.row + 1,
            end_column: end.column + 1,
        }
    }
}

pub struct SourceContext<'a> {
    /// Source code bytes
    source: &'a [u8],

    /// File path being analyzed
    file_path: String,
}

impl<'a> SourceContext<'a> {
    pub fn new(source: &'a [u8], file_path: impl Into<String>) -> Self {
        Self {
            source,
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Get the source code text for a node.
    /// Uses lossy UTF-8 conversion to handle invalid sequences gracefully
    pub fn node_text(&self, node: &Node) -> Cow<'a, str> {
        let end = node.end_byte().min(self.source.len());
        let start = node.start_byte().min(end);
        String::from_utf8_lossy(&self.source[start..end])
    }

    pub fn span(&self, node: &Node) -> Span {
        Span::from_node(node)
    }
}
