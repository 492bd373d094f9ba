use serde::Serialize;

use crate::syntax::Span;

/// What went wrong at a test declaration, with the data its message needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum DiagnosticKind {
    #[serde(rename = "missingTag")]
    MissingTag,

    #[serde(rename = "missingTagFromGroup")]
    MissingTagFromGroup { groups: String },

    #[serde(rename = "disallowedTagInTitle")]
    DisallowedTagInTitle,

    #[serde(rename = "unknownTag")]
    UnknownTag {
        tag: String,
        #[serde(rename = "availableTags")]
        available_tags: String,
    },
}

impl DiagnosticKind {
    pub fn id(&self) -> &'static str {
        match self {
            Self::MissingTag => "missingTag",
            Self::MissingTagFromGroup { .. } => "missingTagFromGroup",
            Self::DisallowedTagInTitle => "disallowedTagInTitle",
            Self::UnknownTag { .. } => "unknownTag",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingTag => "Test must contain a tag".to_string(),
            Self::MissingTagFromGroup { groups } => {
                format!("Test must contain at least one tag from: {groups}")
            }
            Self::DisallowedTagInTitle => "Tags are not allowed in the test title".to_string(),
            Self::UnknownTag {
                tag,
                available_tags,
            } => format!(
                "Unknown tag \"{tag}\". It does not belong to any configured tag group. \
                 Available tags by group: {available_tags}"
            ),
        }
    }
}

/// A replacement of `start_byte..end_byte` in the file source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start_byte: usize,
    pub end_byte: usize,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start_byte: at,
            end_byte: at,
            replacement: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<TextEdit>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: Option<TextEdit>) -> Self {
        self.fix = fix;
        self
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }
}
