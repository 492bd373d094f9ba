use serde::Serialize;

use crate::rule::{Diagnostic, DiagnosticKind, TagRule};
use crate::scanner::ScanResult;

/// One reported diagnostic, flattened for output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub rule: &'static str,
    pub message_id: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub fixable: bool,
}

impl Finding {
    pub fn from_diagnostic(file: &str, diagnostic: &Diagnostic) -> Self {
        Finding {
            file: file.to_string(),
            line: diagnostic.span.line,
            column: diagnostic.span.column,
            end_line: diagnostic.span.end_line,
            end_column: diagnostic.span.end_column,
            rule: TagRule::NAME,
            message_id: diagnostic.id(),
            message: diagnostic.message(),
            data: message_data(&diagnostic.kind),
            fixable: diagnostic.fix.is_some(),
        }
    }

    pub fn from_scan_result(result: &ScanResult) -> Vec<Self> {
        result
            .diagnostics
            .iter()
            .map(|d| Self::from_diagnostic(&result.file_path, d))
            .collect()
    }
}

fn message_data(kind: &DiagnosticKind) -> Option<serde_json::Value> {
    match kind {
        DiagnosticKind::MissingTag | DiagnosticKind::DisallowedTagInTitle => None,
        DiagnosticKind::MissingTagFromGroup { groups } => {
            Some(serde_json::json!({ "groups": groups }))
        }
        DiagnosticKind::UnknownTag {
            tag,
            available_tags,
        } => Some(serde_json::json!({
            "tag": tag,
            "availableTags": available_tags
        })),
    }
}
