use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Tree};

use crate::config::TagRuleConfig;
use crate::error::{IoError, ParserError};
use crate::rule::{Diagnostic, TagRule};
use crate::syntax::{parse_source, Language, SourceContext};

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub file_path: String,
    pub diagnostics: Vec<Diagnostic>,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            diagnostics: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.fix.is_some()).count()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Runs the tag rule over whole files.
pub struct Scanner {
    rule: TagRule,
}

impl Scanner {
    pub fn new(config: &TagRuleConfig) -> Self {
        Self {
            rule: TagRule::new(config),
        }
    }

    pub fn scan_tree(&self, tree: &Tree, source: &[u8], file_path: &str) -> ScanResult {
        trace!(file_path, "scanning tree");

        let root = tree.root_node();
        if root.has_error() {
            debug!(file_path, "tree contains syntax errors, scanning recovered nodes");
        }

        let ctx = SourceContext::new(source, file_path);
        let mut result = ScanResult::new(file_path.to_string());
        self.traverse_node(root, &ctx, &mut result);

        debug!(
            file_path,
            diagnostics = result.diagnostic_count(),
            fixable = result.fixable_count(),
            "scan complete"
        );
        result
    }

    pub fn scan_source(
        &self,
        source: &str,
        file_path: &str,
        language: Language,
    ) -> Result<ScanResult, ParserError> {
        let tree = parse_source(source, language)?;
        Ok(self.scan_tree(&tree, source.as_bytes(), file_path))
    }

    /// Reads, parses and scans one file. Failures end up in
    /// [`ScanResult::errors`] rather than aborting the run.
    pub fn scan_file(&self, path: &Path, language: Option<Language>) -> ScanResult {
        let file_path = path.display().to_string();

        let Some(language) = language.or_else(|| Language::detect(path)) else {
            let err = ParserError::unsupported_file(path);
            warn!(file_path = %file_path, error = %err, "skipping file");
            let mut result = ScanResult::new(file_path);
            result.add_error(err.to_string());
            return result;
        };

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                let err = IoError::read_error(path, e);
                warn!(file_path = %file_path, error = %err, "failed to read file");
                let mut result = ScanResult::new(file_path);
                result.add_error(err.to_string());
                return result;
            }
        };

        match self.scan_source(&source, &file_path, language) {
            Ok(result) => result,
            Err(err) => {
                warn!(file_path = %file_path, error = %err, "failed to parse file");
                let mut result = ScanResult::new(file_path);
                result.add_error(err.to_string());
                result
            }
        }
    }

    fn traverse_node(&self, node: Node, ctx: &SourceContext, result: &mut ScanResult) {
        if let Some(diagnostic) = self.rule.check_node(node, ctx) {
            result.add_diagnostic(diagnostic);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse_node(child, ctx, result);
        }
    }
}
