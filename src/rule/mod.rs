//! The tag validation rule.
//!
//! For each `test('<title>', ...)` call site the rule runs a fixed sequence:
//! title pre-check, tag extraction, validation against the tag groups, and
//! for an untagged title with no groups configured, a placeholder fix.
//! Every call site yields at most one diagnostic.

pub mod body;
pub mod diagnostic;
pub mod extract;
pub mod fix;
pub mod matcher;
pub mod normalize;
pub mod validate;

pub use diagnostic::{Diagnostic, DiagnosticKind, TextEdit};
pub use extract::{extract_tags, title_tags, RawTag, TagSource};
pub use fix::{compute_fix, PLACEHOLDER_TAG};
pub use matcher::{check_disallowed_title, match_call_site, CallSite};
pub use normalize::normalize;
pub use validate::TagValidator;

use tracing::trace;
use tree_sitter::Node;

use crate::config::{AllowSources, TagRuleConfig};
use crate::syntax::SourceContext;

pub struct TagRule {
    allow: AllowSources,
    validator: TagValidator,
}

impl TagRule {
    pub const NAME: &'static str = "validate-tags-playwright";

    pub fn new(config: &TagRuleConfig) -> Self {
        Self {
            allow: config.allow,
            validator: TagValidator::new(config),
        }
    }

    /// Runs the rule on one node. Nodes that are not test declarations
    /// produce nothing.
    pub fn check_node(&self, node: Node, ctx: &SourceContext) -> Option<Diagnostic> {
        let site = match_call_site(node, ctx)?;
        trace!(
            file = ctx.file_path(),
            line = site.title_span.line,
            title = %site.title_text,
            "checking test declaration"
        );
        self.check_call_site(&site, ctx)
    }

    pub fn check_call_site(&self, site: &CallSite, ctx: &SourceContext) -> Option<Diagnostic> {
        if let Some(diagnostic) = check_disallowed_title(site, &self.allow) {
            return Some(diagnostic);
        }

        let tags = extract_tags(site, &self.allow, ctx);
        trace!(count = tags.len(), "extracted tags");

        let diagnostic = self.validator.validate(&tags, site.title_span)?;
        if diagnostic.kind == DiagnosticKind::MissingTag && self.allow.title {
            let fix = compute_fix(&site.title, ctx);
            return Some(diagnostic.with_fix(fix));
        }
        Some(diagnostic)
    }
}
