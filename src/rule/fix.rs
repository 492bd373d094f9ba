use crate::syntax::{SourceContext, StringLit};

use super::diagnostic::TextEdit;

/// Tag appended to untagged titles by the fixer.
pub const PLACEHOLDER_TAG: &str = "@tagme";

/// Inserts ` @tagme` just before the closing quote of the title literal.
///
/// Returns `None` when the literal is not properly closed (error recovery can
/// produce such nodes), since there is no closing quote to anchor on.
pub fn compute_fix(title: &StringLit, ctx: &SourceContext) -> Option<TextEdit> {
    let raw = title.raw(ctx);
    let open = raw.chars().next()?;
    if raw.len() < 2 || !matches!(open, '\'' | '"') || !raw.ends_with(open) {
        return None;
    }
    let closing_quote = title.node.end_byte() - open.len_utf8();
    Some(TextEdit::insert(closing_quote, format!(" {PLACEHOLDER_TAG}")))
}
