use tree_sitter::Node;

use crate::config::AllowSources;
use crate::syntax::expr::CALL_EXPRESSION;
use crate::syntax::{Expr, SourceContext, Span, StringLit};

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::extract::title_tags;

/// Callee name a test declaration must use.
pub const TEST_FUNCTION: &str = "test";

/// A `test('<title>', ...)` call.
#[derive(Debug, Clone)]
pub struct CallSite<'tree> {
    pub node: Node<'tree>,
    pub title: StringLit<'tree>,
    /// Decoded title string.
    pub title_text: String,
    pub title_span: Span,
    /// Second positional argument, where a `{ tag }` details object lives.
    pub metadata: Option<Node<'tree>>,
    /// Last positional argument when it is a function literal.
    pub body: Option<Node<'tree>>,
}

/// Recognizes test declarations: the callee is the bare identifier `test`
/// and the first argument is a string literal. `test.only(...)`,
/// `obj.test(...)`, `describe(...)` and `it(...)` are not matched.
///
/// Only the `call_expression` node itself matches. Parentheses around the
/// call are transparent for [`Expr`], so the enclosing node is skipped to keep
/// one call site per call.
pub fn match_call_site<'tree>(node: Node<'tree>, ctx: &SourceContext) -> Option<CallSite<'tree>> {
    if node.kind() != CALL_EXPRESSION {
        return None;
    }
    let Expr::Call(call) = Expr::from_node(node) else {
        return None;
    };
    if !call.callee().is_identifier(TEST_FUNCTION, ctx) {
        return None;
    }

    let arguments = call.arguments();
    let Expr::String(title) = Expr::from_node(*arguments.first()?) else {
        return None;
    };

    let body = arguments
        .iter()
        .skip(1)
        .last()
        .filter(|arg| matches!(Expr::from_node(**arg), Expr::Function(_)))
        .copied();

    Some(CallSite {
        node,
        title_text: title.value(ctx),
        title_span: ctx.span(&title.node),
        title,
        metadata: arguments.get(1).copied(),
        body,
    })
}

/// Title tags are reported before anything else when the title is not an
/// allowed source.
pub fn check_disallowed_title(site: &CallSite, allow: &AllowSources) -> Option<Diagnostic> {
    if allow.title || title_tags(&site.title_text).is_empty() {
        return None;
    }
    Some(Diagnostic::new(
        DiagnosticKind::DisallowedTagInTitle,
        site.title_span,
    ))
}
