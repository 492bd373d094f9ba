//! Tags added imperatively inside a test body:
//!
//! ```js
//! test('checkout', async () => {
//!   test.info().annotations.push({ type: 'tag', description: '@smoke' });
//! });
//! ```
//!
//! Only literal annotation objects are understood. Tags pushed through
//! variables, loops over computed lists, or helper functions are invisible.

use tree_sitter::Node;

use crate::syntax::expr::{named_children, CALL_EXPRESSION};
use crate::syntax::{CallExpr, Expr, SourceContext};

use super::extract::{RawTag, TagSource};
use super::matcher::TEST_FUNCTION;

const MAX_DEPTH: usize = 256;
const ANNOTATION_TYPE: &str = "tag";

pub fn body_annotation_tags(body: Node, ctx: &SourceContext) -> Vec<RawTag> {
    let mut visitor = AnnotationVisitor {
        ctx,
        tags: Vec::new(),
    };
    if let Expr::Function(function) = Expr::from_node(body) {
        if let Some(block) = function.child_by_field_name("body") {
            visitor.visit(block, 0);
        }
    }
    visitor.tags
}

struct AnnotationVisitor<'c, 'a> {
    ctx: &'c SourceContext<'a>,
    tags: Vec<RawTag>,
}

impl AnnotationVisitor<'_, '_> {
    fn visit(&mut self, node: Node, depth: usize) {
        if depth >= MAX_DEPTH {
            return;
        }

        // a parenthesized call is reached again through its inner node
        let call = (node.kind() == CALL_EXPRESSION).then(|| Expr::from_node(node));
        if let Some(Expr::Call(call)) = call {
            if self.is_nested_test(&call) {
                return;
            }
            if self.is_annotation_push(&call) {
                self.collect_pushed(&call);
            }
        }

        for child in named_children(node) {
            self.visit(child, depth + 1);
        }
    }

    /// A `test('...', ...)` inside the body declares its own tags.
    fn is_nested_test(&self, call: &CallExpr) -> bool {
        call.callee().is_identifier(TEST_FUNCTION, self.ctx)
            && call
                .arguments()
                .first()
                .is_some_and(|arg| matches!(Expr::from_node(*arg), Expr::String(_)))
    }

    /// `test.info().annotations.push(...)`
    fn is_annotation_push(&self, call: &CallExpr) -> bool {
        let Expr::Member(push) = call.callee() else {
            return false;
        };
        if !push.is_property("push", self.ctx) {
            return false;
        }
        let Expr::Member(annotations) = push.object() else {
            return false;
        };
        if !annotations.is_property("annotations", self.ctx) {
            return false;
        }
        let Expr::Call(info_call) = annotations.object() else {
            return false;
        };
        let Expr::Member(info) = info_call.callee() else {
            return false;
        };
        info.is_property("info", self.ctx) && info.object().is_identifier(TEST_FUNCTION, self.ctx)
    }

    fn collect_pushed(&mut self, call: &CallExpr) {
        for argument in call.arguments() {
            let Expr::Object(annotation) = Expr::from_node(argument) else {
                continue;
            };
            let is_tag = annotation
                .string_property("type", self.ctx)
                .is_some_and(|kind| kind.value(self.ctx) == ANNOTATION_TYPE);
            if !is_tag {
                continue;
            }
            if let Some(description) = annotation.string_property("description", self.ctx) {
                self.tags.push(RawTag {
                    tag: description.value(self.ctx),
                    span: self.ctx.span(&description.node),
                    source: TagSource::BodyAnnotation,
                });
            }
        }
    }
}
