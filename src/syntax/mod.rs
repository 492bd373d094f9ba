//! Syntax access for JavaScript and TypeScript sources.
//!
//! Tree-sitter supplies the parse tree; everything above this module works on
//! the typed [`Expr`] views and [`SourceContext`] rather than on raw node kinds.

pub mod context;
pub mod expr;
pub mod language;
pub mod literal;

pub use context::{SourceContext, Span};
pub use expr::{CallExpr, Expr, MemberExpr, ObjectLit, Property, StringLit};
pub use language::{parse_source, Language};
