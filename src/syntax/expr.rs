//! Typed views over the tree-sitter node kinds the tag rule cares about.
//!
//! `Expr::from_node` is the only place that looks at `node.kind()`; callers
//! match on the variants instead of probing fields.

use tree_sitter::Node;

use super::context::SourceContext;
use super::literal::string_value;

const COMMENT: &str = "comment";
pub const CALL_EXPRESSION: &str = "call_expression";

#[derive(Debug, Clone, Copy)]
pub enum Expr<'tree> {
    Call(CallExpr<'tree>),
    Identifier(Node<'tree>),
    Member(MemberExpr<'tree>),
    String(StringLit<'tree>),
    Object(ObjectLit<'tree>),
    Array(Node<'tree>),
    Function(Node<'tree>),
    Other(Node<'tree>),
}

impl<'tree> Expr<'tree> {
    /// Classifies a node. Parentheses are transparent, as they are in the
    /// ESTree shape test authors reason about.
    pub fn from_node(node: Node<'tree>) -> Self {
        match node.kind() {
            "parenthesized_expression" => match named_children(node).into_iter().next() {
                Some(inner) => Self::from_node(inner),
                None => Self::Other(node),
            },
            CALL_EXPRESSION => match CallExpr::new(node) {
                Some(call) => Self::Call(call),
                None => Self::Other(node),
            },
            "identifier" => Self::Identifier(node),
            "member_expression" => match MemberExpr::new(node) {
                Some(member) => Self::Member(member),
                None => Self::Other(node),
            },
            "string" => Self::String(StringLit { node }),
            "object" => Self::Object(ObjectLit { node }),
            "array" => Self::Array(node),
            "arrow_function" | "function_expression" | "function" | "generator_function" => {
                Self::Function(node)
            }
            _ => Self::Other(node),
        }
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            Self::Call(call) => call.node,
            Self::Member(member) => member.node,
            Self::String(lit) => lit.node,
            Self::Object(obj) => obj.node,
            Self::Identifier(node) | Self::Array(node) | Self::Function(node) | Self::Other(node) => {
                *node
            }
        }
    }

    /// True for an identifier spelled exactly `name`.
    pub fn is_identifier(&self, name: &str, ctx: &SourceContext) -> bool {
        matches!(self, Self::Identifier(node) if ctx.node_text(node) == name)
    }
}

/// A call with a regular argument list. Tagged templates are not calls here.
#[derive(Debug, Clone, Copy)]
pub struct CallExpr<'tree> {
    pub node: Node<'tree>,
    pub callee: Node<'tree>,
    arguments: Node<'tree>,
}

impl<'tree> CallExpr<'tree> {
    fn new(node: Node<'tree>) -> Option<Self> {
        let callee = node.child_by_field_name("function")?;
        let arguments = node.child_by_field_name("arguments")?;
        if arguments.kind() != "arguments" {
            return None;
        }
        Some(Self {
            node,
            callee,
            arguments,
        })
    }

    pub fn callee(&self) -> Expr<'tree> {
        Expr::from_node(self.callee)
    }

    /// Positional arguments, comments skipped.
    pub fn arguments(&self) -> Vec<Node<'tree>> {
        named_children(self.arguments)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MemberExpr<'tree> {
    pub node: Node<'tree>,
    pub object: Node<'tree>,
    pub property: Node<'tree>,
}

impl<'tree> MemberExpr<'tree> {
    fn new(node: Node<'tree>) -> Option<Self> {
        Some(Self {
            node,
            object: node.child_by_field_name("object")?,
            property: node.child_by_field_name("property")?,
        })
    }

    pub fn object(&self) -> Expr<'tree> {
        Expr::from_node(self.object)
    }

    /// `a.name`, but not `a.#name`.
    pub fn is_property(&self, name: &str, ctx: &SourceContext) -> bool {
        self.property.kind() == "property_identifier" && ctx.node_text(&self.property) == name
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StringLit<'tree> {
    pub node: Node<'tree>,
}

impl<'tree> StringLit<'tree> {
    /// The decoded string value.
    pub fn value(&self, ctx: &SourceContext) -> String {
        string_value(&ctx.node_text(&self.node))
    }

    /// The literal as written, quotes included.
    pub fn raw(&self, ctx: &SourceContext) -> String {
        ctx.node_text(&self.node).into_owned()
    }
}

/// One member of an object literal.
#[derive(Debug, Clone, Copy)]
pub enum Property<'tree> {
    /// `key: value`, with `key` a plain identifier, string, number, or computed name.
    KeyValue { key: Node<'tree>, value: Node<'tree> },
    /// `{ tag }`
    Shorthand(Node<'tree>),
    /// `tag() {}`
    Method(Node<'tree>),
    /// `...rest`
    Spread(Node<'tree>),
}

impl<'tree> Property<'tree> {
    /// Name of the property when its key is a bare identifier. Quoted and
    /// computed keys have no identifier name.
    pub fn identifier_name(&self, ctx: &SourceContext) -> Option<String> {
        let key = match self {
            Self::KeyValue { key, .. } => *key,
            Self::Shorthand(node) => *node,
            Self::Method(node) => node.child_by_field_name("name")?,
            Self::Spread(_) => return None,
        };
        matches!(
            key.kind(),
            "property_identifier" | "shorthand_property_identifier"
        )
        .then(|| ctx.node_text(&key).into_owned())
    }

    pub fn value(&self) -> Option<Expr<'tree>> {
        match self {
            Self::KeyValue { value, .. } => Some(Expr::from_node(*value)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectLit<'tree> {
    pub node: Node<'tree>,
}

impl<'tree> ObjectLit<'tree> {
    pub fn properties(&self) -> Vec<Property<'tree>> {
        named_children(self.node)
            .into_iter()
            .filter_map(|child| match child.kind() {
                "pair" => Some(Property::KeyValue {
                    key: child.child_by_field_name("key")?,
                    value: child.child_by_field_name("value")?,
                }),
                "shorthand_property_identifier" => Some(Property::Shorthand(child)),
                "method_definition" => Some(Property::Method(child)),
                "spread_element" => Some(Property::Spread(child)),
                _ => None,
            })
            .collect()
    }

    /// First property whose key is the identifier `name`.
    pub fn find_property(&self, name: &str, ctx: &SourceContext) -> Option<Property<'tree>> {
        self.properties()
            .into_iter()
            .find(|p| p.identifier_name(ctx).as_deref() == Some(name))
    }

    /// Decoded value of `name: '<string>'`, if that is the property's shape.
    pub fn string_property(&self, name: &str, ctx: &SourceContext) -> Option<StringLit<'tree>> {
        match self.find_property(name, ctx)?.value()? {
            Expr::String(lit) => Some(lit),
            _ => None,
        }
    }
}

/// Named children without comments, in source order.
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT)
        .collect()
}
