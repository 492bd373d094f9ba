use serde::Serialize;
use tree_sitter::Node;

use crate::config::AllowSources;
use crate::syntax::{Expr, ObjectLit, SourceContext, Span};
use crate::syntax::expr::named_children;

use super::body::body_annotation_tags;
use super::matcher::CallSite;

/// Property of the details object that carries tags.
pub const TAG_PROPERTY: &str = "tag";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TagSource {
    Title,
    Annotation,
    BodyAnnotation,
}

/// A tag as written, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub tag: String,
    pub span: Span,
    pub source: TagSource,
}

/// Collects tags from every allowed source: title first, then the details
/// object, then body annotations. Each source keeps its own source order.
pub fn extract_tags(site: &CallSite, allow: &AllowSources, ctx: &SourceContext) -> Vec<RawTag> {
    let mut tags = Vec::new();

    if allow.title {
        tags.extend(title_tags(&site.title_text).into_iter().map(|tag| RawTag {
            tag: tag.to_string(),
            span: site.title_span,
            source: TagSource::Title,
        }));
    }

    if allow.tag_annotation {
        if let Some(metadata) = site.metadata {
            tags.extend(annotation_tags(metadata, ctx));
        }
    }

    if allow.body_annotation {
        if let Some(body) = site.body {
            tags.extend(body_annotation_tags(body, ctx));
        }
    }

    tags
}

/// Every `@<non-whitespace run>` in a title, `@` included.
pub fn title_tags(title: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut chars = title.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '@' {
            continue;
        }
        let mut end = start + 1;
        while let Some(&(idx, next)) = chars.peek() {
            if is_js_whitespace(next) {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }
        if end > start + 1 {
            tags.push(&title[start..end]);
        }
    }

    tags
}

/// JavaScript `\s`: Unicode `White_Space` plus U+FEFF, minus U+0085.
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// Tags from a `{ tag: 'x' }` or `{ tag: ['x', 'y'] }` details object.
///
/// Only literal shapes count: anything computed at runtime yields nothing,
/// and non-string array elements are skipped.
pub fn annotation_tags(metadata: Node, ctx: &SourceContext) -> Vec<RawTag> {
    let Expr::Object(details) = Expr::from_node(metadata) else {
        return Vec::new();
    };
    tag_property_values(&details, ctx)
}

fn tag_property_values(details: &ObjectLit, ctx: &SourceContext) -> Vec<RawTag> {
    let Some(value) = details
        .find_property(TAG_PROPERTY, ctx)
        .and_then(|property| property.value())
    else {
        return Vec::new();
    };

    match value {
        Expr::String(lit) => vec![RawTag {
            tag: lit.value(ctx),
            span: ctx.span(&lit.node),
            source: TagSource::Annotation,
        }],
        Expr::Array(array) => named_children(array)
            .into_iter()
            .filter_map(|element| match Expr::from_node(element) {
                Expr::String(lit) => Some(RawTag {
                    tag: lit.value(ctx),
                    span: ctx.span(&lit.node),
                    source: TagSource::Annotation,
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
