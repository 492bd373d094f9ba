use std::collections::HashSet;

use crate::config::{TagGroup, TagRuleConfig};
use crate::syntax::Span;

use super::diagnostic::{Diagnostic, DiagnosticKind};
use super::extract::RawTag;
use super::normalize::normalize;

struct RequiredGroup {
    /// `name (member, member)` as shown in `missingTagFromGroup`.
    label: String,
    members: HashSet<String>,
}

/// Checks extracted tags against the configured taxonomy.
///
/// Built once per configuration; the known-tag universe and the listing used
/// by `unknownTag` do not change between call sites.
pub struct TagValidator {
    has_groups: bool,
    required: Vec<RequiredGroup>,
    known: HashSet<String>,
    available_tags: String,
}

impl TagValidator {
    pub fn new(config: &TagRuleConfig) -> Self {
        let required = config
            .tag_groups
            .iter()
            .map(|group| RequiredGroup {
                label: format!("{} ({})", group.name, group.tags.join(", ")),
                members: normalized_members(group).collect(),
            })
            .collect();

        let known = config
            .tag_groups
            .iter()
            .chain(&config.optional_tag_groups)
            .flat_map(normalized_members)
            .collect();

        let available_tags = config
            .tag_groups
            .iter()
            .map(|group| listing_line(group, "required"))
            .chain(
                config
                    .optional_tag_groups
                    .iter()
                    .map(|group| listing_line(group, "optional")),
            )
            .collect();

        Self {
            has_groups: config.has_groups(),
            required,
            known,
            available_tags,
        }
    }

    /// Multi-line listing of every group and its tags.
    pub fn available_tags(&self) -> &str {
        &self.available_tags
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.known.contains(normalize(tag))
    }

    /// Returns the single diagnostic for one test declaration, if any.
    ///
    /// Unknown tags are reported before unsatisfied groups, and only the first
    /// unknown tag is reported. `title_span` anchors the diagnostics that are
    /// not about a specific tag.
    pub fn validate(&self, tags: &[RawTag], title_span: Span) -> Option<Diagnostic> {
        if !self.has_groups {
            return tags
                .is_empty()
                .then(|| Diagnostic::new(DiagnosticKind::MissingTag, title_span));
        }

        if let Some(unknown) = tags.iter().find(|raw| !self.is_known(&raw.tag)) {
            return Some(Diagnostic::new(
                DiagnosticKind::UnknownTag {
                    tag: unknown.tag.clone(),
                    available_tags: self.available_tags.clone(),
                },
                unknown.span,
            ));
        }

        let present: HashSet<&str> = tags.iter().map(|raw| normalize(&raw.tag)).collect();
        let unsatisfied: Vec<&str> = self
            .required
            .iter()
            .filter(|group| !present.iter().any(|tag| group.members.contains(*tag)))
            .map(|group| group.label.as_str())
            .collect();

        if unsatisfied.is_empty() {
            return None;
        }
        Some(Diagnostic::new(
            DiagnosticKind::MissingTagFromGroup {
                groups: unsatisfied.join(" and "),
            },
            title_span,
        ))
    }
}

fn normalized_members(group: &TagGroup) -> impl Iterator<Item = String> + '_ {
    group.tags.iter().map(|tag| normalize(tag).to_string())
}

fn listing_line(group: &TagGroup, flavor: &str) -> String {
    format!("\n  - {} ({flavor}): {}", group.name, group.tags.join(", "))
}
