//! Rule configuration: which tag sources are honored and which tag groups
//! make up the taxonomy.

mod groups;

pub use groups::{TagGroup, TagGroups};

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// File names looked up in the scan root when no `--config` is given.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".playwright-tagging.json",
    ".playwright-tagging.yaml",
    ".playwright-tagging.yml",
];

/// Where tags may come from.
///
/// When `allow` is omitted entirely the defaults apply (title only). When it
/// is given, every omitted source is disallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllowSources {
    #[serde(default)]
    pub title: bool,
    #[serde(default)]
    pub tag_annotation: bool,
    /// `test.info().annotations.push({ type: 'tag', ... })` inside the test body.
    #[serde(default)]
    pub body_annotation: bool,
}

impl Default for AllowSources {
    fn default() -> Self {
        Self {
            title: true,
            tag_annotation: false,
            body_annotation: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct TagRuleConfig {
    pub allow: AllowSources,
    pub tag_groups: TagGroups,
    pub optional_tag_groups: TagGroups,
}

impl TagRuleConfig {
    pub fn with_allow(mut self, allow: AllowSources) -> Self {
        self.allow = allow;
        self
    }

    pub fn with_tag_groups(mut self, groups: TagGroups) -> Self {
        self.tag_groups = groups;
        self
    }

    pub fn with_optional_tag_groups(mut self, groups: TagGroups) -> Self {
        self.optional_tag_groups = groups;
        self
    }

    pub fn has_groups(&self) -> bool {
        !self.tag_groups.is_empty() || !self.optional_tag_groups.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for group in self.tag_groups.iter().chain(&self.optional_tag_groups) {
            if !names.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup {
                    group: group.name.clone(),
                });
            }
            if group.tags.is_empty() {
                return Err(ConfigError::EmptyGroup {
                    group: group.name.clone(),
                });
            }

            let mut members = HashSet::new();
            for tag in &group.tags {
                if tag.trim().is_empty() {
                    return Err(ConfigError::BlankTag {
                        group: group.name.clone(),
                    });
                }
                if !members.insert(tag.as_str()) {
                    return Err(ConfigError::DuplicateTag {
                        group: group.name.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TagRuleConfig, ConfigError> {
    let path = path.as_ref();
    trace!(path = %path.display(), "loading config");

    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e.to_string()))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config: TagRuleConfig = match extension {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
        _ => return Err(ConfigError::unsupported_format(extension)),
    };

    config.validate()?;
    debug!(
        required = ?config.tag_groups.names(),
        optional = ?config.optional_tag_groups.names(),
        "loaded config"
    );
    Ok(config)
}

/// Returns the first well-known config file present in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}
