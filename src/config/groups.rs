use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// A named, closed set of acceptable tags.
///
/// Members keep the spelling the user configured; comparisons go through
/// [`crate::rule::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub name: String,
    pub tags: Vec<String>,
}

impl TagGroup {
    pub fn new<N, I, T>(name: N, tags: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Tag groups in configured order.
///
/// Deserializes from a map of group name to tag list. Entries are kept in
/// document order, and repeated keys are kept so validation can reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroups(Vec<TagGroup>);

impl TagGroups {
    pub fn iter(&self) -> std::slice::Iter<'_, TagGroup> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|g| g.name.as_str()).collect()
    }
}

impl<N, I, T> FromIterator<(N, I)> for TagGroups
where
    N: Into<String>,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (N, I)>>(iter: It) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, tags)| TagGroup::new(name, tags))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a TagGroups {
    type Item = &'a TagGroup;
    type IntoIter = std::slice::Iter<'a, TagGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TagGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = TagGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of tag group names to lists of tags")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TagGroups, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, tags)) = map.next_entry::<String, Vec<String>>()? {
                    groups.push(TagGroup { name, tags });
                }
                Ok(TagGroups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}
