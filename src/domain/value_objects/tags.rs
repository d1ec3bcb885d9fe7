//! Tag filter value object

use crate::domain::entities::HostRecord;

/// Set of tags a host must match at least one of
///
/// An empty filter matches every host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn matches(&self, host: &HostRecord) -> bool {
        self.is_empty() || host.has_any_tag(&self.tags)
    }

    /// Colmena node selector, e.g. `@dns,@web`
    pub fn colmena_selector(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|t| format!("@{}", t))
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
