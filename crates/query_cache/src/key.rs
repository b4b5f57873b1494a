//! Cache keys

use std::fmt;

/// Hierarchical cache key, e.g. `["portfolio", "slug", "spice-route"]`
///
/// Invalidation matches on whole leading segments, so `["pricing"]` covers
/// `["pricing", "admin"]` but not `["pricing-archive"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Build a key from its segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Extend the key with one more segment
    #[must_use]
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Key segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether `prefix` matches the leading segments of this key
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl From<&str> for QueryKey {
    fn from(segment: &str) -> Self {
        Self::new([segment])
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matches_whole_segments() {
        let key = QueryKey::from(["pricing", "admin"]);
        assert!(key.starts_with(&QueryKey::from("pricing")));
        assert!(key.starts_with(&key.clone()));
        assert!(!key.starts_with(&QueryKey::from("pri")));
        assert!(!QueryKey::from("pricing").starts_with(&key));
    }

    #[test]
    fn empty_key_prefixes_everything() {
        let all = QueryKey::new(Vec::<String>::new());
        assert!(QueryKey::from("content").starts_with(&all));
    }

    #[test]
    fn with_appends_segment() {
        let key = QueryKey::from("portfolio").with("slug").with("spice-route");
        assert_eq!(key.segments(), ["portfolio", "slug", "spice-route"]);
        assert_eq!(key.to_string(), "[portfolio, slug, spice-route]");
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn extended_key_keeps_its_prefix(
                base in prop::collection::vec("[a-z]{1,8}", 0..4),
                extra in prop::collection::vec("[a-z0-9-]{1,8}", 0..4)
            ) {
                let prefix = QueryKey::new(base.clone());
                let key = extra.iter().fold(prefix.clone(), |k, s| k.with(s.as_str()));
                prop_assert!(key.starts_with(&prefix));
                prop_assert_eq!(key.segments().len(), base.len() + extra.len());
            }

            #[test]
            fn partial_segment_is_not_a_prefix(segment in "[a-z]{2,10}") {
                let key = QueryKey::from(segment.as_str());
                let truncated = QueryKey::from(&segment[..segment.len() - 1]);
                prop_assert!(!key.starts_with(&truncated));
            }
        }
    }
}
