//! Core types for the portfolio page

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute carrying the filter value of a filter control
pub const FILTER_ATTRIBUTE: &str = "data-filter";

/// Attribute carrying the category of a card
pub const CATEGORY_ATTRIBUTE: &str = "data-category";

/// Attribute carrying the [`RevealId`] of an observed element
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Filter token a control activates
///
/// Either the wildcard `"all"` or the name of a card category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterValue(String);

impl FilterValue {
    /// Wildcard token matching every category
    pub const ALL: &'static str = "all";

    /// Create a filter value from its token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wildcard filter
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Get the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the wildcard filter
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Whether a card in `category` is visible under this filter
    pub fn matches(&self, category: &str) -> bool {
        self.is_all() || self.0 == category
    }
}

impl Default for FilterValue {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an element that fades in when it first enters the viewport
///
/// Rendered into the reveal attribute of the element so intersection
/// callbacks can map a DOM node back to its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevealId {
    /// A portfolio card, by index in the grid
    Card(usize),
    /// A named page section (e.g. `contact`)
    Section(String),
}

impl RevealId {
    /// The contact section at the bottom of the page
    pub fn contact() -> Self {
        RevealId::Section("contact".to_string())
    }

    /// Encode as an attribute value
    pub fn to_attr(&self) -> String {
        match self {
            RevealId::Card(index) => format!("card-{}", index),
            RevealId::Section(name) => format!("section-{}", name),
        }
    }

    /// Decode an attribute value produced by [`RevealId::to_attr`]
    pub fn parse(attr: &str) -> Option<Self> {
        if let Some(index) = attr.strip_prefix("card-") {
            return index.parse().ok().map(RevealId::Card);
        }
        attr.strip_prefix("section-")
            .filter(|name| !name.is_empty())
            .map(|name| RevealId::Section(name.to_string()))
    }
}

impl fmt::Display for RevealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_category() {
        let all = FilterValue::all();
        assert!(all.is_all());
        assert!(all.matches("projects"));
        assert!(all.matches(""));
    }

    #[test]
    fn named_filter_matches_only_its_category() {
        let teaching = FilterValue::from("teaching");
        assert!(!teaching.is_all());
        assert!(teaching.matches("teaching"));
        assert!(!teaching.matches("media"));
        assert!(!teaching.matches("Teaching"));
    }

    #[test]
    fn reveal_id_attr_roundtrip() {
        assert_eq!(RevealId::parse("card-7"), Some(RevealId::Card(7)));
        assert_eq!(RevealId::parse(&RevealId::contact().to_attr()), Some(RevealId::contact()));
    }

    #[test]
    fn reveal_id_rejects_garbage() {
        assert_eq!(RevealId::parse("card-x"), None);
        assert_eq!(RevealId::parse("section-"), None);
        assert_eq!(RevealId::parse("hero"), None);
    }
}
