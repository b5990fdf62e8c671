//! Site content catalog
//!
//! The page's owner blurb, filter options, cards and contact links are
//! shipped as one JSON document embedded in the binary. The optional `page`
//! object carries the [`PageConfig`].

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::filter::{Card, FilterControl, FilterController};
use crate::types::{FilterValue, RevealId};

/// Who the portfolio belongs to
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
}

/// A filter control as declared in the content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: FilterValue,
}

/// A portfolio card as declared in the content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// External link for the card, if any
    #[serde(default)]
    pub link: Option<String>,
}

/// A contact entry (mail, profile, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// Everything rendered on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCatalog {
    pub owner: Owner,
    pub filters: Vec<FilterOption>,
    pub cards: Vec<CardContent>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    #[serde(default)]
    pub page: PageConfig,
}

impl SiteCatalog {
    /// Parse and validate the site content
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let catalog: SiteCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural rules of the content
    ///
    /// - there is an `"all"` filter option
    /// - filter values are unique
    /// - every card has a non-empty category
    ///
    /// Cards whose category has no filter option are allowed (they are only
    /// reachable through `"all"`) and logged.
    pub fn validate(&self) -> PortfolioResult<()> {
        if !self.filters.iter().any(|f| f.value.is_all()) {
            return Err(PortfolioError::InvalidCatalog(format!(
                "no \"{}\" filter option",
                FilterValue::ALL
            )));
        }

        let mut seen = HashSet::new();
        for option in &self.filters {
            if !seen.insert(option.value.as_str()) {
                return Err(PortfolioError::InvalidCatalog(format!(
                    "duplicate filter value \"{}\"",
                    option.value
                )));
            }
        }

        if let Some((index, card)) = self
            .cards
            .iter()
            .enumerate()
            .find(|(_, c)| c.category.trim().is_empty())
        {
            return Err(PortfolioError::InvalidCatalog(format!(
                "card {} (\"{}\") has no category",
                index, card.title
            )));
        }

        for category in self.categories() {
            if !seen.contains(category) {
                tracing::warn!(category, "Card category has no filter option");
            }
        }

        Ok(())
    }

    /// Distinct card categories, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.cards.iter().map(|c| c.category.as_str()).collect()
    }

    /// Build the filter controller for this content
    pub fn controller(&self) -> FilterController {
        let controls = self
            .filters
            .iter()
            .map(|f| FilterControl::new(f.label.clone(), f.value.clone()))
            .collect();
        let cards = self.cards.iter().map(|c| Card::new(c.category.clone())).collect();
        FilterController::new(controls, cards, self.page.filter_transition.clone())
    }

    /// Every element observed for scroll reveal
    pub fn reveal_targets(&self) -> Vec<RevealId> {
        let mut targets: Vec<RevealId> = (0..self.cards.len()).map(RevealId::Card).collect();
        if !self.contact.is_empty() {
            targets.push(RevealId::contact());
        }
        targets
    }
}
