//! Page events and the state they act on
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PageEvent: everything the DOM reports to the page           │
//! │  ├── FilterClicked: a filter control was activated           │
//! │  ├── Scrolled: window scroll offset changed                  │
//! │  ├── Intersected: intersection observer batch                │
//! │  └── Settle: a filter micro-delay elapsed                    │
//! │                                                              │
//! │  PageState: single owner of all page state                   │
//! │  ├── FilterController (controls, cards, transitions)         │
//! │  ├── RevealTracker (cards, contact section)                  │
//! │  └── HeaderShadow (last scroll offset, shadow state)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::SiteCatalog;
use crate::config::PageConfig;
use crate::filter::FilterController;
use crate::header::HeaderShadow;
use crate::reveal::{IntersectionEntry, RevealTracker};
use crate::scroll::SmoothScroll;
use crate::style;
use crate::transition::SettleTicket;
use crate::types::RevealId;

/// Something the DOM reported
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The filter control at this index was clicked
    FilterClicked(usize),
    /// The window scrolled to this vertical offset
    Scrolled(f64),
    /// The intersection observer delivered a batch of entries
    Intersected(Vec<IntersectionEntry>),
    /// The micro-delay of this filter generation elapsed
    Settle(u64),
}

/// All mutable state of the page
#[derive(Debug, Clone)]
pub struct PageState {
    controller: FilterController,
    reveal: RevealTracker,
    header: HeaderShadow,
    config: PageConfig,
}

impl PageState {
    pub fn new(catalog: &SiteCatalog) -> Self {
        Self {
            controller: catalog.controller(),
            reveal: RevealTracker::with_targets(catalog.reveal_targets()),
            header: HeaderShadow::from_config(&catalog.page),
            config: catalog.page.clone(),
        }
    }

    pub fn controller(&self) -> &FilterController {
        &self.controller
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn header(&self) -> &HeaderShadow {
        &self.header
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Smooth scroll handler configured with the header offset
    pub fn smooth_scroll(&self) -> SmoothScroll {
        SmoothScroll::new(self.config.header_offset)
    }

    /// Apply one event; returns whether anything rendered changed
    pub fn apply(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::FilterClicked(index) => {
                let before = self.controller.generation();
                self.controller.activate(index);
                self.controller.generation() != before
            }
            PageEvent::Scrolled(offset) => self.header.on_scroll(offset).is_some(),
            PageEvent::Intersected(entries) => !self.reveal.observe(&entries).is_empty(),
            PageEvent::Settle(generation) => self.controller.settle(generation),
        }
    }

    /// Settle step the host must schedule after a filter change
    pub fn take_pending_settle(&mut self) -> Option<SettleTicket> {
        self.controller.take_pending_settle()
    }

    /// Inline style of the card at `index`
    pub fn card_style(&self, index: usize) -> Option<String> {
        let card = self.controller.card(index)?;
        let reveal = self.reveal.state(&RevealId::Card(index)).unwrap_or_default();
        Some(style::card_style(&card.presentation, reveal, &self.config))
    }

    /// Inline style of a reveal-only section, `None` if it is not observed
    pub fn section_style(&self, target: &RevealId) -> Option<String> {
        let reveal = self.reveal.state(target)?;
        Some(style::section_style(reveal, &self.config.reveal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageState {
        let catalog = SiteCatalog::from_json(
            r#"{
                "owner": { "name": "Ada" },
                "filters": [
                    { "label": "All", "value": "all" },
                    { "label": "Media", "value": "media" }
                ],
                "cards": [
                    { "title": "Talk", "category": "media" },
                    { "title": "Compiler", "category": "projects" }
                ],
                "contact": [ { "label": "Mail", "href": "mailto:ada@example.com" } ]
            }"#,
        )
        .unwrap();
        PageState::new(&catalog)
    }

    #[test]
    fn filter_click_changes_page() {
        let mut page = page();
        assert!(page.apply(PageEvent::FilterClicked(1)));
        assert_eq!(page.controller().visible_count(), 1);
        assert!(page.take_pending_settle().is_some());
    }

    #[test]
    fn unknown_control_click_changes_nothing() {
        let mut page = page();
        assert!(!page.apply(PageEvent::FilterClicked(7)));
        assert!(page.take_pending_settle().is_none());
    }

    #[test]
    fn scroll_changes_only_on_threshold_cross() {
        let mut page = page();
        assert!(!page.apply(PageEvent::Scrolled(20.0)));
        assert!(page.apply(PageEvent::Scrolled(80.0)));
        assert!(!page.apply(PageEvent::Scrolled(120.0)));
        assert_eq!(page.header().last_offset(), 120.0);
    }

    #[test]
    fn intersections_reveal_cards_and_contact() {
        let mut page = page();
        assert!(page.section_style(&RevealId::contact()).unwrap().starts_with("opacity: 0;"));

        let changed = page.apply(PageEvent::Intersected(vec![
            IntersectionEntry::new(RevealId::Card(0), true),
            IntersectionEntry::new(RevealId::contact(), true),
        ]));
        assert!(changed);
        assert!(page.card_style(0).unwrap().contains("opacity: 1;"));
        assert!(page.section_style(&RevealId::contact()).unwrap().starts_with("opacity: 1;"));
        assert!(page.card_style(1).unwrap().contains("opacity: 0;"));
    }

    #[test]
    fn settle_event_finishes_transition() {
        let mut page = page();
        page.apply(PageEvent::FilterClicked(0));
        let ticket = page.take_pending_settle().unwrap();

        assert!(page.apply(PageEvent::Settle(ticket.generation)));
        assert!(!page.apply(PageEvent::Settle(ticket.generation + 1)));
        assert!(page.controller().cards().iter().all(|c| c.presentation.is_settled()));
    }

    #[test]
    fn unknown_targets_have_no_style() {
        let page = page();
        assert!(page.card_style(5).is_none());
        assert!(page.section_style(&RevealId::Section("hero".to_string())).is_none());
    }
}
