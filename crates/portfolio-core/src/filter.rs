//! Filter controller for the portfolio card grid
//!
//! Holds the fixed set of filter controls and cards and recomputes card
//! visibility whenever a control is activated.
//!
//! ## Invariant
//!
//! After every recomputation the visible cards are exactly those whose
//! category equals the selected filter value, or every card when the value
//! is `"all"`. Before the first activation no control is active and every
//! card is visible.

use crate::config::FilterTransition;
use crate::transition::{CardPresentation, SettleTicket};
use crate::types::FilterValue;

/// A filter selector button
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    /// Text shown on the control
    pub label: String,
    /// Filter value the control activates
    pub filter_value: FilterValue,
    pub is_active: bool,
}

impl FilterControl {
    pub fn new(label: impl Into<String>, filter_value: impl Into<FilterValue>) -> Self {
        Self {
            label: label.into(),
            filter_value: filter_value.into(),
            is_active: false,
        }
    }
}

/// A card in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Classification tag compared against the filter value
    pub category: String,
    pub is_visible: bool,
    /// Inline style state driven by filter transitions
    pub presentation: CardPresentation,
}

impl Card {
    /// A visible, settled card
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            is_visible: true,
            presentation: CardPresentation::settled(),
        }
    }
}

/// Owns filter controls and cards and keeps their state consistent
#[derive(Debug, Clone)]
pub struct FilterController {
    controls: Vec<FilterControl>,
    cards: Vec<Card>,
    transition: FilterTransition,
    /// Bumped on every recomputation
    generation: u64,
    pending: Option<SettleTicket>,
}

impl FilterController {
    pub fn new(controls: Vec<FilterControl>, cards: Vec<Card>, transition: FilterTransition) -> Self {
        Self {
            controls,
            cards,
            transition,
            generation: 0,
            pending: None,
        }
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The active control, if any control has been activated
    pub fn active_control(&self) -> Option<&FilterControl> {
        self.controls.iter().find(|c| c.is_active)
    }

    /// Filter value of the active control
    pub fn active_value(&self) -> Option<&FilterValue> {
        self.active_control().map(|c| &c.filter_value)
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_visible).count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Activate the control at `index`, reading its filter value
    ///
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        let Some(control) = self.controls.get(index) else {
            tracing::debug!(index, "Ignoring activation of unknown filter control");
            return;
        };
        let value = control.filter_value.clone();
        self.select_filter(value.as_str());
    }

    /// Select `value` and recompute every card's visibility
    ///
    /// The first control carrying `value` becomes active and all others are
    /// deactivated; when no control carries it, no control stays active.
    /// Shown cards restart their fade/scale-in; the host picks up the settle
    /// step from [`FilterController::take_pending_settle`].
    pub fn select_filter(&mut self, value: &str) {
        let filter = FilterValue::new(value);

        let target = self.controls.iter().position(|c| c.filter_value == filter);
        for (i, control) in self.controls.iter_mut().enumerate() {
            control.is_active = Some(i) == target;
        }
        if target.is_none() {
            tracing::debug!(filter = %filter, "No filter control carries this value");
        }

        self.generation += 1;
        let mut visible = 0usize;
        for card in &mut self.cards {
            card.is_visible = filter.matches(&card.category);
            card.presentation = if card.is_visible {
                visible += 1;
                CardPresentation::transient(&self.transition)
            } else {
                CardPresentation::hidden()
            };
        }

        self.pending = Some(SettleTicket {
            generation: self.generation,
            delay: self.transition.settle_delay(),
        });

        tracing::debug!(
            filter = %filter,
            visible,
            total = self.cards.len(),
            generation = self.generation,
            "Applied filter"
        );
    }

    /// The settle step of the latest recomputation, if not yet taken
    pub fn pending_settle(&self) -> Option<SettleTicket> {
        self.pending
    }

    /// Take the settle step so the host can schedule it exactly once
    pub fn take_pending_settle(&mut self) -> Option<SettleTicket> {
        self.pending.take()
    }

    /// Bring shown cards to full opacity and scale
    ///
    /// Returns `false` and changes nothing when `generation` was superseded
    /// by a later recomputation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "Dropping stale settle");
            return false;
        }
        for card in self.cards.iter_mut().filter(|c| c.is_visible) {
            card.presentation = CardPresentation::settled();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FilterController {
        let controls = vec![
            FilterControl::new("All", "all"),
            FilterControl::new("Projects", "projects"),
            FilterControl::new("Teaching", "teaching"),
            FilterControl::new("Media", "media"),
        ];
        let cards = ["projects", "teaching", "projects", "media", "teaching"]
            .into_iter()
            .map(Card::new)
            .collect();
        FilterController::new(controls, cards, FilterTransition::default())
    }

    fn visible_categories(ctl: &FilterController) -> Vec<&str> {
        ctl.cards()
            .iter()
            .filter(|c| c.is_visible)
            .map(|c| c.category.as_str())
            .collect()
    }

    #[test]
    fn initial_state_has_no_active_control() {
        let ctl = controller();
        assert!(ctl.active_control().is_none());
        assert_eq!(ctl.visible_count(), 5);
        assert!(ctl.pending_settle().is_none());
    }

    #[test]
    fn select_category_shows_only_matching_cards() {
        let mut ctl = controller();
        ctl.select_filter("projects");

        assert_eq!(visible_categories(&ctl), vec!["projects", "projects"]);
        assert_eq!(ctl.active_value().map(FilterValue::as_str), Some("projects"));
        assert_eq!(ctl.controls().iter().filter(|c| c.is_active).count(), 1);
    }

    #[test]
    fn select_all_shows_everything() {
        let mut ctl = controller();
        ctl.select_filter("media");
        assert_eq!(ctl.visible_count(), 1);

        ctl.select_filter("all");
        assert_eq!(ctl.visible_count(), 5);
        assert!(ctl.controls()[0].is_active);
    }

    #[test]
    fn unknown_value_hides_all_cards_and_clears_active() {
        let mut ctl = controller();
        ctl.select_filter("teaching");
        ctl.select_filter("podcasts");

        assert_eq!(ctl.visible_count(), 0);
        assert!(ctl.active_control().is_none());
    }

    #[test]
    fn activate_reads_control_value() {
        let mut ctl = controller();
        ctl.activate(2);
        assert_eq!(visible_categories(&ctl), vec!["teaching", "teaching"]);
        assert!(ctl.controls()[2].is_active);
    }

    #[test]
    fn activate_out_of_range_is_noop() {
        let mut ctl = controller();
        ctl.activate(9);
        assert_eq!(ctl.generation(), 0);
        assert!(ctl.active_control().is_none());
    }

    #[test]
    fn duplicate_values_activate_first_control() {
        let controls = vec![
            FilterControl::new("Everything", "all"),
            FilterControl::new("All again", "all"),
        ];
        let mut ctl = FilterController::new(controls, vec![Card::new("x")], FilterTransition::default());
        ctl.activate(1);

        assert!(ctl.controls()[0].is_active);
        assert!(!ctl.controls()[1].is_active);
    }

    #[test]
    fn shown_cards_start_transient_then_settle() {
        let mut ctl = controller();
        ctl.select_filter("teaching");

        let ticket = ctl.take_pending_settle().unwrap();
        assert_eq!(ticket.generation, 1);
        assert!(ctl.take_pending_settle().is_none());

        let shown = ctl.card(1).unwrap();
        assert!(shown.presentation.shown);
        assert_eq!(shown.presentation.opacity, 0.0);
        assert_eq!(shown.presentation.scale, 0.8);
        assert!(!ctl.card(0).unwrap().presentation.shown);

        assert!(ctl.settle(ticket.generation));
        assert!(ctl.card(1).unwrap().presentation.is_settled());
        assert!(!ctl.card(0).unwrap().presentation.shown);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut ctl = controller();
        ctl.select_filter("teaching");
        let first = ctl.take_pending_settle().unwrap();
        ctl.select_filter("media");

        assert!(!ctl.settle(first.generation));
        assert!(!ctl.card(3).unwrap().presentation.is_settled());
    }
}
