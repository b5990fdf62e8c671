//! Card presentation during filter changes
//!
//! A card that a filter change shows goes through two steps: it is made
//! visible with a transient (faded, shrunk) style, and after a short
//! micro-delay it settles back to full opacity and scale. The host schedules
//! the second step using the [`SettleTicket`] the controller hands out.

use std::time::Duration;

use crate::config::FilterTransition;

/// Inline presentation state of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPresentation {
    /// Whether the card takes part in layout (`display`)
    pub shown: bool,
    pub opacity: f32,
    pub scale: f32,
}

impl CardPresentation {
    /// Fully visible at rest
    pub fn settled() -> Self {
        Self {
            shown: true,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    /// Removed from layout
    pub fn hidden() -> Self {
        Self {
            shown: false,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    /// Visible but at the start of the fade/scale-in
    pub fn transient(transition: &FilterTransition) -> Self {
        Self {
            shown: true,
            opacity: transition.transient_opacity,
            scale: transition.transient_scale,
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == Self::settled()
    }
}

impl Default for CardPresentation {
    fn default() -> Self {
        Self::settled()
    }
}

/// A pending settle step for one filter change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    /// Filter generation the settle belongs to
    pub generation: u64,
    /// How long to wait before settling
    pub delay: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_uses_configured_values() {
        let transition = FilterTransition::default();
        let p = CardPresentation::transient(&transition);
        assert!(p.shown);
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.scale, 0.8);
        assert!(!p.is_settled());
    }

    #[test]
    fn hidden_is_not_shown() {
        assert!(!CardPresentation::hidden().shown);
        assert!(CardPresentation::default().is_settled());
    }
}
