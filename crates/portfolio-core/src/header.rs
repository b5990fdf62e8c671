//! Header shadow driven by the scroll offset

use crate::config::PageConfig;
use crate::scroll::Viewport;

/// Whether the header casts a shadow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowState {
    /// At (or near) the top of the page
    #[default]
    Flat,
    /// Scrolled past the threshold
    Raised,
}

/// Tracks the scroll offset and the header shadow it implies
#[derive(Debug, Clone)]
pub struct HeaderShadow {
    threshold: f64,
    raised_css: String,
    state: ShadowState,
    last_offset: f64,
}

impl HeaderShadow {
    pub fn new(threshold: f64, raised_css: impl Into<String>) -> Self {
        Self {
            threshold,
            raised_css: raised_css.into(),
            state: ShadowState::Flat,
            last_offset: 0.0,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.shadow_threshold, config.shadow_css.clone())
    }

    pub fn state(&self) -> ShadowState {
        self.state
    }

    /// Offset seen by the most recent scroll event
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// `box-shadow` value for the current state
    pub fn box_shadow(&self) -> &str {
        match self.state {
            ShadowState::Flat => "none",
            ShadowState::Raised => &self.raised_css,
        }
    }

    /// Record a scroll event at `offset`
    ///
    /// Returns the new state only when it differs from the previous one.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ShadowState> {
        self.last_offset = offset;
        let next = if offset > self.threshold {
            ShadowState::Raised
        } else {
            ShadowState::Flat
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        tracing::trace!(offset, state = ?next, "Header shadow changed");
        Some(next)
    }

    /// Read the offset from `viewport` and apply it
    pub fn sync<V: Viewport + ?Sized>(&mut self, viewport: &V) -> Option<ShadowState> {
        self.on_scroll(viewport.scroll_offset())
    }
}

impl Default for HeaderShadow {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedViewport(f64);

    impl Viewport for FixedViewport {
        fn scroll_offset(&self) -> f64 {
            self.0
        }

        fn smooth_scroll_to(&self, _top: f64) {}
    }

    #[test]
    fn raises_past_threshold() {
        let mut header = HeaderShadow::default();
        assert_eq!(header.on_scroll(10.0), None);
        assert_eq!(header.on_scroll(51.0), Some(ShadowState::Raised));
        assert_eq!(header.box_shadow(), "0 2px 20px rgba(0, 0, 0, 0.3)");
    }

    #[test]
    fn threshold_itself_is_flat() {
        let mut header = HeaderShadow::default();
        header.on_scroll(200.0);
        assert_eq!(header.on_scroll(50.0), Some(ShadowState::Flat));
        assert_eq!(header.box_shadow(), "none");
    }

    #[test]
    fn reports_only_changes() {
        let mut header = HeaderShadow::default();
        assert_eq!(header.on_scroll(300.0), Some(ShadowState::Raised));
        assert_eq!(header.on_scroll(400.0), None);
        assert_eq!(header.last_offset(), 400.0);
    }

    #[test]
    fn sync_reads_viewport() {
        let mut header = HeaderShadow::new(100.0, "0 1px 4px black");
        assert_eq!(header.sync(&FixedViewport(150.0)), Some(ShadowState::Raised));
        assert_eq!(header.box_shadow(), "0 1px 4px black");
    }
}
