//! Scroll reveal tracking
//!
//! Cards and sections start hidden (transparent and shifted down) and are
//! revealed the first time an intersection callback reports them inside the
//! viewport. A revealed target is never hidden again.

use std::collections::BTreeMap;

use crate::types::RevealId;

/// Visual state of a reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Initial state: opacity 0, shifted down
    #[default]
    Hidden,
    /// Final state: opacity 1, no offset
    Revealed,
}

impl RevealState {
    pub fn opacity(&self) -> f32 {
        match self {
            RevealState::Hidden => 0.0,
            RevealState::Revealed => 1.0,
        }
    }

    /// Vertical offset in pixels given the configured hidden offset
    pub fn translate_y(&self, offset_px: f64) -> f64 {
        match self {
            RevealState::Hidden => offset_px,
            RevealState::Revealed => 0.0,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// One record of an intersection callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: RevealId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: RevealId, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }

    /// Entries marking every target as intersecting, for hosts that
    /// cannot observe visibility
    pub fn reveal_all(targets: impl IntoIterator<Item = RevealId>) -> Vec<Self> {
        targets
            .into_iter()
            .map(|target| Self::new(target, true))
            .collect()
    }
}

/// Reveal state of every observed target
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: BTreeMap<RevealId, RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker with every target registered as hidden
    pub fn with_targets(targets: impl IntoIterator<Item = RevealId>) -> Self {
        let mut tracker = Self::new();
        for target in targets {
            tracker.register(target);
        }
        tracker
    }

    /// Start observing `target` in the hidden state
    ///
    /// Registering an already known target keeps its current state.
    pub fn register(&mut self, target: RevealId) {
        self.states.entry(target).or_default();
    }

    /// Current state of `target`, `None` if it is not observed
    pub fn state(&self, target: &RevealId) -> Option<RevealState> {
        self.states.get(target).copied()
    }

    pub fn is_revealed(&self, target: &RevealId) -> bool {
        self.state(target).is_some_and(|s| s.is_revealed())
    }

    /// Number of targets still waiting to be revealed
    pub fn pending_count(&self) -> usize {
        self.states.values().filter(|s| !s.is_revealed()).count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Apply one batch of intersection entries
    ///
    /// Returns the targets revealed by this batch, in entry order. Entries
    /// for unknown or already revealed targets and non-intersecting entries
    /// change nothing.
    pub fn observe(&mut self, entries: &[IntersectionEntry]) -> Vec<RevealId> {
        let mut revealed = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if let Some(state) = self.states.get_mut(&entry.target) {
                if !state.is_revealed() {
                    *state = RevealState::Revealed;
                    revealed.push(entry.target.clone());
                }
            }
        }
        if !revealed.is_empty() {
            tracing::debug!(
                revealed = revealed.len(),
                pending = self.pending_count(),
                "Revealed targets"
            );
        }
        revealed
    }
}
