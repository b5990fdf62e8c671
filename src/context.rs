//! Page context provider for the portfolio.
//!
//! The page state is owned by a single task spawned in [`crate::app::App`].
//! Components read a published snapshot and report what happens through
//! [`PageEvents`].
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let events = use_page_events();
//!
//! events.send(PageEvent::FilterClicked(index));
//! let visible = page.read().controller().visible_count();
//! ```

use dioxus::prelude::*;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use portfolio_core::{PageEvent, PageState, SiteCatalog};

use crate::platform::{self, RevealHandle};

/// Sending half of the page event channel.
///
/// Cheap to clone; safe to use from DOM callbacks outside the component
/// runtime.
#[derive(Clone)]
pub struct PageEvents(UnboundedSender<PageEvent>);

impl PageEvents {
    pub fn new(tx: UnboundedSender<PageEvent>) -> Self {
        Self(tx)
    }

    pub fn send(&self, event: PageEvent) {
        if let Err(e) = self.0.unbounded_send(event) {
            tracing::warn!(error = %e, "Page event dropped");
        }
    }
}

/// Apply page events in arrival order and publish every change.
///
/// `state` is the only mutable page state; `page` receives a copy after
/// each event that changed something.
pub async fn run_page(
    mut rx: UnboundedReceiver<PageEvent>,
    events: PageEvents,
    mut state: PageState,
    mut page: Signal<PageState>,
) {
    while let Some(event) = rx.next().await {
        if !state.apply(event) {
            continue;
        }
        if let Some(ticket) = state.take_pending_settle() {
            platform::schedule_settle(ticket, events.clone());
        }
        page.set(state.clone());
    }
    tracing::debug!("Page event channel closed");
}

/// Hook to access the site content.
pub fn use_catalog() -> SiteCatalog {
    use_context::<SiteCatalog>()
}

/// Hook to access the latest page snapshot.
///
/// Reading it subscribes the component to page changes.
pub fn use_page() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to report page events.
pub fn use_page_events() -> PageEvents {
    use_context::<PageEvents>()
}

/// Hook to register reveal targets with the intersection observer.
pub fn use_reveal() -> RevealHandle {
    use_context::<RevealHandle>()
}
