//! Window scroll position, smooth scrolling and element lookup.

use gloo::events::EventListener;
use portfolio_core::{ElementLocator, Fragment, PageEvent, Viewport};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::context::PageEvents;

/// The browser window as a [`Viewport`] and [`ElementLocator`].
pub struct WebViewport {
    window: Window,
    document: Document,
}

impl WebViewport {
    /// The current window, if running in a browser with a document.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Viewport for WebViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl ElementLocator for WebViewport {
    fn viewport_top(&self, fragment: &Fragment) -> Option<f64> {
        self.document
            .get_element_by_id(fragment.as_str())
            .map(|element| element.get_bounding_client_rect().top())
    }
}

/// Report every window scroll as [`PageEvent::Scrolled`].
///
/// The listener is removed when the returned handle is dropped.
pub fn listen_scroll(events: PageEvents) -> Option<EventListener> {
    let window = web_sys::window()?;
    let target = window.clone();
    let listener = EventListener::new(&target, "scroll", move |_event| {
        let offset = window.scroll_y().unwrap_or(0.0);
        events.send(PageEvent::Scrolled(offset));
    });
    Some(listener)
}
