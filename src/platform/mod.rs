//! Browser capabilities for the page.
//!
//! Everything that touches `web_sys` lives here. Listeners and observers
//! forward what they see as [`PageEvent`]s; nothing in this module mutates
//! page state directly.

mod particles;
mod reveal;
mod viewport;

use gloo::timers::callback::Timeout;
use portfolio_core::{PageEvent, SettleTicket};
use wasm_bindgen::JsValue;

use crate::context::PageEvents;

pub use particles::init_particles;
pub use reveal::RevealHandle;
pub use viewport::{listen_scroll, WebViewport};

/// Deliver the settle step of a filter change after its micro-delay.
///
/// Fire-and-forget: the timeout is never cancelled, a superseded settle is
/// dropped by the page state.
pub fn schedule_settle(ticket: SettleTicket, events: PageEvents) {
    let millis = u32::try_from(ticket.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || {
        events.send(PageEvent::Settle(ticket.generation));
    })
    .forget();
}

/// Convert a thrown JS value into an error.
pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", value)
}
