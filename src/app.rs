use std::rc::Rc;

use dioxus::prelude::*;
use futures::channel::mpsc;
use portfolio_core::{PageEvent, PageState, ParticleBackground, Viewport};

use crate::context::{run_page, use_catalog, PageEvents};
use crate::pages::Home;
use crate::platform::{self, RevealHandle, WebViewport};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and page context, and binds every window-level
/// listener once for the lifetime of the page.
#[component]
pub fn App() -> Element {
    let catalog = use_catalog();
    let page: Signal<PageState> = use_signal(|| PageState::new(&catalog));

    // Single owner of page state, fed through the event channel
    let events = use_hook(|| {
        let (tx, rx) = mpsc::unbounded();
        let events = PageEvents::new(tx);
        spawn(run_page(rx, events.clone(), PageState::new(&catalog), page));
        events
    });

    let reveal = use_hook(|| {
        RevealHandle::new(&catalog.page.reveal, events.clone(), catalog.reveal_targets())
    });

    use_context_provider(|| page);
    use_context_provider(|| events.clone());
    use_context_provider(|| reveal);

    // Dropping the listener would unbind it
    use_hook(|| platform::listen_scroll(events.clone()).map(Rc::new));

    let mut particles = use_signal(|| {
        ParticleBackground::new(
            catalog.page.particle_container_id.clone(),
            catalog.page.particles.clone(),
        )
    });

    // After the first render: sync the header with a restored scroll
    // position and start the particle background
    let startup_events = events.clone();
    use_effect(move || {
        if let Some(viewport) = WebViewport::current() {
            startup_events.send(PageEvent::Scrolled(viewport.scroll_offset()));
        }
        match platform::init_particles(&mut particles.write()) {
            Ok(started) => tracing::debug!(started, "Particle background checked"),
            Err(e) => tracing::warn!(error = %e, "Particle background failed"),
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
