//! Intersection observer feeding scroll reveal.

use std::rc::Rc;

use anyhow::Context;
use portfolio_core::{IntersectionEntry, PageEvent, RevealId, RevealOptions, REVEAL_ATTRIBUTE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::js_error;
use crate::context::PageEvents;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes reveal targets and reports their intersections.
///
/// Targets are identified by their `data-reveal` attribute; elements
/// without a parsable one are ignored.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn new(options: &RevealOptions, events: PageEvents) -> anyhow::Result<Self> {
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let attr = entry.target().get_attribute(REVEAL_ATTRIBUTE)?;
                    let target = RevealId::parse(&attr)?;
                    Some(IntersectionEntry::new(target, entry.is_intersecting()))
                })
                .collect();
            if !batch.is_empty() {
                events.send(PageEvent::Intersected(batch));
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_error)
            .context("Failed to create IntersectionObserver")?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Shared handle to the page's reveal observer, provided through context.
///
/// Without an observer every target is revealed up front so nothing stays
/// invisible.
#[derive(Clone)]
pub struct RevealHandle(Option<Rc<RevealObserver>>);

impl RevealHandle {
    pub fn new(options: &RevealOptions, events: PageEvents, targets: Vec<RevealId>) -> Self {
        match RevealObserver::new(options, events.clone()) {
            Ok(observer) => Self(Some(Rc::new(observer))),
            Err(e) => {
                tracing::warn!(error = %e, "Scroll reveal unavailable, revealing everything");
                events.send(PageEvent::Intersected(IntersectionEntry::reveal_all(targets)));
                Self(None)
            }
        }
    }

    /// Start observing a mounted reveal target.
    pub fn observe(&self, element: &Element) {
        if let Some(observer) = &self.0 {
            observer.observe(element);
        }
    }
}
