//! Contact Section Component
//!
//! Closing section with contact links; fades in on first view.

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use portfolio_core::RevealId;

use crate::components::PageLink;
use crate::context::{use_catalog, use_page, use_reveal};

#[component]
pub fn ContactSection() -> Element {
    let catalog = use_catalog();
    let page = use_page();
    let reveal = use_reveal();

    let target = RevealId::contact();
    let style = page.read().section_style(&target).unwrap_or_default();

    rsx! {
        section {
            id: "contact",
            class: "contact-section",
            "data-reveal": "{target}",
            style: "{style}",
            onmounted: move |evt: MountedEvent| {
                if let Some(element) = evt.try_as_web_event() {
                    reveal.observe(&element);
                }
            },

            h2 { class: "section-title", "Contact" }
            ul { class: "contact-links",
                for link in catalog.contact.iter() {
                    li { key: "{link.href}",
                        PageLink {
                            href: link.href.clone(),
                            class: "contact-link".to_string(),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
