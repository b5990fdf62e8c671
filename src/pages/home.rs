//! Home page - the whole portfolio on one scrolling page.
//!
//! Hero, filterable portfolio grid, contact section.

use dioxus::prelude::*;

use crate::components::{ContactSection, NavHeader, PageLink, ParticleContainer, PortfolioGrid};
use crate::context::use_catalog;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let owner = catalog.owner.clone();
    let has_contact = !catalog.contact.is_empty();
    let config = &catalog.page;

    rsx! {
        if config.particle_background {
            ParticleContainer { id: config.particle_container_id.clone() }
        }

        NavHeader { title: owner.name.clone(), has_contact: has_contact }

        main { class: "page",
            section { id: "top", class: "hero",
                h1 { class: "hero-title", "{owner.name}" }
                if !owner.tagline.is_empty() {
                    p { class: "hero-tagline", "{owner.tagline}" }
                }
                if !owner.about.is_empty() {
                    p { class: "hero-about", "{owner.about}" }
                }
                PageLink { href: "#portfolio".to_string(), class: "btn-primary".to_string(), "See my work" }
            }

            section { id: "portfolio", class: "portfolio-section",
                h2 { class: "section-title", "Portfolio" }
                PortfolioGrid {}
            }

            if has_contact {
                ContactSection {}
            }
        }

        footer { class: "footer",
            PageLink { href: "#top".to_string(), class: "footer-link".to_string(), "Back to top" }
        }
    }
}
