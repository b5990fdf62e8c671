//! Host element for the particle background.

use dioxus::prelude::*;

/// Empty full-page layer the particle plugin draws into.
#[component]
pub fn ParticleContainer(id: String) -> Element {
    rsx! {
        div { id: "{id}", class: "particles-bg", "aria-hidden": "true" }
    }
}
