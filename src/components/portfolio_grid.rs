//! Portfolio Grid Component
//!
//! Filter pills above a grid of cards. Card visibility, the filter
//! transition and the scroll reveal all come from the page snapshot.

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use portfolio_core::{PageEvent, RevealId};
use portfolio_ui::{FilterPills, PortfolioCard};

use crate::context::{use_catalog, use_page, use_page_events, use_reveal};

#[component]
pub fn PortfolioGrid() -> Element {
    let catalog = use_catalog();
    let page = use_page();
    let events = use_page_events();
    let reveal = use_reveal();

    let snapshot = page.read();
    let controls = snapshot.controller().controls().to_vec();
    let visible = snapshot.controller().visible_count();

    let on_activate = move |index: usize| {
        events.send(PageEvent::FilterClicked(index));
    };

    rsx! {
        FilterPills { controls: controls, on_activate: on_activate }

        div { id: "portfolioGrid", class: "portfolio-grid",
            for (index, content) in catalog.cards.iter().enumerate() {
                {
                    let reveal = reveal.clone();
                    rsx! {
                        PortfolioCard {
                            key: "{index}",
                            content: content.clone(),
                            reveal_id: RevealId::Card(index).to_attr(),
                            style: snapshot.card_style(index).unwrap_or_default(),
                            onmounted: move |evt: MountedEvent| {
                                if let Some(element) = evt.try_as_web_event() {
                                    reveal.observe(&element);
                                }
                            },
                        }
                    }
                }
            }
        }

        if visible == 0 {
            p { class: "portfolio-empty", "Nothing here yet." }
        }
    }
}
