//! In-page link with smooth scrolling.

use dioxus::prelude::*;
use portfolio_core::{AnchorOutcome, SmoothScroll};

use crate::context::use_page;
use crate::platform::WebViewport;

#[derive(Props, Clone, PartialEq)]
pub struct PageLinkProps {
    /// Link target; `#id` links scroll smoothly, anything else navigates
    pub href: String,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Anchor that intercepts same-page links and scrolls to the target
/// below the sticky header.
#[component]
pub fn PageLink(props: PageLinkProps) -> Element {
    let page = use_page();
    let href = props.href.clone();

    let on_click = move |evt: MouseEvent| {
        let scroll: SmoothScroll = page.peek().smooth_scroll();
        let outcome = match WebViewport::current() {
            Some(viewport) => scroll.handle_click(&href, &viewport),
            None => return,
        };
        if outcome.prevents_default() {
            evt.prevent_default();
        }
        if let AnchorOutcome::Unresolved(fragment) = &outcome {
            tracing::debug!(target = %fragment, "In-page link has no target");
        }
    };

    rsx! {
        a {
            class: props.class.as_deref().unwrap_or(""),
            href: "{props.href}",
            onclick: on_click,
            {props.children}
        }
    }
}
