//! Filter Pills Component
//!
//! Horizontal row of filter controls above the portfolio grid.
//! The active pill carries the `active` class.

use dioxus::prelude::*;
use portfolio_core::FilterControl;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Filter controls in display order
    pub controls: Vec<FilterControl>,
    /// Handler called with the index of the clicked control
    pub on_activate: EventHandler<usize>,
}

/// Displays the filter controls as a row of pills
///
/// # Example
///
/// ```rust,ignore
/// let mut page = use_signal(|| PageState::new(&catalog));
///
/// rsx! {
///     FilterPills {
///         controls: page.read().controller().controls().to_vec(),
///         on_activate: move |index| {
///             page.write().apply(PageEvent::FilterClicked(index));
///         }
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-bar",
            role: "radiogroup",
            "aria-label": "Filter portfolio",
            for (index, control) in props.controls.iter().enumerate() {
                {
                    let on_activate = props.on_activate;
                    let is_active = control.is_active;
                    rsx! {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: pill_class(is_active),
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-filter": "{control.filter_value}",
                            onclick: move |_| {
                                tracing::trace!(index, "Filter pill clicked");
                                on_activate.call(index);
                            },
                            "{control.label}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS class of a filter pill
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}
