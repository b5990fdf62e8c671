//! Portfolio Card Component
//!
//! One entry of the portfolio grid. Visibility, fade and slide are driven
//! entirely by the inline style the page computes.

use dioxus::prelude::*;
use portfolio_core::CardContent;

/// Properties for the PortfolioCard component
#[derive(Clone, PartialEq, Props)]
pub struct PortfolioCardProps {
    /// Card content from the site catalog
    pub content: CardContent,
    /// Encoded reveal id (`data-reveal`)
    pub reveal_id: String,
    /// Inline style from the page state
    pub style: String,
    /// Called once the card element exists, so it can be observed
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// A card in the portfolio grid
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PortfolioCard {
///         content: card.clone(),
///         reveal_id: RevealId::Card(index).to_attr(),
///         style: page.read().card_style(index).unwrap_or_default(),
///     }
/// }
/// ```
#[component]
pub fn PortfolioCard(props: PortfolioCardProps) -> Element {
    let onmounted = props.onmounted;
    let content = &props.content;
    let label = category_label(&content.category);

    rsx! {
        article {
            class: "portfolio-card",
            "data-category": "{content.category}",
            "data-reveal": "{props.reveal_id}",
            style: "{props.style}",
            onmounted: move |evt| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },

            span { class: "card-category", "{label}" }
            h3 { class: "card-title", "{content.title}" }

            if !content.description.is_empty() {
                p { class: "card-description", "{content.description}" }
            }

            if !content.tags.is_empty() {
                ul { class: "card-tags",
                    for tag in content.tags.iter() {
                        li { class: "card-tag", "{tag}" }
                    }
                }
            }

            if let Some(link) = content.link.as_ref() {
                a {
                    class: "card-link",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View"
                }
            }
        }
    }
}

/// Display label of a category token (`"projects"` -> `"Projects"`)
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        assert_eq!(category_label("projects"), "Projects");
        assert_eq!(category_label("media"), "Media");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn card_markup_uses_core_attributes() {
        // rsx needs literal attribute names; keep them in step with core
        assert_eq!("data-category", portfolio_core::CATEGORY_ATTRIBUTE);
        assert_eq!("data-reveal", portfolio_core::REVEAL_ATTRIBUTE);
    }
}
