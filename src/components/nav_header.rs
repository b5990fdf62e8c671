//! Navigation Header Component
//!
//! Sticky header with the owner's name and in-page section links.
//! Casts a shadow once the page is scrolled past the threshold.

use dioxus::prelude::*;

use crate::components::PageLink;
use crate::context::use_page;

/// Section of the page reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSection {
    Portfolio,
    Contact,
}

impl NavSection {
    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            NavSection::Portfolio => "Portfolio",
            NavSection::Contact => "Contact",
        }
    }

    /// Get the in-page link for this section
    pub fn href(&self) -> &'static str {
        match self {
            NavSection::Portfolio => "#portfolio",
            NavSection::Contact => "#contact",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Name shown on the left of the header
    pub title: String,
    /// Whether the contact section exists
    #[props(default = true)]
    pub has_contact: bool,
}

/// Navigation Header component
///
/// - Left: owner name, linking back to the top
/// - Right: section links with smooth scrolling
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let page = use_page();
    let box_shadow = page.read().header().box_shadow().to_string();

    let sections: Vec<NavSection> = [NavSection::Portfolio, NavSection::Contact]
        .into_iter()
        .filter(|s| props.has_contact || *s != NavSection::Contact)
        .collect();

    rsx! {
        header { class: "header", style: "box-shadow: {box_shadow};",
            div { class: "header-inner",
                PageLink { href: "#top".to_string(), class: "header-title".to_string(), "{props.title}" }

                nav { class: "nav-links",
                    for section in sections {
                        PageLink {
                            key: "{section.href()}",
                            href: section.href().to_string(),
                            class: "nav-link".to_string(),
                            "{section.display_name()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_links_are_in_page() {
        assert_eq!(NavSection::Portfolio.href(), "#portfolio");
        assert_eq!(NavSection::Contact.href(), "#contact");
        assert_eq!(NavSection::Contact.display_name(), "Contact");
    }
}
