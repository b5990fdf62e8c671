//! Smooth in-page scrolling
//!
//! Same-page links (`href` starting with `#`) are intercepted and the
//! viewport is scrolled smoothly so the target sits just below the sticky
//! header. The DOM is reached only through the [`Viewport`] and
//! [`ElementLocator`] capabilities.

use std::fmt;

/// Scroll position and smooth-scroll primitive of the page
pub trait Viewport {
    /// Current vertical scroll offset of the document
    fn scroll_offset(&self) -> f64;

    /// Animate the document scroll so its top edge is at `top`
    fn smooth_scroll_to(&self, top: f64);
}

/// Resolves link fragments to elements on the page
pub trait ElementLocator {
    /// Top edge of the element named by `fragment`, relative to the viewport
    ///
    /// `None` when no such element exists.
    fn viewport_top(&self, fragment: &Fragment) -> Option<f64>;
}

/// Element id named by a same-page link, without the leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a link's `href` relates to the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorLink {
    /// Does not start with `#`; navigation proceeds normally
    NotInPage,
    /// Exactly `#`
    Empty,
    /// `#name`
    Target(Fragment),
}

impl AnchorLink {
    pub fn classify(href: &str) -> Self {
        match href.strip_prefix('#') {
            None => AnchorLink::NotInPage,
            Some("") => AnchorLink::Empty,
            Some(name) => AnchorLink::Target(Fragment(name.to_string())),
        }
    }
}

/// Result of handling a link click
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// Not a same-page link; left to the browser
    NotInPage,
    /// `#` alone; swallowed without scrolling
    EmptyFragment,
    /// No element carries the fragment; swallowed without scrolling
    Unresolved(Fragment),
    /// Smooth scroll started towards `top`
    Scrolled { fragment: Fragment, top: f64 },
}

impl AnchorOutcome {
    /// Whether the browser's default navigation must be suppressed
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorOutcome::NotInPage)
    }
}

/// Smooth scroll handler for same-page links
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    /// Distance kept between the viewport top and the target; zero aligns exactly
    pub header_offset: f64,
}

impl SmoothScroll {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Scroll position placing an element at `element_top` (viewport-relative)
    /// just below the header, given the current `scroll_offset`
    pub fn target_top(&self, element_top: f64, scroll_offset: f64) -> f64 {
        element_top + scroll_offset - self.header_offset
    }

    /// Handle a click on a link with the given `href`
    pub fn handle_click<H>(&self, href: &str, host: &H) -> AnchorOutcome
    where
        H: Viewport + ElementLocator + ?Sized,
    {
        let fragment = match AnchorLink::classify(href) {
            AnchorLink::NotInPage => return AnchorOutcome::NotInPage,
            AnchorLink::Empty => return AnchorOutcome::EmptyFragment,
            AnchorLink::Target(fragment) => fragment,
        };

        let Some(element_top) = host.viewport_top(&fragment) else {
            tracing::debug!(target = %fragment, "Anchor target not found");
            return AnchorOutcome::Unresolved(fragment);
        };

        let top = self.target_top(element_top, host.scroll_offset());
        host.smooth_scroll_to(top);
        tracing::debug!(target = %fragment, top, "Smooth scrolling to anchor");
        AnchorOutcome::Scrolled { fragment, top }
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakePage {
        offset: f64,
        elements: HashMap<String, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakePage {
        fn new(offset: f64) -> Self {
            Self {
                offset,
                elements: HashMap::from([("contact".to_string(), 600.0)]),
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakePage {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    impl ElementLocator for FakePage {
        fn viewport_top(&self, fragment: &Fragment) -> Option<f64> {
            self.elements.get(fragment.as_str()).copied()
        }
    }

    #[test]
    fn classify_links() {
        assert_eq!(AnchorLink::classify("https://example.com"), AnchorLink::NotInPage);
        assert_eq!(AnchorLink::classify("/about#team"), AnchorLink::NotInPage);
        assert_eq!(AnchorLink::classify("#"), AnchorLink::Empty);
        assert_eq!(
            AnchorLink::classify("#portfolio"),
            AnchorLink::Target(Fragment("portfolio".to_string()))
        );
    }

    #[test]
    fn scrolls_below_header() {
        let page = FakePage::new(100.0);
        let outcome = SmoothScroll::default().handle_click("#contact", &page);

        assert_eq!(*page.scrolls.borrow(), vec![620.0]);
        assert!(outcome.prevents_default());
        assert!(matches!(outcome, AnchorOutcome::Scrolled { top, .. } if top == 620.0));
    }

    #[test]
    fn zero_offset_scrolls_exactly_to_element() {
        let page = FakePage::new(100.0);
        SmoothScroll::new(0.0).handle_click("#contact", &page);
        assert_eq!(*page.scrolls.borrow(), vec![700.0]);
    }

    #[test]
    fn unresolved_and_empty_fragments_do_not_scroll() {
        let page = FakePage::new(0.0);
        let scroll = SmoothScroll::default();

        let missing = scroll.handle_click("#nowhere", &page);
        let empty = scroll.handle_click("#", &page);

        assert!(matches!(missing, AnchorOutcome::Unresolved(_)));
        assert_eq!(empty, AnchorOutcome::EmptyFragment);
        assert!(missing.prevents_default());
        assert!(empty.prevents_default());
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn external_links_are_left_alone() {
        let page = FakePage::new(0.0);
        let outcome = SmoothScroll::default().handle_click("mailto:me@example.com", &page);
        assert_eq!(outcome, AnchorOutcome::NotInPage);
        assert!(!outcome.prevents_default());
        assert!(page.scrolls.borrow().is_empty());
    }
}
