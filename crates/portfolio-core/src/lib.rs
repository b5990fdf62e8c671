//! Portfolio Page Core Library
//!
//! Host-independent behavior of the portfolio page: category filtering of the
//! card grid, scroll reveal, header shadow, smooth in-page scrolling and the
//! particle background options.
//!
//! ## Overview
//!
//! Nothing in this crate touches a browser. The host (the Dioxus web app)
//! owns a [`PageState`], feeds it [`PageEvent`]s coming from DOM listeners and
//! renders from what it reads back. Capabilities that need the DOM are
//! injected through the [`Viewport`] and [`ElementLocator`] traits.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{PageEvent, PageState, SiteCatalog};
//!
//! let catalog = SiteCatalog::from_json(include_str!("site.json"))?;
//! let mut page = PageState::new(&catalog);
//!
//! page.apply(PageEvent::FilterClicked(2));
//! for card in page.controller().cards() {
//!     println!("{}: {}", card.category, card.is_visible);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod header;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod style;
pub mod transition;
pub mod types;

// Re-exports
pub use catalog::{CardContent, ContactLink, FilterOption, Owner, SiteCatalog};
pub use config::{FilterTransition, PageConfig, RevealOptions};
pub use error::{PortfolioError, PortfolioResult};
pub use events::{PageEvent, PageState};
pub use filter::{Card, FilterControl, FilterController};
pub use header::{HeaderShadow, ShadowState};
pub use particles::{InteractionMode, ParticleBackground, ParticleOptions};
pub use reveal::{IntersectionEntry, RevealState, RevealTracker};
pub use scroll::{AnchorLink, AnchorOutcome, ElementLocator, Fragment, SmoothScroll, Viewport};
pub use style::{card_style, section_style};
pub use transition::{CardPresentation, SettleTicket};
pub use types::*;
