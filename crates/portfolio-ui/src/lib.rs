//! Portfolio UI Components
//!
//! Dioxus components for the portfolio page. Components only render state
//! owned by `portfolio-core` and report clicks back through event handlers;
//! they never mutate page state themselves.
//!
//! ## Markup Contract
//!
//! - filter controls carry `data-filter` with their filter value
//! - cards carry `data-category` with their category
//! - reveal targets carry `data-reveal` with their reveal id

pub mod components;

pub use components::*;
