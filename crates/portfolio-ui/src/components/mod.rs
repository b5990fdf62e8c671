//! Reusable portfolio components

mod filter_pills;
mod portfolio_card;

pub use filter_pills::*;
pub use portfolio_card::*;
