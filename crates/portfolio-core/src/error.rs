//! Error types for the portfolio page
//!
//! Page behavior itself never fails: a missing element is a valid state and
//! is handled as a no-op. Errors only arise while loading the embedded site
//! content and configuration.

use thiserror::Error;

/// Main error type for portfolio content loading
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Site content or configuration is not valid JSON for its schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Site content parsed but breaks a structural rule
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
