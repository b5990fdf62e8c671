//! Page configuration
//!
//! Every field has a default so the `page` object of the site content may be
//! omitted entirely or only override a few values.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;
use crate::particles::ParticleOptions;

/// Page-wide behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Whether the page renders the particle background container
    pub particle_background: bool,
    /// Id of the element hosting the particle background
    pub particle_container_id: String,
    /// Height of the sticky header; in-page scrolls stop this far above the target.
    /// Zero scrolls exactly to the target.
    pub header_offset: f64,
    /// Scroll offset past which the header gets its shadow
    pub shadow_threshold: f64,
    /// `box-shadow` value of the raised header
    pub shadow_css: String,
    pub reveal: RevealOptions,
    pub filter_transition: FilterTransition,
    pub particles: ParticleOptions,
    /// `tracing` level name (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            particle_background: true,
            particle_container_id: "particles-js".to_string(),
            header_offset: 80.0,
            shadow_threshold: 50.0,
            shadow_css: "0 2px 20px rgba(0, 0, 0, 0.3)".to_string(),
            reveal: RevealOptions::default(),
            filter_transition: FilterTransition::default(),
            particles: ParticleOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration object, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Log level for the host subscriber; unknown names fall back to `INFO`
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.trim()).unwrap_or(tracing::Level::INFO)
    }
}

/// Intersection observer settings for scroll reveal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible to count as intersecting
    pub threshold: f64,
    /// Observer root margin (CSS margin syntax)
    pub root_margin: String,
    /// Downward offset of hidden elements, in pixels
    pub offset_px: f64,
    /// CSS `transition` applied while revealing
    pub transition: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 20.0,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

/// Fade/scale settings for cards shown by a filter change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTransition {
    pub transient_opacity: f32,
    pub transient_scale: f32,
    /// Micro-delay before shown cards return to full opacity and scale
    pub settle_delay_ms: u32,
    /// CSS `transition` applied to filtered cards
    pub transition: String,
}

impl Default for FilterTransition {
    fn default() -> Self {
        Self {
            transient_opacity: 0.0,
            transient_scale: 0.8,
            settle_delay_ms: 10,
            transition: "opacity 0.3s ease, transform 0.3s ease".to_string(),
        }
    }
}

impl FilterTransition {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.settle_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PageConfig::default();
        assert!(config.particle_background);
        assert_eq!(config.particle_container_id, "particles-js");
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.shadow_threshold, 50.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{ "header_offset": 0, "reveal": { "offset_px": 40 } }"#)
            .unwrap();
        assert_eq!(config.header_offset, 0.0);
        assert_eq!(config.reveal.offset_px, 40.0);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.shadow_threshold, 50.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json(r#"{ "header_offset": "tall" }"#).is_err());
    }

    #[test]
    fn tracing_level_parsing() {
        let mut config = PageConfig::default();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);

        config.log_level = "debug".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        config.log_level = "loud".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn settle_delay_in_millis() {
        let transition = FilterTransition::default();
        assert_eq!(transition.settle_delay(), Duration::from_millis(10));
    }
}
