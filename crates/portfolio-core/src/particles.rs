//! Decorative particle background
//!
//! The particle plugin is an external script; this module only owns its
//! static options and the "initialize once, only if the container exists"
//! rule.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Pointer interaction mode understood by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Grab,
    Bubble,
    Repulse,
    Push,
    Remove,
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Grab => "grab",
            InteractionMode::Bubble => "bubble",
            InteractionMode::Repulse => "repulse",
            InteractionMode::Push => "push",
            InteractionMode::Remove => "remove",
        }
    }
}

/// Static options handed to the particle plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleOptions {
    /// Number of particles per density area
    pub count: u32,
    pub density_area: u32,
    pub color: String,
    pub opacity: f64,
    pub size: f64,
    /// Maximum distance at which two particles are linked by a line
    pub link_distance: f64,
    pub link_opacity: f64,
    pub link_width: f64,
    pub speed: f64,
    pub hover_mode: InteractionMode,
    pub click_mode: InteractionMode,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 80,
            density_area: 800,
            color: "#ffffff".to_string(),
            opacity: 0.5,
            size: 3.0,
            link_distance: 150.0,
            link_opacity: 0.4,
            link_width: 1.0,
            speed: 2.0,
            hover_mode: InteractionMode::Repulse,
            click_mode: InteractionMode::Push,
        }
    }
}

impl ParticleOptions {
    /// Options object in the plugin's own schema
    pub fn to_plugin_json(&self) -> Value {
        json!({
            "particles": {
                "number": {
                    "value": self.count,
                    "density": { "enable": true, "value_area": self.density_area }
                },
                "color": { "value": self.color },
                "shape": { "type": "circle" },
                "opacity": { "value": self.opacity, "random": false },
                "size": { "value": self.size, "random": true },
                "line_linked": {
                    "enable": true,
                    "distance": self.link_distance,
                    "color": self.color,
                    "opacity": self.link_opacity,
                    "width": self.link_width
                },
                "move": {
                    "enable": true,
                    "speed": self.speed,
                    "direction": "none",
                    "random": false,
                    "straight": false,
                    "out_mode": "out",
                    "bounce": false
                }
            },
            "interactivity": {
                "detect_on": "canvas",
                "events": {
                    "onhover": { "enable": true, "mode": self.hover_mode.as_str() },
                    "onclick": { "enable": true, "mode": self.click_mode.as_str() },
                    "resize": true
                },
                "modes": {
                    "grab": { "distance": 140, "line_linked": { "opacity": 1 } },
                    "repulse": { "distance": 100, "duration": 0.4 },
                    "push": { "particles_nb": 4 },
                    "remove": { "particles_nb": 2 }
                }
            },
            "retina_detect": true
        })
    }
}

/// Once-only initialization guard for the particle background
#[derive(Debug, Clone)]
pub struct ParticleBackground {
    container_id: String,
    options: ParticleOptions,
    initialized: bool,
}

impl ParticleBackground {
    pub fn new(container_id: impl Into<String>, options: ParticleOptions) -> Self {
        Self {
            container_id: container_id.into(),
            options,
            initialized: false,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Claim the one initialization when the container is present
    ///
    /// Returns the plugin options exactly once; later calls and calls
    /// without a container return `None`.
    pub fn begin(&mut self, container_present: bool) -> Option<Value> {
        if self.initialized {
            return None;
        }
        if !container_present {
            tracing::debug!(container = %self.container_id, "No particle container, skipping background");
            return None;
        }
        self.initialized = true;
        Some(self.options.to_plugin_json())
    }
}
