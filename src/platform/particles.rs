//! Particle background plugin bridge.

use anyhow::Context;
use portfolio_core::ParticleBackground;
use wasm_bindgen::{JsCast, JsValue};

use super::js_error;

/// Name of the global the particle script installs
const PLUGIN_GLOBAL: &str = "particlesJS";

/// Start the particle background if its container is on the page.
///
/// Returns whether the plugin was started. A missing container or a missing
/// plugin script is not an error.
pub fn init_particles(background: &mut ParticleBackground) -> anyhow::Result<bool> {
    let Some(window) = web_sys::window() else {
        return Ok(false);
    };
    let container_present = window
        .document()
        .and_then(|document| document.get_element_by_id(background.container_id()))
        .is_some();

    let Some(options) = background.begin(container_present) else {
        return Ok(false);
    };

    let plugin = js_sys::Reflect::get(&window, &JsValue::from_str(PLUGIN_GLOBAL)).map_err(js_error)?;
    let Some(plugin) = plugin.dyn_ref::<js_sys::Function>() else {
        tracing::warn!(global = PLUGIN_GLOBAL, "Particle plugin not loaded");
        return Ok(false);
    };

    let config = js_sys::JSON::parse(&options.to_string())
        .map_err(js_error)
        .context("Particle options are not valid JSON")?;
    plugin
        .call2(&JsValue::NULL, &JsValue::from_str(background.container_id()), &config)
        .map_err(js_error)
        .context("Particle plugin failed to start")?;

    tracing::debug!(container = background.container_id(), "Particle background started");
    Ok(true)
}
