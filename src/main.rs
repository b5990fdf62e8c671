#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use portfolio_core::SiteCatalog;

/// Site content and page configuration, compiled into the binary
const SITE_JSON: &str = include_str!("../content/site.json");

fn main() {
    let catalog = match SiteCatalog::from_json(SITE_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            init_logging(tracing::Level::INFO);
            tracing::error!("Failed to load site content: {}", e);
            return;
        }
    };

    init_logging(catalog.page.tracing_level());

    tracing::info!(
        owner = %catalog.owner.name,
        cards = catalog.cards.len(),
        filters = catalog.filters.len(),
        "Starting portfolio page"
    );

    dioxus::LaunchBuilder::web()
        .with_context(catalog)
        .launch(app::App);
}

/// Route `tracing` output to the browser console
#[cfg(target_arch = "wasm32")]
fn init_logging(level: tracing::Level) {
    if let Err(e) = dioxus::logger::init(level) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
}

/// Route `tracing` output to stderr, honoring `RUST_LOG`
#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: tracing::Level) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_is_valid() {
        let catalog = SiteCatalog::from_json(SITE_JSON).expect("site.json must validate");
        assert!(!catalog.cards.is_empty());
        assert_eq!(catalog.reveal_targets().len(), catalog.cards.len() + 1);
    }

    #[test]
    fn every_card_category_has_a_filter() {
        let catalog = SiteCatalog::from_json(SITE_JSON).unwrap();
        for category in catalog.categories() {
            assert!(
                catalog.filters.iter().any(|f| f.value.as_str() == category),
                "no filter for {}",
                category
            );
        }
    }
}
