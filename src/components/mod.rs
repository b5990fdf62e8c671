//! UI Components for the portfolio page.

mod contact_section;
mod nav_header;
mod page_link;
mod particle_container;
mod portfolio_grid;

pub use contact_section::ContactSection;
pub use nav_header::NavHeader;
pub use page_link::PageLink;
pub use particle_container::ParticleContainer;
pub use portfolio_grid::PortfolioGrid;
