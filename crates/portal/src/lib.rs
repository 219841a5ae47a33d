//! Portal crate for the content portal search.
//!
//! Ties the content index, the filter state and the search pipeline
//! together and produces the two page layouts: the landing page and the
//! results page.

pub mod config;
pub mod orchestrator;
pub mod views;

pub use config::{LandingConfig, PortalConfig};
pub use orchestrator::PortalOrchestrator;
pub use views::{LandingView, PortalView, ResultsView};
