//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod history;
pub mod settings;

pub use dashboard::Dashboard;
pub use history::History;
pub use settings::Settings;
