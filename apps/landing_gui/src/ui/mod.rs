//! UI layer: app shell and the landing page sections.

pub mod app;
pub mod sections;

pub use app::LandingApp;
