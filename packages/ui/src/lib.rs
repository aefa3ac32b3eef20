//! This crate contains all shared UI for the workspace.

pub mod views;

mod service;
pub use service::{use_api_config, use_student_service, ApiProvider};

mod style;
pub use style::ListStyle;

mod navbar;
pub use navbar::Navbar;

mod health_indicator;
pub use health_indicator::{Health, HealthIndicator};
