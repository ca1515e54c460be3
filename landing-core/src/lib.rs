//! Landing Core - Page content and behavior
//!
//! This crate provides the domain side of the landing page:
//! - Static page copy (hero, feature grid, footer)
//! - Transient action indicator (self-reverting button state)
//! - Health snapshot computation

pub mod content;
pub mod health;
pub mod indicator;

// Re-exports for convenient access
pub use content::{FeatureEntry, FooterCopy, HeroCopy, FEATURES, FOOTER, HERO};
pub use health::{
    Environment, HealthContext, HealthReporter, HealthStatus, ParseEnvironmentError,
    DEFAULT_VERSION,
};
pub use indicator::{
    IndicatorConfig, IndicatorLabels, IndicatorState, NoRuntime, TransientIndicator, REVERT_DELAY,
};
