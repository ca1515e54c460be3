//! Server state management
//!
//! Read-only values shared by every request.

use landing_core::{HealthReporter, IndicatorConfig};

/// Server-wide shared state
#[derive(Debug, Default)]
pub struct AppState {
    pub health: HealthReporter,
    /// Configuration for the indicator each rendered page starts with
    pub indicator: IndicatorConfig,
}

impl AppState {
    pub fn new(health: HealthReporter) -> Self {
        Self {
            health,
            indicator: IndicatorConfig::default(),
        }
    }

    pub fn with_indicator(mut self, indicator: IndicatorConfig) -> Self {
        self.indicator = indicator;
        self
    }
}
