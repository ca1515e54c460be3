//! Health snapshot computation
//!
//! [`HealthReporter::report`] is a pure function of the current time and an
//! injected [`HealthContext`], so route handlers and tests share the same code
//! path. [`HealthReporter::report_now`] reads the wall clock and never hands out
//! a timestamp at or before the previous one.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Version reported when none is configured
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Fixed status token
pub const STATUS_HEALTHY: &str = "healthy";

/// Deployment mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Production,
        Environment::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown environment `{0}` (expected development, production or test)")]
pub struct ParseEnvironmentError(pub String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEnvironmentError(s.to_string()))
    }
}

/// Process-wide values the reporter reads
#[derive(Clone, Debug)]
pub struct HealthContext {
    pub started_at: Instant,
    pub environment: Environment,
    pub version: String,
}

impl HealthContext {
    pub fn new(environment: Environment, version: impl Into<String>) -> Self {
        Self {
            started_at: Instant::now(),
            environment,
            version: version.into(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for HealthContext {
    fn default() -> Self {
        Self::new(Environment::default(), DEFAULT_VERSION)
    }
}

/// Health inquiry response body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the process started
    pub uptime: f64,
    pub environment: Environment,
    pub version: String,
}

#[derive(Debug)]
pub struct HealthReporter {
    context: HealthContext,
    /// Nanoseconds since the epoch of the last timestamp handed out
    last_issued: AtomicI64,
}

impl HealthReporter {
    pub fn new(context: HealthContext) -> Self {
        Self {
            context,
            last_issued: AtomicI64::new(i64::MIN),
        }
    }

    /// Snapshot at `now`
    pub fn report(&self, now: DateTime<Utc>) -> HealthStatus {
        HealthStatus {
            status: STATUS_HEALTHY,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Nanos, true),
            uptime: self.context.uptime().as_secs_f64(),
            environment: self.context.environment,
            version: self.context.version.clone(),
        }
    }

    pub fn report_now(&self) -> HealthStatus {
        self.report(self.next_timestamp(Utc::now()))
    }

    /// `now`, bumped past the last issued timestamp when the clock has not moved
    fn next_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let Some(nanos) = now.timestamp_nanos_opt() else {
            return now;
        };

        let mut last = self.last_issued.load(Ordering::Acquire);
        loop {
            let next = nanos.max(last.saturating_add(1));
            match self.last_issued.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return DateTime::from_timestamp_nanos(next),
                Err(actual) => last = actual,
            }
        }
    }
}

impl Default for HealthReporter {
    fn default() -> Self {
        Self::new(HealthContext::default())
    }
}
