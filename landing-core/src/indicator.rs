//! Transient action indicator
//!
//! A two-state control label. Activating it shows the confirmation text and
//! schedules one reversion to the default text after a fixed delay. Activating
//! again before the delay elapses supersedes the pending reversion, so exactly
//! one reversion fires, `delay` after the most recent activation.
//!
//! States and transitions:
//! - `Default --activate--> Activated`
//! - `Activated --activate--> Activated` (timer restarted)
//! - `Activated --timeout--> Default`

use serde::{Serialize, Serializer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Delay between the latest activation and the reversion
pub const REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Displayed state of the indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndicatorState {
    #[default]
    Default,
    Activated,
}

impl IndicatorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorState::Default => "default",
            IndicatorState::Activated => "activated",
        }
    }
}

impl Serialize for IndicatorState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned by [`TransientIndicator::activate`] when no tokio runtime is
/// available to run the reversion timer
#[derive(Debug, Error, PartialEq, Eq)]
#[error("indicator activation requires a running tokio runtime")]
pub struct NoRuntime;

/// Text shown for each state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorLabels {
    pub default: String,
    pub confirmation: String,
}

impl IndicatorLabels {
    pub fn for_state(&self, state: IndicatorState) -> &str {
        match state {
            IndicatorState::Default => &self.default,
            IndicatorState::Activated => &self.confirmation,
        }
    }
}

impl Default for IndicatorLabels {
    fn default() -> Self {
        Self {
            default: "Get Started Today".to_string(),
            confirmation: "Thanks for clicking!".to_string(),
        }
    }
}

/// Indicator configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorConfig {
    pub labels: IndicatorLabels,
    pub delay: Duration,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            labels: IndicatorLabels::default(),
            delay: REVERT_DELAY,
        }
    }
}

/// Self-reverting two-state label
///
/// The pending reversion is a spawned tokio task owned through its
/// `JoinHandle`. It is aborted on re-activation and when the indicator is
/// dropped.
#[derive(Debug)]
pub struct TransientIndicator {
    config: IndicatorConfig,
    state: Arc<watch::Sender<IndicatorState>>,
    /// Bumped on every activation; a reversion only applies to its own one.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl TransientIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        let (state, _) = watch::channel(IndicatorState::Default);
        Self {
            config,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn state(&self) -> IndicatorState {
        *self.state.borrow()
    }

    /// Text for the current state
    pub fn label(&self) -> &str {
        self.config.labels.for_state(self.state())
    }

    /// Whether a reversion is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<IndicatorState> {
        self.state.subscribe()
    }

    /// Switch to the confirmation label and (re)start the reversion timer
    ///
    /// Outside a tokio runtime nothing changes and [`NoRuntime`] is returned,
    /// so the indicator never shows the confirmation without a reversion.
    pub fn activate(&mut self) -> Result<(), NoRuntime> {
        let runtime = Handle::try_current().map_err(|_| {
            tracing::warn!("indicator activated outside a tokio runtime");
            NoRuntime
        })?;

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_replace(IndicatorState::Activated);
        tracing::debug!(
            generation,
            delay_ms = self.config.delay.as_millis() as u64,
            "indicator activated"
        );

        // Deadline is fixed here, not when the task is first polled.
        let sleep = tokio::time::sleep(self.config.delay);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);

        self.pending = Some(runtime.spawn(async move {
            sleep.await;
            let reverted = state.send_if_modified(|value| {
                let superseded = current.load(Ordering::Acquire) != generation;
                if superseded || *value == IndicatorState::Default {
                    return false;
                }
                *value = IndicatorState::Default;
                true
            });
            if reverted {
                tracing::debug!(generation, "indicator reverted");
            }
        }));
        Ok(())
    }
}

impl Default for TransientIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl Drop for TransientIndicator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
