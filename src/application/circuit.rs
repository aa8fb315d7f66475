//! Rolling-window circuit breaker selecting the operating mode.
//!
//! Three independent queues hold event timestamps (ms). Every query prunes
//! events older than the window and recomputes the mode from what is left.
//! There is no hysteresis: the mode flips back to FULL as soon as enough
//! events age out.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::OperatingMode;

/// Circuit breaker window and thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitConfig {
    #[serde(default = "default_window_ms")]
    pub window_ms: i64,
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,
    #[serde(default = "default_max_timeouts")]
    pub max_timeouts: usize,
    #[serde(default = "default_max_wide_spreads")]
    pub max_wide_spreads: usize,
}

fn default_window_ms() -> i64 {
    60_000
}

fn default_max_errors() -> usize {
    3
}

fn default_max_timeouts() -> usize {
    2
}

fn default_max_wide_spreads() -> usize {
    2
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_errors: default_max_errors(),
            max_timeouts: default_max_timeouts(),
            max_wide_spreads: default_max_wide_spreads(),
        }
    }
}

/// Observed failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitEvent {
    Error,
    Timeout,
    WideSpread,
}

/// Events currently inside the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CircuitCounts {
    pub errors: usize,
    pub timeouts: usize,
    pub wide_spreads: usize,
}

/// Single-owner circuit breaker state.
#[derive(Debug, Clone)]
pub struct CircuitBreaker {
    config: CircuitConfig,
    errors: VecDeque<i64>,
    timeouts: VecDeque<i64>,
    wide_spreads: VecDeque<i64>,
}

impl CircuitBreaker {
    #[must_use]
    pub fn new(config: CircuitConfig) -> Self {
        Self {
            config,
            errors: VecDeque::new(),
            timeouts: VecDeque::new(),
            wide_spreads: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CircuitConfig {
        &self.config
    }

    pub fn record(&mut self, event: CircuitEvent, now_ms: i64) {
        match event {
            CircuitEvent::Error => self.errors.push_back(now_ms),
            CircuitEvent::Timeout => self.timeouts.push_back(now_ms),
            CircuitEvent::WideSpread => self.wide_spreads.push_back(now_ms),
        }
    }

    pub fn record_error(&mut self, now_ms: i64) {
        self.record(CircuitEvent::Error, now_ms);
    }

    pub fn record_timeout(&mut self, now_ms: i64) {
        self.record(CircuitEvent::Timeout, now_ms);
    }

    pub fn record_wide_spread(&mut self, now_ms: i64) {
        self.record(CircuitEvent::WideSpread, now_ms);
    }

    fn prune(&mut self, now_ms: i64) {
        let window = self.config.window_ms;
        for queue in [&mut self.errors, &mut self.timeouts, &mut self.wide_spreads] {
            while queue.front().is_some_and(|&ts| now_ms - ts > window) {
                queue.pop_front();
            }
        }
    }

    /// Events inside the window at `now_ms`.
    pub fn counts(&mut self, now_ms: i64) -> CircuitCounts {
        self.prune(now_ms);
        CircuitCounts {
            errors: self.errors.len(),
            timeouts: self.timeouts.len(),
            wide_spreads: self.wide_spreads.len(),
        }
    }

    /// Whether any queue is at or above its threshold at `now_ms`.
    pub fn should_degrade(&mut self, now_ms: i64) -> bool {
        let counts = self.counts(now_ms);
        counts.errors >= self.config.max_errors
            || counts.timeouts >= self.config.max_timeouts
            || counts.wide_spreads >= self.config.max_wide_spreads
    }

    /// Operating mode recomputed from the current window.
    pub fn next_mode(&mut self, now_ms: i64) -> OperatingMode {
        if self.should_degrade(now_ms) {
            OperatingMode::EtfOnly
        } else {
            OperatingMode::Full
        }
    }

    /// Clear all queues.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.timeouts.clear();
        self.wide_spreads.clear();
    }
}

/// Circuit breaker shared between concurrent callers.
///
/// Prune-then-compare is not safe under interleaving, so every operation
/// takes the lock for its whole duration.
#[derive(Debug, Clone)]
pub struct SharedCircuitBreaker {
    inner: Arc<Mutex<CircuitBreaker>>,
}

impl SharedCircuitBreaker {
    #[must_use]
    pub fn new(config: CircuitConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CircuitBreaker::new(config))),
        }
    }

    pub fn record(&self, event: CircuitEvent, now_ms: i64) {
        warn!(event = ?event, now_ms, "Circuit breaker event recorded");
        self.inner.lock().record(event, now_ms);
    }

    pub fn next_mode(&self, now_ms: i64) -> OperatingMode {
        self.inner.lock().next_mode(now_ms)
    }

    pub fn counts(&self, now_ms: i64) -> CircuitCounts {
        self.inner.lock().counts(now_ms)
    }

    pub fn reset(&self) {
        info!("Resetting circuit breaker");
        self.inner.lock().reset();
    }
}
