//! Run metrics and logging setup.
//!
//! Provides structured logging and counters for monitoring a simulation run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for a single simulation run.
pub struct Metrics {
    step_count: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    defections: AtomicU64,
    last_step: Mutex<Duration>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("step_count", &self.step_count())
            .field("births", &self.births())
            .field("deaths", &self.deaths())
            .field("defections", &self.defections())
            .finish()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            defections: AtomicU64::new(0),
            last_step: Mutex::new(Duration::ZERO),
            start_time: Instant::now(),
        }
    }

    pub fn record_birth(&self) {
        self.births.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a completed step with its duration.
    pub fn record_step(&self, duration: Duration, living: usize, deaths: usize, defections: usize) {
        let step = self.step_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.deaths.fetch_add(deaths as u64, Ordering::Relaxed);
        self.defections
            .fetch_add(defections as u64, Ordering::Relaxed);
        *self.last_step.lock().unwrap_or_else(|e| e.into_inner()) = duration;

        tracing::debug!(
            step = step,
            living = living,
            deaths = deaths,
            defections = defections,
            duration_us = duration.as_micros() as u64,
            "Simulation step"
        );
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    /// Total defect decisions acted on across all steps.
    #[must_use]
    pub fn defections(&self) -> u64 {
        self.defections.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_step_duration(&self) -> Duration {
        *self.last_step.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` overrides `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
