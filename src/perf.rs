//! Performance monitoring utilities.
//!
//! Provides frame timing and scoped profiling instrumentation for the two hot
//! paths: pointer-move handling and frame replay.
//!
//! Enable the `profiling` cargo feature to activate the `profile_scope!`
//! instrumentation; without it the macro compiles to nothing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::warn;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (2.0 = warn if frame takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use inkboard::profile_scope;
///
/// fn handle_pointer_move() {
///     profile_scope!("handle_pointer_move");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether profiling is currently active.
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that logs the elapsed time of a scope when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn for_profiling(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::trace!(scope = self.name, elapsed_ms, "scope timing");
    }
}

/// Frame-time tracker with a rolling average.
///
/// The host records one sample per rendered frame; slow frames are logged.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    frame_times: VecDeque<Duration>,
    frame_count: u64,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the duration of one rendered frame.
    pub fn record_frame(&mut self, duration: Duration) {
        self.frame_count += 1;
        if self.frame_times.len() == SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(duration);

        let frame_ms = duration.as_secs_f64() * 1000.0;
        if frame_ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            warn!(frame_ms, target_ms = TARGET_FRAME_MS, "slow frame");
        }
    }

    /// Rolling average frame time in milliseconds, or 0.0 with no samples.
    pub fn average_frame_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().sum();
        total.as_secs_f64() * 1000.0 / self.frame_times.len() as f64
    }

    /// Frames per second implied by the rolling average.
    pub fn fps(&self) -> f64 {
        let avg = self.average_frame_ms();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    /// Total frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
