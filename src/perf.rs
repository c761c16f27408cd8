//! Timing instrumentation for the engine's hot paths.
//!
//! Pointer moves arrive at display refresh rate, so frame application,
//! synchronization and fitting are instrumented with [`profile_scope!`]. The
//! macro compiles to nothing unless the `profiling` feature is enabled.
//!
//! ```ignore
//! fn apply_frame() {
//!     profile_scope!("apply_frame");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// One frame at 60 FPS; anything slower than this in a pointer handler stutters.
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Threshold used by [`profile_scope!`] timers.
const PROFILING_THRESHOLD_MS: f64 = 0.5;

/// Time a scope. Zero-cost when the `profiling` feature is off.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Logs the duration of a scope on drop if it exceeded a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the frame budget as threshold.
    pub fn with_frame_budget(name: &'static str) -> Self {
        Self::new(name, FRAME_BUDGET_MS)
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, PROFILING_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and log a warning if it exceeded `threshold_ms`.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
