/// Instrumentation for the depth pre-pass
/// Counts draws, primitives and per-pixel depth tests so benches can report
/// how much work the occlusion buffer is actually doing.
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for draw and pixel tracking
pub struct FunctionCounters {
    // Assembler counters
    pub draw_calls: AtomicU64,
    pub draws_skipped: AtomicU64,

    // Primitive counters
    pub rects_filled: AtomicU64,
    pub triangles_submitted: AtomicU64,
    pub triangles_culled: AtomicU64,
    pub triangles_behind: AtomicU64,
    pub triangles_off_scissor: AtomicU64,

    // Pixel counters
    pub pixels_tested: AtomicU64,
    pub depth_passed: AtomicU64,
    pub depth_failed: AtomicU64,

    // Buffer counters
    pub buffer_clears: AtomicU64,
}

impl FunctionCounters {
    pub const fn new() -> Self {
        Self {
            draw_calls: AtomicU64::new(0),
            draws_skipped: AtomicU64::new(0),
            rects_filled: AtomicU64::new(0),
            triangles_submitted: AtomicU64::new(0),
            triangles_culled: AtomicU64::new(0),
            triangles_behind: AtomicU64::new(0),
            triangles_off_scissor: AtomicU64::new(0),
            pixels_tested: AtomicU64::new(0),
            depth_passed: AtomicU64::new(0),
            depth_failed: AtomicU64::new(0),
            buffer_clears: AtomicU64::new(0),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        for counter in self.all() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    fn all(&self) -> [&AtomicU64; 11] {
        [
            &self.draw_calls,
            &self.draws_skipped,
            &self.rects_filled,
            &self.triangles_submitted,
            &self.triangles_culled,
            &self.triangles_behind,
            &self.triangles_off_scissor,
            &self.pixels_tested,
            &self.depth_passed,
            &self.depth_failed,
            &self.buffer_clears,
        ]
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            draw_calls: self.draw_calls.load(Ordering::Relaxed),
            draws_skipped: self.draws_skipped.load(Ordering::Relaxed),
            rects_filled: self.rects_filled.load(Ordering::Relaxed),
            triangles_submitted: self.triangles_submitted.load(Ordering::Relaxed),
            triangles_culled: self.triangles_culled.load(Ordering::Relaxed),
            triangles_behind: self.triangles_behind.load(Ordering::Relaxed),
            triangles_off_scissor: self.triangles_off_scissor.load(Ordering::Relaxed),
            pixels_tested: self.pixels_tested.load(Ordering::Relaxed),
            depth_passed: self.depth_passed.load(Ordering::Relaxed),
            depth_failed: self.depth_failed.load(Ordering::Relaxed),
            buffer_clears: self.buffer_clears.load(Ordering::Relaxed),
        }
    }
}

impl Default for FunctionCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of counter values at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub draw_calls: u64,
    pub draws_skipped: u64,
    pub rects_filled: u64,
    pub triangles_submitted: u64,
    pub triangles_culled: u64,
    pub triangles_behind: u64,
    pub triangles_off_scissor: u64,
    pub pixels_tested: u64,
    pub depth_passed: u64,
    pub depth_failed: u64,
    pub buffer_clears: u64,
}

impl CounterSnapshot {
    /// Print formatted report
    pub fn print_report(&self) {
        println!("\n=== Depth Raster Counters Report ===");
        println!("\nDraws:");
        println!("  draw calls:                 {:12}", self.draw_calls);
        println!("  draws skipped:              {:12}", self.draws_skipped);

        println!("\nPrimitives:");
        println!("  rects filled:               {:12}", self.rects_filled);
        println!("  triangles submitted:        {:12}", self.triangles_submitted);
        println!("  triangles culled (area):    {:12}", self.triangles_culled);
        println!("  triangles behind camera:    {:12}", self.triangles_behind);
        println!("  triangles off scissor:      {:12}", self.triangles_off_scissor);

        println!("\nPixels:");
        println!("  pixels tested:              {:12}", self.pixels_tested);
        println!("  depth test passed:          {:12}", self.depth_passed);
        println!("  depth test failed:          {:12}", self.depth_failed);
        if self.pixels_tested > 0 {
            let pass_rate = (self.depth_passed as f64 / self.pixels_tested as f64) * 100.0;
            println!("  depth test pass rate:       {:11.2}%", pass_rate);
        }

        println!("\nBuffers:");
        println!("  depth buffer clears:        {:12}", self.buffer_clears);

        println!();
    }
}

/// Global function counters instance
pub static FUNCTION_COUNTERS: FunctionCounters = FunctionCounters::new();

/// Increment a counter field of `FUNCTION_COUNTERS` (only when the profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($field:ident) => {
        #[cfg(feature = "profiling")]
        {
            $crate::perf::FUNCTION_COUNTERS
                .$field
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Add to a counter field of `FUNCTION_COUNTERS` (only when the profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($field:ident, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $crate::perf::FUNCTION_COUNTERS
                .$field
                .fetch_add(($value) as u64, std::sync::atomic::Ordering::Relaxed);
        }
    };
}
