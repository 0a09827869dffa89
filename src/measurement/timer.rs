//! Monotonic stopwatch used around every probe.
//!
//! Probes amortize sub-nanosecond instructions over millions of loop
//! iterations, so a wall-clock `Instant` is precise enough; what matters is
//! that it is monotonic and that reading it does not disturb the probe.

use std::time::{Duration, Instant};

/// Stopwatch with an explicit epoch.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    epoch: Instant,
}

impl Timer {
    /// Start a timer whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Mark a new epoch.
    #[inline]
    pub fn reset(&mut self) {
        self.epoch = Instant::now();
    }

    /// Time since the last reset. Does not move the epoch.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Time since the last reset, in nanoseconds.
    #[inline]
    pub fn elapsed_ns(&self) -> f64 {
        self.elapsed().as_nanos() as f64
    }

    /// Time since the last reset, in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1e3
    }

    /// Read the elapsed time and start a new epoch at the same instant.
    #[inline]
    pub fn read_and_reset(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.epoch);
        self.epoch = now;
        elapsed
    }

    /// Smallest nonzero step observed between consecutive clock reads.
    ///
    /// Spins until the clock advances, a handful of times, and keeps the
    /// minimum. Used by the preflight timer check.
    pub fn resolution_ns() -> f64 {
        const ROUNDS: usize = 64;

        let mut best = f64::INFINITY;
        for _ in 0..ROUNDS {
            let start = Instant::now();
            let mut now = Instant::now();
            while now == start {
                now = Instant::now();
            }
            let step = now.duration_since(start).as_nanos() as f64;
            if step < best {
                best = step;
            }
        }
        best
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::new();
        let a = timer.elapsed();
        let b = timer.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn test_reset_moves_epoch() {
        let mut timer = Timer::new();
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.elapsed() >= Duration::from_millis(5));
        timer.reset();
        assert!(timer.elapsed() < Duration::from_millis(5));
    }

    #[test]
    fn test_read_and_reset() {
        let mut timer = Timer::new();
        std::thread::sleep(Duration::from_millis(2));
        let first = timer.read_and_reset();
        assert!(first >= Duration::from_millis(2));
        assert!(timer.elapsed() < first);
    }

    #[test]
    fn test_resolution_is_sub_microsecond() {
        let res = Timer::resolution_ns();
        assert!(res > 0.0);
        assert!(res < 1_000.0, "clock resolution too coarse: {} ns", res);
    }
}
