//! Minimum-interval gate for feeding frames into inference.

use std::time::{Duration, Instant};

/// Drops calls that arrive less than one interval after the last accepted
/// call.
///
/// The post-processing pipeline is cheap enough to run on every frame; this
/// gate exists so a caller can spare the upstream inference step, which is
/// not. The first call is always accepted. Not part of the pipeline's
/// correctness contract.
#[derive(Debug)]
pub struct Throttler {
    interval: Duration,
    last_run: Option<Instant>,
}

impl Throttler {
    /// Creates a gate that accepts at most one call per `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Runs `f` and records the time if the interval has elapsed.
    ///
    /// Returns `None` when the call is dropped; the last-accepted timestamp
    /// is only updated on accepted calls.
    pub fn try_run<T, F: FnOnce() -> T>(&mut self, f: F) -> Option<T> {
        let now = Instant::now();
        if let Some(last) = self.last_run {
            if now.duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_run = Some(now);
        Some(f())
    }
}

#[cfg(test)]
mod tests {
    use super::Throttler;
    use std::time::Duration;

    #[test]
    fn first_call_is_accepted() {
        let mut throttler = Throttler::new(Duration::from_secs(60));
        assert_eq!(throttler.try_run(|| 1), Some(1));
    }

    #[test]
    fn second_call_within_interval_is_dropped() {
        let mut throttler = Throttler::new(Duration::from_secs(60));
        assert_eq!(throttler.try_run(|| 1), Some(1));
        assert_eq!(throttler.try_run(|| 2), None);
    }

    #[test]
    fn zero_interval_accepts_every_call() {
        let mut throttler = Throttler::new(Duration::ZERO);
        assert_eq!(throttler.try_run(|| 1), Some(1));
        assert_eq!(throttler.try_run(|| 2), Some(2));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_interval() {
        let mut throttler = Throttler::new(Duration::from_millis(20));
        assert!(throttler.try_run(|| ()).is_some());
        assert!(throttler.try_run(|| ()).is_none());
        std::thread::sleep(Duration::from_millis(30));
        assert!(throttler.try_run(|| ()).is_some());
    }
}
