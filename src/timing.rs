use std::time::{Duration, Instant};

/// Measures the wall-clock time taken by `operation`.
///
/// The monotonic clock is sampled immediately before and after the call;
/// the reported duration is the simple difference.
pub fn measure<F, R>(operation: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = operation();
    (result, start.elapsed())
}
