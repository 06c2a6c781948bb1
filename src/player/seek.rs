use std::time::Duration;

/// Convert a normalized seek request into an absolute offset in the track.
///
/// Any finite fraction outside `[0, 1]` clamps to the nearest bound; NaN is
/// treated as the start of the track. The result is always within
/// `[0, duration]`.
pub(super) fn resolve_target(fraction: f64, duration: Duration) -> Duration {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction };
    let fraction = fraction.clamp(0.0, 1.0);
    Duration::from_secs_f64(duration.as_secs_f64() * fraction)
}
