use std::time::{Duration, Instant};

/// Fraction of `duration` elapsed since `start`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Interpolate between two column positions
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    let (from, to) = (from as f64, to as f64);
    (from + (to - from) * t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_both_directions() {
        assert_eq!(lerp_u16(0, 40, 0.5), 20);
        assert_eq!(lerp_u16(40, 0, 0.25), 30);
        assert_eq!(lerp_u16(7, 7, 0.9), 7);
    }

    #[test]
    fn test_zero_duration_is_done() {
        let start = Instant::now();
        assert_eq!(progress(start, Duration::ZERO), 1.0);
        assert!(is_complete(start, Duration::ZERO));
    }
}
