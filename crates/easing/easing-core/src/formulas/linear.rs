/// Constant-velocity motion from `start_value` to `start_value + change_in_value`.
#[inline]
pub fn linear(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    change_in_value * current_time / duration + start_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        assert_eq!(linear(0.5, 1.0, 10.0, 1.0), 6.0);
    }

    #[test]
    fn extrapolates_past_duration() {
        assert_eq!(linear(2.0, 0.0, 10.0, 1.0), 20.0);
        assert_eq!(linear(-1.0, 0.0, 10.0, 1.0), -10.0);
    }

    #[test]
    fn zero_duration_is_not_finite() {
        assert!(linear(1.0, 0.0, 10.0, 0.0).is_infinite());
        assert!(linear(0.0, 0.0, 10.0, 0.0).is_nan());
    }
}
