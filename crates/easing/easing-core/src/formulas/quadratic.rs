//! Quadratic (`t^2`) easing.

/// Accelerates from zero velocity.
#[inline]
pub fn ease_in_quad(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    change_in_value * t * t + start_value
}

/// Decelerates to zero velocity.
#[inline]
pub fn ease_out_quad(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    -change_in_value * t * (t - 2.0) + start_value
}

/// Accelerates until halfway, then decelerates.
#[inline]
pub fn ease_in_out_quad(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / (duration / 2.0);
    if t < 1.0 {
        return change_in_value / 2.0 * t * t + start_value;
    }
    let t = t - 1.0;
    -change_in_value / 2.0 * (t * (t - 2.0) - 1.0) + start_value
}
