//! Circular (quarter-circle arc) easing. Times outside `[0, duration]` take
//! the square root of a negative number and yield NaN.

#[inline]
pub fn ease_in_circular(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    -change_in_value * ((1.0 - t * t).sqrt() - 1.0) + start_value
}

#[inline]
pub fn ease_out_circular(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration - 1.0;
    change_in_value * (1.0 - t * t).sqrt() + start_value
}

#[inline]
pub fn ease_in_out_circular(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / (duration / 2.0);
    if t < 1.0 {
        return -change_in_value / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + start_value;
    }
    let t = t - 2.0;
    change_in_value / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + start_value
}
