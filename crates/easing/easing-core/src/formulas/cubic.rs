//! Cubic (`t^3`) easing.

#[inline]
pub fn ease_in_cubic(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    change_in_value * t * t * t + start_value
}

#[inline]
pub fn ease_out_cubic(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration - 1.0;
    change_in_value * (t * t * t + 1.0) + start_value
}

#[inline]
pub fn ease_in_out_cubic(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / (duration / 2.0);
    if t < 1.0 {
        return change_in_value / 2.0 * t * t * t + start_value;
    }
    let t = t - 2.0;
    change_in_value / 2.0 * (t * t * t + 2.0) + start_value
}
