//! Exponential (`2^(10t)`) easing.
//!
//! These curves never touch their asymptotic endpoint: `ease_in_exponential`
//! starts `change * 2^-10` above `start_value`, and `ease_out_exponential`
//! stops `change * 2^-10` short of the end value. The in-out variant carries
//! half of each offset. The offsets are part of the classic formulas and are
//! kept as-is.

#[inline]
pub fn ease_in_exponential(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    change_in_value * 2f64.powf(10.0 * (t - 1.0)) + start_value
}

#[inline]
pub fn ease_out_exponential(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    change_in_value * (-(2f64.powf(-10.0 * t)) + 1.0) + start_value
}

#[inline]
pub fn ease_in_out_exponential(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / (duration / 2.0);
    if t < 1.0 {
        return change_in_value / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + start_value;
    }
    let t = t - 1.0;
    change_in_value / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + start_value
}
