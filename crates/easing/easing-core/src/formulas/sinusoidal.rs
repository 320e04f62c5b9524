//! Sinusoidal easing. The in-out variant is a single half-cosine and has no
//! phase branch.

use std::f64::consts::{FRAC_PI_2, PI};

#[inline]
pub fn ease_in_sinusoidal(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    -change_in_value * (t * FRAC_PI_2).cos() + change_in_value + start_value
}

#[inline]
pub fn ease_out_sinusoidal(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    let t = current_time / duration;
    change_in_value * (t * FRAC_PI_2).sin() + start_value
}

#[inline]
pub fn ease_in_out_sinusoidal(
    current_time: f64,
    start_value: f64,
    change_in_value: f64,
    duration: f64,
) -> f64 {
    -change_in_value / 2.0 * ((PI * current_time / duration).cos() - 1.0) + start_value
}
