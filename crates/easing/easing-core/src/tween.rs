use serde::{Deserialize, Serialize};

use crate::Easing;

/// An easing curve bound to a concrete start value, change and duration.
///
/// Intended to be built once and sampled each tick of a caller-owned loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    #[serde(default)]
    pub easing: Easing,
    pub start: f64,
    pub change: f64,
    pub duration: f64,
}

impl Tween {
    #[inline]
    pub fn new(easing: Easing, start: f64, change: f64, duration: f64) -> Self {
        Self {
            easing,
            start,
            change,
            duration,
        }
    }

    /// Tween from `start` to `end` over `duration`.
    #[inline]
    pub fn between(easing: Easing, start: f64, end: f64, duration: f64) -> Self {
        Self::new(easing, start, end - start, duration)
    }

    /// Value at `current_time`. Times outside `[0, duration]` are not clamped.
    #[inline]
    pub fn value_at(&self, current_time: f64) -> f64 {
        self.easing
            .apply(current_time, self.start, self.change, self.duration)
    }

    #[inline]
    pub fn end_value(&self) -> f64 {
        self.start + self.change
    }

    /// The motion played backwards: from the end value to the start, with in
    /// and out swapped so the slow end stays at the same place.
    pub fn reversed(&self) -> Self {
        Self::new(
            self.easing.mirrored(),
            self.end_value(),
            -self.change,
            self.duration,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn between_derives_change() {
        let tween = Tween::between(Easing::EaseInQuad, 1.0, 11.0, 1.0);
        assert_eq!(tween.change, 10.0);
        assert_eq!(tween.value_at(0.5), 3.5);
        assert_eq!(tween.end_value(), 11.0);
    }

    #[test]
    fn reversed_retraces_the_curve() {
        let tween = Tween::between(Easing::EaseInCubic, 0.0, 8.0, 2.0);
        let back = tween.reversed();
        assert_eq!(back.easing, Easing::EaseOutCubic);
        for i in 0..=20 {
            let t = i as f64 / 10.0;
            assert_abs_diff_eq!(back.value_at(t), tween.value_at(2.0 - t), epsilon = 1e-9);
        }
    }

    #[test]
    fn deserializes_with_default_easing() {
        let tween: Tween =
            serde_json::from_str(r#"{"start": 0.0, "change": 5.0, "duration": 1.0}"#).unwrap();
        assert_eq!(tween.easing, Easing::Linear);
        assert_eq!(tween.value_at(0.5), 2.5);
    }
}
