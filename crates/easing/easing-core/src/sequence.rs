//! Map a sequence of numbers through one easing curve.
//!
//! The first element is the start value and the span to the last element is
//! both the change in value and the duration, so each element is treated as
//! a time offset `x - first` along a curve that runs from `first` to `last`.

use crate::{Easing, EasingError};

/// Ease every element of `values` with `easing`, keeping length and order.
///
/// A single-element or zero-span input divides by zero and yields NaN or
/// infinite elements. An empty input yields an empty vector.
pub fn map(values: &[f64], easing: Easing) -> Vec<f64> {
    let (Some(&start_value), Some(&last)) = (values.first(), values.last()) else {
        return Vec::new();
    };
    let change_in_value = last - start_value;
    let duration = change_in_value;
    log::trace!(
        "map {} values with {easing}: start={start_value} change={change_in_value}",
        values.len()
    );

    let ease = easing.function();
    values
        .iter()
        .map(|&x| ease(x - start_value, start_value, change_in_value, duration))
        .collect()
}

/// [`map`] with the curve resolved by name, e.g. `"ease_in_circular"`.
pub fn map_named(values: &[f64], name: &str) -> Result<Vec<f64>, EasingError> {
    let easing: Easing = name.parse()?;
    Ok(map(values, easing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_ten() -> Vec<f64> {
        (1..=10_i32).map(f64::from).collect()
    }

    #[test]
    fn linear_is_identity() {
        let values = one_to_ten();
        let mapped = map(&values, Easing::Linear);
        for (got, want) in mapped.iter().zip(values.iter()) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn endpoints_are_kept() {
        let values = one_to_ten();
        for easing in Easing::ALL {
            let mapped = map(&values, easing);
            assert_eq!(mapped.len(), values.len());
            if easing.family() != crate::Family::Exponential {
                assert!((mapped[0] - 1.0).abs() < 1e-9, "{easing} start");
                assert!((mapped[9] - 10.0).abs() < 1e-9, "{easing} end");
            }
        }
    }

    #[test]
    fn empty_input_maps_to_empty() {
        assert!(map(&[], Easing::EaseInQuad).is_empty());
    }

    #[test]
    fn single_element_is_not_finite() {
        let mapped = map(&[3.0], Easing::Linear);
        assert_eq!(mapped.len(), 1);
        assert!(mapped[0].is_nan());
    }

    #[test]
    fn map_named_rejects_unknown() {
        let err = map_named(&[1.0, 2.0], "ease_in_elastic").unwrap_err();
        assert_eq!(err.category(), "lookup");
    }
}
