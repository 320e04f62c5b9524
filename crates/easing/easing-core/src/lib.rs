//! Easing Core
//!
//! Classic easing curves over scalar values: linear plus quadratic, cubic,
//! quartic, quintic, sinusoidal, exponential and circular, each in ease-in,
//! ease-out and ease-in-out form.
//!
//! Every curve is a pure function of
//! `(current_time, start_value, change_in_value, duration)`. They can be
//! called directly, through the [`Easing`] catalog when the curve is chosen at
//! runtime, or bundled into a [`Tween`].
//!
//! ```
//! use easing_core::{ease_in_quad, Easing};
//!
//! assert_eq!(ease_in_quad(0.5, 1.0, 10.0, 1.0), 3.5);
//! let easing: Easing = "ease_in_quad".parse().unwrap();
//! assert_eq!(easing.apply(0.5, 1.0, 10.0, 1.0), 3.5);
//! ```

pub mod baking;
pub mod error;
pub mod formulas;
pub mod kind;
pub mod sequence;
pub mod tween;

// Re-exports for consumers
pub use baking::{bake_tween, export_baked_json, BakedTween, BakingConfig, MAX_BAKED_FRAMES};
pub use error::EasingError;
pub use formulas::*;
pub use kind::{Direction, Easing, EasingFn, Family};
pub use sequence::{map, map_named};
pub use tween::Tween;

/// Easing result type
pub type Result<T> = core::result::Result<T, EasingError>;
