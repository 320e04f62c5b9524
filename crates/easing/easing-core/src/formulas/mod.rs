//! Easing formulas.
//!
//! Every function shares the signature
//! `(current_time, start_value, change_in_value, duration) -> f64`.
//! Single-phase curves normalize time as `current_time / duration`; the
//! two-phase in-out curves normalize against half the duration and switch to
//! the second phase once the normalized time reaches 1.
//!
//! None of these validate their inputs. A zero `duration` produces an
//! infinite or NaN result, and times outside `[0, duration]` are evaluated
//! as-is.

pub mod circular;
pub mod cubic;
pub mod exponential;
pub mod linear;
pub mod quadratic;
pub mod quartic;
pub mod quintic;
pub mod sinusoidal;

pub use circular::*;
pub use cubic::*;
pub use exponential::*;
pub use linear::*;
pub use quadratic::*;
pub use quartic::*;
pub use quintic::*;
pub use sinusoidal::*;
