//! The closed catalog of easing curves and their by-name lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::formulas;
use crate::EasingError;

/// Signature shared by every easing formula:
/// `(current_time, start_value, change_in_value, duration) -> value`.
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Curve family, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sinusoidal,
    Exponential,
    Circular,
}

impl Family {
    pub const ALL: [Family; 8] = [
        Family::Linear,
        Family::Quadratic,
        Family::Cubic,
        Family::Quartic,
        Family::Quintic,
        Family::Sinusoidal,
        Family::Exponential,
        Family::Circular,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
            Self::Quintic => "quintic",
            Self::Sinusoidal => "sinusoidal",
            Self::Exponential => "exponential",
            Self::Circular => "circular",
        }
    }

    /// Resolve the family slot of an easing name, including short aliases.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "quad" | "quadratic" => Some(Self::Quadratic),
            "cubic" => Some(Self::Cubic),
            "quart" | "quartic" => Some(Self::Quartic),
            "quint" | "quintic" => Some(Self::Quintic),
            "sine" | "sinusoidal" => Some(Self::Sinusoidal),
            "expo" | "exponential" => Some(Self::Exponential),
            "circ" | "circular" => Some(Self::Circular),
            _ => None,
        }
    }
}

/// Which end of the motion is slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Starts slow, accelerates.
    In,
    /// Starts fast, decelerates.
    Out,
    /// Accelerates until half the duration, then decelerates.
    InOut,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::In, Direction::Out, Direction::InOut];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in_out",
        }
    }

    /// In and out swap; in-out is its own mirror.
    #[inline]
    pub fn mirrored(&self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::InOut => Self::InOut,
        }
    }
}

/// One of the 22 easing curves.
///
/// Serializes as the snake_case function name, e.g. `"ease_in_circular"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuartic,
    EaseOutQuartic,
    EaseInOutQuartic,
    EaseInQuintic,
    EaseOutQuintic,
    EaseInOutQuintic,
    EaseInSinusoidal,
    EaseOutSinusoidal,
    EaseInOutSinusoidal,
    EaseInExponential,
    EaseOutExponential,
    EaseInOutExponential,
    EaseInCircular,
    EaseOutCircular,
    EaseInOutCircular,
}

impl Easing {
    /// Catalog order: linear, then each family as in, out, in-out.
    pub const ALL: [Easing; 22] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuartic,
        Easing::EaseOutQuartic,
        Easing::EaseInOutQuartic,
        Easing::EaseInQuintic,
        Easing::EaseOutQuintic,
        Easing::EaseInOutQuintic,
        Easing::EaseInSinusoidal,
        Easing::EaseOutSinusoidal,
        Easing::EaseInOutSinusoidal,
        Easing::EaseInExponential,
        Easing::EaseOutExponential,
        Easing::EaseInOutExponential,
        Easing::EaseInCircular,
        Easing::EaseOutCircular,
        Easing::EaseInOutCircular,
    ];

    /// Canonical name, identical to the formula's function name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease_in_quad",
            Self::EaseOutQuad => "ease_out_quad",
            Self::EaseInOutQuad => "ease_in_out_quad",
            Self::EaseInCubic => "ease_in_cubic",
            Self::EaseOutCubic => "ease_out_cubic",
            Self::EaseInOutCubic => "ease_in_out_cubic",
            Self::EaseInQuartic => "ease_in_quartic",
            Self::EaseOutQuartic => "ease_out_quartic",
            Self::EaseInOutQuartic => "ease_in_out_quartic",
            Self::EaseInQuintic => "ease_in_quintic",
            Self::EaseOutQuintic => "ease_out_quintic",
            Self::EaseInOutQuintic => "ease_in_out_quintic",
            Self::EaseInSinusoidal => "ease_in_sinusoidal",
            Self::EaseOutSinusoidal => "ease_out_sinusoidal",
            Self::EaseInOutSinusoidal => "ease_in_out_sinusoidal",
            Self::EaseInExponential => "ease_in_exponential",
            Self::EaseOutExponential => "ease_out_exponential",
            Self::EaseInOutExponential => "ease_in_out_exponential",
            Self::EaseInCircular => "ease_in_circular",
            Self::EaseOutCircular => "ease_out_circular",
            Self::EaseInOutCircular => "ease_in_out_circular",
        }
    }

    /// The formula implementing this curve.
    #[inline]
    pub fn function(&self) -> EasingFn {
        match self {
            Self::Linear => formulas::linear,
            Self::EaseInQuad => formulas::ease_in_quad,
            Self::EaseOutQuad => formulas::ease_out_quad,
            Self::EaseInOutQuad => formulas::ease_in_out_quad,
            Self::EaseInCubic => formulas::ease_in_cubic,
            Self::EaseOutCubic => formulas::ease_out_cubic,
            Self::EaseInOutCubic => formulas::ease_in_out_cubic,
            Self::EaseInQuartic => formulas::ease_in_quartic,
            Self::EaseOutQuartic => formulas::ease_out_quartic,
            Self::EaseInOutQuartic => formulas::ease_in_out_quartic,
            Self::EaseInQuintic => formulas::ease_in_quintic,
            Self::EaseOutQuintic => formulas::ease_out_quintic,
            Self::EaseInOutQuintic => formulas::ease_in_out_quintic,
            Self::EaseInSinusoidal => formulas::ease_in_sinusoidal,
            Self::EaseOutSinusoidal => formulas::ease_out_sinusoidal,
            Self::EaseInOutSinusoidal => formulas::ease_in_out_sinusoidal,
            Self::EaseInExponential => formulas::ease_in_exponential,
            Self::EaseOutExponential => formulas::ease_out_exponential,
            Self::EaseInOutExponential => formulas::ease_in_out_exponential,
            Self::EaseInCircular => formulas::ease_in_circular,
            Self::EaseOutCircular => formulas::ease_out_circular,
            Self::EaseInOutCircular => formulas::ease_in_out_circular,
        }
    }

    /// Evaluate the curve. See [`crate::formulas`] for the per-family math.
    #[inline]
    pub fn apply(
        &self,
        current_time: f64,
        start_value: f64,
        change_in_value: f64,
        duration: f64,
    ) -> f64 {
        (self.function())(current_time, start_value, change_in_value, duration)
    }

    /// Evaluate the curve over the unit square: progress in, eased progress out.
    #[inline]
    pub fn ease(&self, progress: f64) -> f64 {
        self.apply(progress, 0.0, 1.0, 1.0)
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Linear => Family::Linear,
            Self::EaseInQuad | Self::EaseOutQuad | Self::EaseInOutQuad => Family::Quadratic,
            Self::EaseInCubic | Self::EaseOutCubic | Self::EaseInOutCubic => Family::Cubic,
            Self::EaseInQuartic | Self::EaseOutQuartic | Self::EaseInOutQuartic => {
                Family::Quartic
            }
            Self::EaseInQuintic | Self::EaseOutQuintic | Self::EaseInOutQuintic => {
                Family::Quintic
            }
            Self::EaseInSinusoidal | Self::EaseOutSinusoidal | Self::EaseInOutSinusoidal => {
                Family::Sinusoidal
            }
            Self::EaseInExponential | Self::EaseOutExponential | Self::EaseInOutExponential => {
                Family::Exponential
            }
            Self::EaseInCircular | Self::EaseOutCircular | Self::EaseInOutCircular => {
                Family::Circular
            }
        }
    }

    /// `None` for linear, which has no direction variants.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Linear => None,
            Self::EaseInQuad
            | Self::EaseInCubic
            | Self::EaseInQuartic
            | Self::EaseInQuintic
            | Self::EaseInSinusoidal
            | Self::EaseInExponential
            | Self::EaseInCircular => Some(Direction::In),
            Self::EaseOutQuad
            | Self::EaseOutCubic
            | Self::EaseOutQuartic
            | Self::EaseOutQuintic
            | Self::EaseOutSinusoidal
            | Self::EaseOutExponential
            | Self::EaseOutCircular => Some(Direction::Out),
            Self::EaseInOutQuad
            | Self::EaseInOutCubic
            | Self::EaseInOutQuartic
            | Self::EaseInOutQuintic
            | Self::EaseInOutSinusoidal
            | Self::EaseInOutExponential
            | Self::EaseInOutCircular => Some(Direction::InOut),
        }
    }

    /// Compose a curve from its family and direction.
    pub fn from_parts(family: Family, direction: Option<Direction>) -> Result<Self, EasingError> {
        use Direction::*;
        let easing = match (family, direction) {
            (Family::Linear, None) => Self::Linear,
            (Family::Quadratic, Some(In)) => Self::EaseInQuad,
            (Family::Quadratic, Some(Out)) => Self::EaseOutQuad,
            (Family::Quadratic, Some(InOut)) => Self::EaseInOutQuad,
            (Family::Cubic, Some(In)) => Self::EaseInCubic,
            (Family::Cubic, Some(Out)) => Self::EaseOutCubic,
            (Family::Cubic, Some(InOut)) => Self::EaseInOutCubic,
            (Family::Quartic, Some(In)) => Self::EaseInQuartic,
            (Family::Quartic, Some(Out)) => Self::EaseOutQuartic,
            (Family::Quartic, Some(InOut)) => Self::EaseInOutQuartic,
            (Family::Quintic, Some(In)) => Self::EaseInQuintic,
            (Family::Quintic, Some(Out)) => Self::EaseOutQuintic,
            (Family::Quintic, Some(InOut)) => Self::EaseInOutQuintic,
            (Family::Sinusoidal, Some(In)) => Self::EaseInSinusoidal,
            (Family::Sinusoidal, Some(Out)) => Self::EaseOutSinusoidal,
            (Family::Sinusoidal, Some(InOut)) => Self::EaseInOutSinusoidal,
            (Family::Exponential, Some(In)) => Self::EaseInExponential,
            (Family::Exponential, Some(Out)) => Self::EaseOutExponential,
            (Family::Exponential, Some(InOut)) => Self::EaseInOutExponential,
            (Family::Circular, Some(In)) => Self::EaseInCircular,
            (Family::Circular, Some(Out)) => Self::EaseOutCircular,
            (Family::Circular, Some(InOut)) => Self::EaseInOutCircular,
            (Family::Linear, Some(_)) | (_, None) => {
                return Err(EasingError::UnsupportedCombination { family, direction })
            }
        };
        Ok(easing)
    }

    /// The same family with in and out swapped. Linear and in-out curves map
    /// to themselves.
    pub fn mirrored(&self) -> Self {
        match self.direction() {
            Some(direction) => Self::from_parts(self.family(), Some(direction.mirrored()))
                .unwrap_or(*self),
            None => *self,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    /// Accepts canonical names (`ease_in_out_cubic`), an optional leading `:`,
    /// any case, `-` or whitespace in place of `_`, and the short family aliases
    /// `quart`, `quint`, `sine`, `expo` and `circ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .trim_start_matches(':')
            .chars()
            .map(|c| match c {
                c if c == '-' || c.is_whitespace() => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        if normalized == "linear" {
            return Ok(Self::Linear);
        }

        let parsed = normalized.strip_prefix("ease_").and_then(|rest| {
            let (direction, family) = if let Some(family) = rest.strip_prefix("in_out_") {
                (Direction::InOut, family)
            } else if let Some(family) = rest.strip_prefix("in_") {
                (Direction::In, family)
            } else if let Some(family) = rest.strip_prefix("out_") {
                (Direction::Out, family)
            } else {
                return None;
            };
            let family = Family::from_token(family)?;
            Self::from_parts(family, Some(direction)).ok()
        });

        parsed.ok_or_else(|| {
            log::debug!("unknown easing name {s:?}");
            EasingError::UnknownEasing {
                name: s.to_string(),
            }
        })
    }
}

impl TryFrom<&str> for Easing {
    type Error = EasingError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
