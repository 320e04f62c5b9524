//! Error types for easing lookup and baking.
//!
//! The formulas themselves never fail; bad numeric input propagates as
//! infinity or NaN. Only name resolution, curve composition and baking report
//! errors.

use serde::{Deserialize, Serialize};

use crate::kind::{Direction, Family};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Name does not match any curve in the catalog
    #[error("Unknown easing function: {name}")]
    UnknownEasing { name: String },

    /// Family and direction do not form a curve (e.g. linear ease-out)
    #[error("No {family:?} easing with direction {direction:?}")]
    UnsupportedCombination {
        family: Family,
        direction: Option<Direction>,
    },

    /// Baking window or duration cannot produce frames
    #[error("Invalid baking config: {reason}")]
    InvalidBakingConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl EasingError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownEasing { .. } | Self::UnsupportedCombination { .. } => "lookup",
            Self::InvalidBakingConfig { .. } => "baking",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for EasingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
