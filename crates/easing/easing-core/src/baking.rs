//! Baking API: produce evenly spaced samples of a tween over a time window.

use serde::{Deserialize, Serialize};

use crate::{Easing, EasingError, Tween};

const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Upper bound on frames in one bake (about 128 MiB of samples).
pub const MAX_BAKED_FRAMES: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Target frame rate (Hz) for baked samples.
    pub frame_rate: f64,
    /// Start time in tween time.
    pub start_time: f64,
    /// End time in tween time; if None, uses the tween duration.
    pub end_time: Option<f64>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start_time: 0.0,
            end_time: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedTween {
    pub easing: Easing,
    pub frame_rate: f64,
    pub start_time: f64,
    pub end_time: f64,
    /// Sampled values, one per frame, inclusive of both window ends.
    pub values: Vec<f64>,
}

/// Bake a tween using the provided config.
///
/// The window is clamped to `[0, duration]`, so unlike [`Tween::value_at`]
/// baking never evaluates outside the tween. Windows that would need more
/// than [`MAX_BAKED_FRAMES`] samples are rejected.
pub fn bake_tween(tween: &Tween, cfg: &BakingConfig) -> Result<BakedTween, EasingError> {
    let duration = tween.duration;
    if !(duration.is_finite() && duration > 0.0) {
        return Err(EasingError::InvalidBakingConfig {
            reason: format!("tween duration must be finite and positive, got {duration}"),
        });
    }

    let sr = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        log::debug!(
            "bake: invalid frame rate {}, using {DEFAULT_FRAME_RATE}",
            cfg.frame_rate
        );
        DEFAULT_FRAME_RATE
    };
    let sr = sr.max(1.0);

    let start = if cfg.start_time.is_finite() {
        cfg.start_time.clamp(0.0, duration)
    } else {
        0.0
    };
    let mut end = cfg.end_time.unwrap_or(duration);
    if !end.is_finite() {
        end = duration;
    }
    let end = end.clamp(start, duration);
    let span = end - start;
    let intervals = (span * sr).ceil();
    if !intervals.is_finite() || intervals >= MAX_BAKED_FRAMES as f64 {
        return Err(EasingError::InvalidBakingConfig {
            reason: format!(
                "window [{start}, {end}] at {sr} Hz needs more than {MAX_BAKED_FRAMES} frames"
            ),
        });
    }
    let frame_count = intervals as usize + 1; // inclusive of end

    log::trace!(
        "bake {}: window [{start}, {end}] at {sr} Hz, {frame_count} frames",
        tween.easing
    );

    let values = (0..frame_count)
        .map(|f| {
            let t = (start + f as f64 / sr).min(end);
            tween.value_at(t)
        })
        .collect();

    Ok(BakedTween {
        easing: tween.easing,
        frame_rate: sr,
        start_time: start,
        end_time: end,
        values,
    })
}

/// Export baked data as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(baked: &BakedTween) -> Result<serde_json::Value, EasingError> {
    Ok(serde_json::to_value(baked)?)
}
