//! Easing curves and scalar interpolation.
//!
//! Every curve maps linear progress in `[0, 1]` to eased progress. Inputs at or
//! beyond the ends are pinned to exactly `0.0` / `1.0`, so callers can rely on a
//! session ending precisely on its target even for curves that overshoot in the
//! middle (`EaseOutBack`, the elastic pair).

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;
const BOUNCE_N1: f32 = 7.5625;
const BOUNCE_D1: f32 = 2.75;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;

/// Shape of an animation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum EasingKind {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    #[default]
    EaseOutQuart,
    EaseInOutCubic,
    EaseOutBack,
    EaseOutBounce,
    EaseInBounce,
    EaseInElastic,
    EaseOutElastic,
}

impl EasingKind {
    pub const ALL: [EasingKind; 11] = [
        EasingKind::Linear,
        EasingKind::EaseInQuad,
        EasingKind::EaseOutQuad,
        EasingKind::EaseInOutQuad,
        EasingKind::EaseOutQuart,
        EasingKind::EaseInOutCubic,
        EasingKind::EaseOutBack,
        EasingKind::EaseOutBounce,
        EasingKind::EaseInBounce,
        EasingKind::EaseInElastic,
        EasingKind::EaseOutElastic,
    ];

    /// camelCase name used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            EasingKind::Linear => "linear",
            EasingKind::EaseInQuad => "easeInQuad",
            EasingKind::EaseOutQuad => "easeOutQuad",
            EasingKind::EaseInOutQuad => "easeInOutQuad",
            EasingKind::EaseOutQuart => "easeOutQuart",
            EasingKind::EaseInOutCubic => "easeInOutCubic",
            EasingKind::EaseOutBack => "easeOutBack",
            EasingKind::EaseOutBounce => "easeOutBounce",
            EasingKind::EaseInBounce => "easeInBounce",
            EasingKind::EaseInElastic => "easeInElastic",
            EasingKind::EaseOutElastic => "easeOutElastic",
        }
    }

    /// Look up a curve by name. Unknown names fall back to `Linear`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(EasingKind::Linear)
    }

    /// Curves whose intermediate values may leave `[0, 1]`.
    pub fn overshoots(&self) -> bool {
        matches!(
            self,
            EasingKind::EaseOutBack | EasingKind::EaseInElastic | EasingKind::EaseOutElastic
        )
    }

    /// Apply this curve to linear progress `p`.
    pub fn apply(&self, p: f32) -> f32 {
        // NaN lands here too
        if !(p > 0.0) {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }

        match self {
            EasingKind::Linear => p,
            EasingKind::EaseInQuad => p * p,
            EasingKind::EaseOutQuad => 1.0 - (1.0 - p) * (1.0 - p),
            EasingKind::EaseInOutQuad => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
                }
            }
            EasingKind::EaseOutQuart => 1.0 - (1.0 - p).powi(4),
            EasingKind::EaseInOutCubic => {
                if p < 0.5 {
                    4.0 * p * p * p
                } else {
                    1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
                }
            }
            EasingKind::EaseOutBack => {
                1.0 + BACK_C3 * (p - 1.0).powi(3) + BACK_C1 * (p - 1.0).powi(2)
            }
            EasingKind::EaseOutBounce => ease_out_bounce(p),
            EasingKind::EaseInBounce => 1.0 - ease_out_bounce(1.0 - p),
            EasingKind::EaseInElastic => {
                -(2.0_f32).powf(10.0 * p - 10.0) * ((p * 10.0 - 10.75) * ELASTIC_C4).sin()
            }
            EasingKind::EaseOutElastic => {
                (2.0_f32).powf(-10.0 * p) * ((p * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
            }
        }
    }
}

impl From<String> for EasingKind {
    fn from(name: String) -> Self {
        EasingKind::from_name(&name)
    }
}

impl From<EasingKind> for &'static str {
    fn from(kind: EasingKind) -> Self {
        kind.name()
    }
}

fn ease_out_bounce(p: f32) -> f32 {
    if p < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * p * p
    } else if p < 2.0 / BOUNCE_D1 {
        let t = p - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if p < 2.5 / BOUNCE_D1 {
        let t = p - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = p - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

/// Eased progress for `p` under `kind`.
pub fn ease(kind: EasingKind, p: f32) -> f32 {
    kind.apply(p)
}

/// Linear interpolation: `a + (b - a) * p`.
pub fn lerp(a: f32, b: f32, p: f32) -> f32 {
    a + (b - a) * p
}
