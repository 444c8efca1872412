// src/animation/easing.rs
//
// easing curves for color tweens

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseInOut,
    EaseIn,
    #[default]
    EaseOut,
}

impl EasingType {
    /// Maps linear progress in `[0, 1]` onto the curve. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}
