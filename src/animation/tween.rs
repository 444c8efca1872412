// src/animation/tween.rs
//
// A time-bounded color interpolation.
// Times are app seconds, as given by `app.time`.

use nannou::prelude::*;

use super::EasingType;

#[derive(Debug, Clone, Copy)]
pub struct ColorTween {
    pub start: Rgba,
    pub target: Rgba,
    pub start_time: f32,
    pub duration: f32,
    pub easing: EasingType,
}

impl ColorTween {
    pub fn new(start: Rgba, target: Rgba, start_time: f32, duration: f32, easing: EasingType) -> Self {
        Self {
            start,
            target,
            start_time,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `time`.
    pub fn progress(&self, time: f32) -> f32 {
        // if duration is ~0.0, immediately change to target.
        if self.duration < 0.001 {
            return 1.0;
        }
        ((time - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, time: f32) -> Rgba {
        let t = self.easing.apply(self.progress(time));
        lerp_rgba(self.start, self.target, t)
    }

    pub fn is_finished(&self, time: f32) -> bool {
        self.progress(time) >= 1.0
    }

    /// Starts a new tween toward `target` from wherever this one is at `time`.
    pub fn retarget(&self, target: Rgba, time: f32, duration: f32) -> Self {
        Self::new(self.value_at(time), target, time, duration, self.easing)
    }
}

pub fn lerp_rgba(start: Rgba, end: Rgba, t: f32) -> Rgba {
    rgba(
        start.red + (end.red - start.red) * t,
        start.green + (end.green - start.green) * t,
        start.blue + (end.blue - start.blue) * t,
        start.alpha + (end.alpha - start.alpha) * t,
    )
}
