pub mod cell_animator;
pub mod easing;
pub mod tween;

pub use cell_animator::{CellAnimator, HoverDirection, HoverTiming};
pub use easing::EasingType;
pub use tween::{lerp_rgba, ColorTween};
