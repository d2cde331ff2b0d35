//! Position tweening: easing curves, tweens, and the active timeline.

pub mod easing;
pub mod timeline;
pub mod tween;

pub use easing::EasingFunction;
pub use timeline::TweenTimeline;
pub use tween::Tween;
