mod easing;
mod keyframes;
mod spring;
mod transition;

pub use easing::Easing;
pub use keyframes::{Keyframes, Track};
pub use spring::{Spring, Spring2, SpringConfig};
pub use transition::{Repeat, Transition};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("keyframes need at least one value")]
    Empty,
    #[error("expected {expected} keyframe offsets, got {actual}")]
    OffsetCount { expected: usize, actual: usize },
    #[error("keyframe offsets must rise from 0 to 1")]
    BadOffsets,
    #[error("duration must be positive and finite, got {0}")]
    BadDuration(f64),
}

/// Linear blend between two values of the same kind.
pub trait Interpolate: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Interpolate for Vec2 {
    fn lerp(self, to: Self, t: f64) -> Self {
        Vec2::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

/// Visual state of an element: opacity plus a 2D translate and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset_x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    /// Inline CSS for this pose.
    pub fn to_style(self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Interpolate for Pose {
    fn lerp(self, to: Self, t: f64) -> Self {
        Pose {
            opacity: self.opacity.lerp(to.opacity, t),
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            scale: self.scale.lerp(to.scale, t),
        }
    }
}

/// A one-shot movement between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
        }
    }

    pub fn at(&self, elapsed: f64) -> Pose {
        let p = self.transition.progress(elapsed);
        self.from.lerp(self.to, self.transition.ease.apply(p))
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.transition.is_finished(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_lerp() {
        let a = Pose::hidden().offset_y(50.0);
        let mid = a.lerp(Pose::REST, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 25.0);
        assert_eq!(mid.scale, 1.0);
    }

    #[test]
    fn test_tween_holds_start_during_delay() {
        let t = Tween::new(
            Pose::hidden().offset_y(-20.0),
            Pose::REST,
            Transition::new(0.8).delay(0.4).ease(Easing::EaseOut),
        );
        assert_eq!(t.at(0.0), Pose::hidden().offset_y(-20.0));
        assert_eq!(t.at(0.3), Pose::hidden().offset_y(-20.0));
        assert_eq!(t.at(1.2), Pose::REST);
        assert_eq!(t.at(100.0), Pose::REST);
        assert!(t.is_finished(1.2));
        assert!(!t.is_finished(1.0));
    }

    #[test]
    fn test_pose_style() {
        let s = Pose::REST.offset_y(50.0).to_style();
        assert_eq!(
            s,
            "opacity: 1.000; transform: translate(0.00px, 50.00px) scale(1.000);"
        );
    }
}
