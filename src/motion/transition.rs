use super::{AnimationError, Easing};

const SNAP: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Repeat {
    #[default]
    Never,
    /// Extra iterations after the first one.
    Count(u32),
    Infinite,
}

/// Timing of an animation: how long one iteration lasts, how long to wait
/// before the first one, the curve, and how often it loops.
///
/// The delay is only applied once, before the first iteration. Loops restart
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
    pub repeat: Repeat,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Easing::Linear,
            repeat: Repeat::Never,
        }
    }

    pub fn try_new(duration: f64) -> Result<Self, AnimationError> {
        if duration.is_finite() && duration > 0.0 {
            Ok(Self::new(duration))
        } else {
            Err(AnimationError::BadDuration(duration))
        }
    }

    pub const fn delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn ease(self, ease: Easing) -> Self {
        Self { ease, ..self }
    }

    pub const fn repeat(self, repeat: Repeat) -> Self {
        Self { repeat, ..self }
    }

    pub const fn forever(self) -> Self {
        self.repeat(Repeat::Infinite)
    }

    /// Iterations run so far, fractional. Values within rounding error of a
    /// whole number are snapped to it, so `delay + duration` lands exactly on
    /// the end of an iteration.
    fn iterations(&self, elapsed: f64) -> f64 {
        let running = elapsed - self.delay;
        if running <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return f64::INFINITY;
        }
        let n = running / self.duration;
        let whole = n.round();
        if (n - whole).abs() < SNAP {
            whole
        } else {
            n
        }
    }

    fn total_iterations(&self) -> f64 {
        match self.repeat {
            Repeat::Never => 1.0,
            Repeat::Count(n) => n as f64 + 1.0,
            Repeat::Infinite => f64::INFINITY,
        }
    }

    /// Linear progress of the current iteration in `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let n = self.iterations(elapsed);
        if n >= self.total_iterations() {
            return 1.0;
        }
        n - n.floor()
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.iterations(elapsed) >= self.total_iterations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_once() {
        let t = Transition::new(2.0).delay(1.0);
        assert_eq!(t.progress(0.0), 0.0);
        assert_eq!(t.progress(1.0), 0.0);
        assert_eq!(t.progress(2.0), 0.5);
        assert_eq!(t.progress(3.0), 1.0);
        assert_eq!(t.progress(50.0), 1.0);
        assert!(t.is_finished(3.0));
    }

    #[test]
    fn test_progress_infinite_wraps() {
        let t = Transition::new(4.0).delay(2.0).forever();
        assert_eq!(t.progress(1.0), 0.0);
        assert_eq!(t.progress(3.0), 0.25);
        // delay is not repeated between iterations
        assert_eq!(t.progress(7.0), 0.25);
        assert_eq!(t.progress(6.0), 0.0);
        assert!(!t.is_finished(1e9));
    }

    #[test]
    fn test_progress_counted() {
        let t = Transition::new(1.0).repeat(Repeat::Count(2));
        assert_eq!(t.progress(2.5), 0.5);
        assert_eq!(t.progress(3.5), 1.0);
        assert!(t.is_finished(3.0));
        assert!(!t.is_finished(2.9));
    }

    #[test]
    fn test_finishes_on_exact_end() {
        // 1.2 - 0.4 is a hair short of 0.8 in f64
        let t = Transition::new(0.8).delay(0.4);
        assert!(t.is_finished(1.2));
        assert_eq!(t.progress(1.2), 1.0);
        assert!(!t.is_finished(1.19));

        let looped = Transition::new(0.1).delay(0.2).repeat(Repeat::Count(2));
        assert!(looped.is_finished(0.5));
        assert_eq!(looped.progress(0.5), 1.0);
        assert!(!looped.is_finished(0.45));
    }

    #[test]
    fn test_try_new_rejects_bad_duration() {
        assert_eq!(
            Transition::try_new(0.0),
            Err(AnimationError::BadDuration(0.0))
        );
        assert!(Transition::try_new(f64::NAN).is_err());
        assert!(Transition::try_new(0.6).is_ok());
    }
}
