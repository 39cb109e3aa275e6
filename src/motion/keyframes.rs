use super::{AnimationError, Easing, Interpolate, Transition};

/// An ordered list of values, each pinned to an offset in `[0, 1]` of one
/// iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes<T> {
    values: Vec<T>,
    offsets: Vec<f64>,
}

impl<T: Interpolate> Keyframes<T> {
    /// Keyframes spread evenly over the iteration.
    pub fn new(values: Vec<T>) -> Result<Self, AnimationError> {
        let n = values.len();
        if n == 0 {
            return Err(AnimationError::Empty);
        }
        let offsets = if n == 1 {
            vec![0.0]
        } else {
            (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
        };
        Ok(Self { values, offsets })
    }

    pub fn with_offsets(values: Vec<T>, offsets: Vec<f64>) -> Result<Self, AnimationError> {
        if values.is_empty() {
            return Err(AnimationError::Empty);
        }
        if offsets.len() != values.len() {
            return Err(AnimationError::OffsetCount {
                expected: values.len(),
                actual: offsets.len(),
            });
        }
        let starts_at_zero = offsets.first() == Some(&0.0);
        let ends_at_one = offsets.len() == 1 || offsets.last() == Some(&1.0);
        let rising = offsets.windows(2).all(|w| w[0] <= w[1]);
        if !starts_at_zero || !ends_at_one || !rising {
            return Err(AnimationError::BadOffsets);
        }
        Ok(Self { values, offsets })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `progress`, easing each segment separately.
    pub fn sample(&self, progress: f64, ease: Easing) -> T {
        let p = progress.clamp(0.0, 1.0);
        let last = self.values.len() - 1;
        if last == 0 || p <= self.offsets[0] {
            return self.values[0];
        }
        if p >= self.offsets[last] {
            return self.values[last];
        }
        // first segment whose end is past p
        let end = self
            .offsets
            .iter()
            .position(|&o| o > p)
            .unwrap_or(last);
        let start = end - 1;
        let span = self.offsets[end] - self.offsets[start];
        if span <= 0.0 {
            return self.values[end];
        }
        let local = (p - self.offsets[start]) / span;
        self.values[start].lerp(self.values[end], ease.apply(local))
    }
}

/// Keyframes bound to a transition; sampled by elapsed seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T> {
    pub keyframes: Keyframes<T>,
    pub transition: Transition,
}

impl<T: Interpolate> Track<T> {
    pub fn new(keyframes: Keyframes<T>, transition: Transition) -> Self {
        Self {
            keyframes,
            transition,
        }
    }

    pub fn at(&self, elapsed: f64) -> T {
        self.at_with(&self.transition, elapsed)
    }

    /// Sample using different timing, for instances sharing the same path.
    pub fn at_with(&self, transition: &Transition, elapsed: f64) -> T {
        if transition.is_finished(elapsed) {
            return self.keyframes.values[self.keyframes.len() - 1];
        }
        self.keyframes
            .sample(transition.progress(elapsed), transition.ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_offsets() {
        let k = Keyframes::new(vec![1.0, 1.3, 1.0]).unwrap();
        assert_eq!(k.sample(0.0, Easing::Linear), 1.0);
        assert!((k.sample(0.25, Easing::Linear) - 1.15).abs() < 1e-9);
        assert!((k.sample(0.5, Easing::Linear) - 1.3).abs() < 1e-9);
        assert_eq!(k.sample(1.0, Easing::Linear), 1.0);
    }

    #[test]
    fn test_explicit_offsets_hold() {
        let k = Keyframes::with_offsets(
            vec![-1.0, -1.0, 1.0, 1.0, -1.0],
            vec![0.0, 0.45, 0.55, 0.95, 1.0],
        )
        .unwrap();
        assert_eq!(k.sample(0.2, Easing::Linear), -1.0);
        assert!(k.sample(0.5, Easing::Linear).abs() < 1e-9);
        assert_eq!(k.sample(0.7, Easing::Linear), 1.0);
        assert!((k.sample(0.975, Easing::Linear)).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Keyframes::<f64>::new(vec![]).unwrap_err(),
            AnimationError::Empty
        );
        assert_eq!(
            Keyframes::with_offsets(vec![0.0, 1.0], vec![0.0]).unwrap_err(),
            AnimationError::OffsetCount {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(
            Keyframes::with_offsets(vec![0.0, 1.0, 2.0], vec![0.0, 0.8, 0.5]).unwrap_err(),
            AnimationError::BadOffsets
        );
        assert_eq!(
            Keyframes::with_offsets(vec![0.0, 1.0], vec![0.1, 1.0]).unwrap_err(),
            AnimationError::BadOffsets
        );
        assert_eq!(
            Keyframes::with_offsets(vec![0.0, 1.0], vec![0.0, 0.9]).unwrap_err(),
            AnimationError::BadOffsets
        );
    }

    #[test]
    fn test_single_value() {
        let k = Keyframes::new(vec![4.0]).unwrap();
        assert_eq!(k.sample(0.6, Easing::EaseIn), 4.0);
    }

    #[test]
    fn test_track_loops() {
        let track = Track::new(
            Keyframes::new(vec![0.0, 10.0]).unwrap(),
            Transition::new(2.0).forever(),
        );
        assert_eq!(track.at(1.0), 5.0);
        assert_eq!(track.at(3.0), 5.0);

        let once = Transition::new(2.0);
        assert_eq!(track.at_with(&once, 3.0), 10.0);
    }
}
