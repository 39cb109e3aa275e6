/// Timing curve applied to linear progress.
///
/// Named curves follow the CSS definitions of `ease-in`, `ease-out` and
/// `ease-in-out`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 30;
const EPSILON: f64 = 1e-7;

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

// one axis of a bezier from (0,0) to (1,1) with control points p1, p2
fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    if x1 == y1 && x2 == y2 {
        return x;
    }

    // solve bezier_x(t) = x, Newton first then bisection if the slope is flat
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return bezier(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let cur = bezier(x1, x2, t);
        if (cur - x).abs() < EPSILON {
            break;
        }
        if cur < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_fixed() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.17, 0.67, 0.83, 0.67),
        ] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_curve_shapes() {
        // ease-out front-loads progress, ease-in back-loads it
        assert!(Easing::EaseOut.apply(0.25) > 0.25);
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = Easing::EaseInOut.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-9, "not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let e = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        assert!((e.apply(0.37) - 0.37).abs() < 1e-9);
    }
}
