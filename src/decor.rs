//! Ambient decorations: rising bubbles, a school of patrolling fish and the
//! pulse of the cursor ring.
//!
//! Everything here is data. Instances are rolled once and then sampled by
//! elapsed time through [`crate::motion`]; nothing in this module touches the
//! DOM.

use std::ops::Range;
use std::sync::LazyLock;

use rand::Rng;

use crate::motion::{AnimationError, Easing, Interpolate, Keyframes, Track, Transition, Vec2};

/// Where bubbles end up, in px above the top edge.
const BUBBLE_EXIT: f64 = -50.0;

static BUBBLE_OPACITY: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::new(vec![0.0, 0.8, 0.8, 0.0]).expect("bubble opacity keyframes should be valid")
});
static BUBBLE_SCALE: LazyLock<Keyframes<f64>> = LazyLock::new(|| {
    Keyframes::new(vec![0.5, 1.0, 1.0, 0.8]).expect("bubble scale keyframes should be valid")
});

const FISH_TIMES: [f64; 5] = [0.0, 0.45, 0.55, 0.95, 1.0];

fn fish_keyframes(values: [f64; 5]) -> Keyframes<f64> {
    Keyframes::with_offsets(values.to_vec(), FISH_TIMES.to_vec())
        .expect("fish path keyframes should be valid")
}

/// The loop every fish swims: out along one band, flip, back along another.
pub struct FishPath {
    /// vw
    pub x: Keyframes<f64>,
    /// vh
    pub y: Keyframes<f64>,
    pub scale_x: Keyframes<f64>,
    /// degrees
    pub rotate: Keyframes<f64>,
}

pub static FISH_PATH: LazyLock<FishPath> = LazyLock::new(|| FishPath {
    x: fish_keyframes([-20.0, 110.0, 110.0, -20.0, -20.0]),
    y: fish_keyframes([20.0, 50.0, 30.0, 70.0, 20.0]),
    scale_x: fish_keyframes([-1.0, -1.0, 1.0, 1.0, -1.0]),
    rotate: fish_keyframes([15.0, -20.0, -20.0, 15.0, 15.0]),
});

pub static CURSOR_PULSE: LazyLock<Track<f64>> = LazyLock::new(|| {
    Track::new(
        Keyframes::new(vec![1.0, 1.3, 1.0]).expect("pulse keyframes should be valid"),
        Transition::new(0.6).ease(Easing::EaseInOut).forever(),
    )
});

/// Cursor ring diameter in px; pointer coordinates are shifted by half of it.
pub const CURSOR_SIZE: f64 = 20.0;
pub const CURSOR_START: Vec2 = Vec2::new(-50.0, -50.0);

pub fn cursor_target(client_x: f64, client_y: f64) -> Vec2 {
    Vec2::new(client_x - CURSOR_SIZE / 2.0, client_y - CURSOR_SIZE / 2.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientConfig {
    pub bubble_count: usize,
    /// px
    pub bubble_size: Range<f64>,
    /// seconds
    pub bubble_delay: Range<f64>,
    pub fish: Vec<FishSpec>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            bubble_count: 40,
            bubble_size: 5.0..15.0,
            bubble_delay: 0.0..15.0,
            fish: vec![
                FishSpec::new(200.0, 45.0, 0.0),
                FishSpec::new(150.0, 50.0, 5.5),
                FishSpec::new(110.0, 38.0, 8.2),
                FishSpec::new(70.0, 60.0, 12.1),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpec {
    /// px width
    pub size: f64,
    /// seconds per loop
    pub duration: f64,
    pub delay: f64,
}

impl FishSpec {
    pub const fn new(size: f64, duration: f64, delay: f64) -> Self {
        Self {
            size,
            duration,
            delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub key: usize,
    pub size: f64,
    pub x_percent: f64,
    pub delay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleFrame {
    pub opacity: f64,
    pub scale: f64,
    pub y: f64,
}

impl Bubble {
    /// Bigger bubbles take a little longer to rise.
    pub fn duration(&self) -> f64 {
        self.size * 0.8 + 10.0
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.duration())
            .delay(self.delay)
            .forever()
    }

    /// Frame at `elapsed` seconds for a viewport `viewport_height` px tall.
    pub fn frame(&self, elapsed: f64, viewport_height: f64) -> BubbleFrame {
        let t = self.transition();
        let p = t.progress(elapsed);
        BubbleFrame {
            opacity: BUBBLE_OPACITY.sample(p, t.ease),
            scale: BUBBLE_SCALE.sample(p, t.ease),
            // from the bottom edge to just past the top
            y: viewport_height.lerp(BUBBLE_EXIT, t.ease.apply(p)),
        }
    }

    pub fn style(&self, frame: BubbleFrame) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; opacity: {o:.3}; transform: translateY({y:.1}px) scale({s:.3});",
            size = self.size,
            x = self.x_percent,
            o = frame.opacity,
            y = frame.y,
            s = frame.scale,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fish {
    pub key: usize,
    pub spec: FishSpec,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishFrame {
    pub x_vw: f64,
    pub y_vh: f64,
    pub scale_x: f64,
    pub rotate: f64,
}

impl Fish {
    pub fn transition(&self) -> Transition {
        Transition::new(self.spec.duration)
            .delay(self.spec.delay)
            .forever()
    }

    pub fn frame(&self, elapsed: f64) -> FishFrame {
        let t = self.transition();
        let p = t.progress(elapsed);
        let path = &*FISH_PATH;
        FishFrame {
            x_vw: path.x.sample(p, t.ease),
            y_vh: path.y.sample(p, t.ease),
            scale_x: path.scale_x.sample(p, t.ease),
            rotate: path.rotate.sample(p, t.ease),
        }
    }

    pub fn style(&self, frame: FishFrame) -> String {
        format!(
            "width: {w:.0}px; transform: translate({x:.2}vw, {y:.2}vh) scaleX({sx:.3}) rotate({r:.2}deg);",
            w = self.spec.size,
            x = frame.x_vw,
            y = frame.y_vh,
            r = frame.rotate,
            sx = frame.scale_x,
        )
    }
}

/// All decoration instances of one page load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ambient {
    pub bubbles: Vec<Bubble>,
    pub fish: Vec<Fish>,
}

impl Ambient {
    /// Roll one page load worth of decorations. Fails if the config would
    /// give any instance a loop that is not a positive, finite duration.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: &AmbientConfig,
    ) -> Result<Self, AnimationError> {
        let bubbles = (0..config.bubble_count)
            .map(|key| {
                let bubble = Bubble {
                    key,
                    size: roll(rng, &config.bubble_size),
                    x_percent: roll(rng, &(0.0..100.0)),
                    delay: roll(rng, &config.bubble_delay),
                };
                Transition::try_new(bubble.duration()).map(|_| bubble)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let fish = config
            .fish
            .iter()
            .enumerate()
            .map(|(key, spec)| {
                Transition::try_new(spec.duration).map(|_| Fish { key, spec: *spec })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bubbles, fish })
    }
}

// gen_range panics on empty ranges, a degenerate range just yields its start
fn roll<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
