use super::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Largest frame delta fed into the spring, in seconds.
    pub max_step: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            max_step: 0.064,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Largest overshoot past the target, as a fraction of the distance
    /// travelled, for a spring released from rest.
    pub fn max_overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-std::f64::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }
}

/// One-dimensional damped spring, solved in closed form per step so the
/// trajectory does not depend on frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub config: SpringConfig,
    pub position: f64,
    pub velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
        }
    }

    /// Advance by `dt` seconds toward `target` and return the new position.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let dt = dt.clamp(0.0, self.config.max_step);
        if dt == 0.0 {
            return self.position;
        }
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();
        let d0 = self.position - target;
        let v0 = self.velocity;

        let (d, v) = if (zeta - 1.0).abs() < 1e-6 {
            let c = v0 + w0 * d0;
            let e = (-w0 * dt).exp();
            (e * (d0 + c * dt), e * (v0 - w0 * c * dt))
        } else if zeta < 1.0 {
            let a = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-a * dt).exp();
            let (sin, cos) = (wd * dt).sin_cos();
            (
                e * (d0 * cos + (v0 + a * d0) / wd * sin),
                e * (v0 * cos - (a * v0 + w0 * w0 * d0) / wd * sin),
            )
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c1 = (v0 - r2 * d0) / (r1 - r2);
            let c2 = d0 - c1;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        self.position = target + d;
        self.velocity = v;
        self.position
    }

    pub fn is_settled(&self, target: f64, rest_delta: f64, rest_speed: f64) -> bool {
        (self.position - target).abs() <= rest_delta && self.velocity.abs() <= rest_speed
    }
}

/// A pair of independent springs driving a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, at: Vec2) -> Self {
        Self {
            x: Spring::new(config, at.x),
            y: Spring::new(config, at.y),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }

    pub fn step(&mut self, target: Vec2, dt: f64) -> Vec2 {
        Vec2::new(self.x.step(target.x, dt), self.y.step(target.y, dt))
    }

    pub fn is_settled(&self, target: Vec2, rest_delta: f64, rest_speed: f64) -> bool {
        self.x.is_settled(target.x, rest_delta, rest_speed)
            && self.y.is_settled(target.y, rest_delta, rest_speed)
    }
}
