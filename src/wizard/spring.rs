//! Damped harmonic oscillator used to animate scalar values.
//!
//! [`Spring`] holds coefficients precomputed from a fixed timestep, an
//! angular frequency and a damping ratio; [`Spring::update`] advances a
//! `(position, velocity)` pair by exactly one timestep using the closed-form
//! solution of the oscillator, so the step is stable for any timestep.
//!
//! [`AnimatedValue`] pairs a spring with the value it drives and knows when
//! that value has settled.

/// Frames per second the physics timer runs at.
pub const FPS: u32 = 60;

/// Timestep for a given frame rate.
pub fn fps(n: u32) -> f64 {
    1.0 / f64::from(n)
}

/// Steps after which an unsettled value is forced to rest.
pub const MAX_STEPS: u32 = 10_000;

const EPSILON: f64 = 0.0001;

/// Precomputed coefficients for one damped harmonic oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pos_pos: f64,
    pos_vel: f64,
    vel_pos: f64,
    vel_vel: f64,
}

impl Spring {
    /// Build a spring for the given timestep (seconds), angular frequency
    /// (radians per second) and damping ratio.
    ///
    /// A damping ratio below 1 overshoots and bounces, 1 is critically
    /// damped, above 1 approaches the target without overshoot. Negative
    /// inputs are clamped to zero.
    pub fn new(delta_time: f64, angular_frequency: f64, damping_ratio: f64) -> Self {
        let omega = angular_frequency.max(0.0);
        let zeta = damping_ratio.max(0.0);

        if omega < EPSILON {
            return Self {
                pos_pos: 1.0,
                pos_vel: 0.0,
                vel_pos: 0.0,
                vel_vel: 1.0,
            };
        }

        if zeta > 1.0 + EPSILON {
            // Over-damped.
            let za = -omega * zeta;
            let zb = omega * (zeta * zeta - 1.0).sqrt();
            let z1 = za - zb;
            let z2 = za + zb;

            let e1 = (z1 * delta_time).exp();
            let e2 = (z2 * delta_time).exp();

            let inv_two_zb = 1.0 / (2.0 * zb);

            let e1_over_two_zb = e1 * inv_two_zb;
            let e2_over_two_zb = e2 * inv_two_zb;

            let z1e1_over_two_zb = z1 * e1_over_two_zb;
            let z2e2_over_two_zb = z2 * e2_over_two_zb;

            Self {
                pos_pos: e1_over_two_zb * z2 - z2e2_over_two_zb + e2,
                pos_vel: -e1_over_two_zb + e2_over_two_zb,
                vel_pos: (z1e1_over_two_zb - z2e2_over_two_zb + e2) * z2,
                vel_vel: -z1e1_over_two_zb + z2e2_over_two_zb,
            }
        } else if zeta < 1.0 - EPSILON {
            // Under-damped.
            let omega_zeta = omega * zeta;
            let alpha = omega * (1.0 - zeta * zeta).sqrt();

            let exp_term = (-omega_zeta * delta_time).exp();
            let cos_term = (alpha * delta_time).cos();
            let sin_term = (alpha * delta_time).sin();

            let inv_alpha = 1.0 / alpha;

            let exp_sin = exp_term * sin_term;
            let exp_cos = exp_term * cos_term;
            let exp_omega_zeta_sin_over_alpha = exp_term * omega_zeta * sin_term * inv_alpha;

            Self {
                pos_pos: exp_cos + exp_omega_zeta_sin_over_alpha,
                pos_vel: exp_sin * inv_alpha,
                vel_pos: -exp_sin * alpha - omega_zeta * exp_omega_zeta_sin_over_alpha,
                vel_vel: exp_cos - exp_omega_zeta_sin_over_alpha,
            }
        } else {
            // Critically damped.
            let exp_term = (-omega * delta_time).exp();
            let time_exp = delta_time * exp_term;
            let time_exp_freq = time_exp * omega;

            Self {
                pos_pos: time_exp_freq + exp_term,
                pos_vel: time_exp,
                vel_pos: -omega * time_exp_freq,
                vel_vel: -time_exp_freq + exp_term,
            }
        }
    }

    /// Advance `(position, velocity)` one timestep toward `target`.
    pub fn update(&self, position: f64, velocity: f64, target: f64) -> (f64, f64) {
        let offset = position - target;
        let new_position = offset * self.pos_pos + velocity * self.pos_vel + target;
        let new_velocity = offset * self.vel_pos + velocity * self.vel_vel;
        (new_position, new_velocity)
    }
}

/// A scalar driven toward a target by a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    spring: Spring,
    epsilon: f64,
    /// Current value.
    pub position: f64,
    /// Current rate of change per second.
    pub velocity: f64,
    /// Value the spring relaxes toward.
    pub target: f64,
    settled: bool,
    steps: u32,
}

impl AnimatedValue {
    /// A value at rest at `position`.
    pub fn at_rest(spring: Spring, epsilon: f64, position: f64) -> Self {
        Self {
            spring,
            epsilon,
            position,
            velocity: 0.0,
            target: position,
            settled: true,
            steps: 0,
        }
    }

    /// Jump to `from` with zero velocity and start relaxing toward `target`.
    ///
    /// Overrides any motion already in flight.
    pub fn trigger(&mut self, from: f64, target: f64) {
        self.position = from;
        self.velocity = 0.0;
        self.target = target;
        self.settled = false;
        self.steps = 0;
    }

    /// Whether the value is resting on its target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether position and velocity are within tolerance of rest.
    fn within_tolerance(&self) -> bool {
        (self.position - self.target).abs() < self.epsilon && self.velocity.abs() < self.epsilon
    }

    /// Advance one timestep. Returns `true` while the value is still moving.
    ///
    /// On settling the position snaps to the target and velocity to zero.
    pub fn step(&mut self) -> bool {
        if self.settled {
            return false;
        }

        let (position, velocity) = self.spring.update(self.position, self.velocity, self.target);
        self.position = position;
        self.velocity = velocity;
        self.steps += 1;

        if self.within_tolerance() {
            self.snap();
            return false;
        }

        if self.steps >= MAX_STEPS {
            tracing::warn!(
                "Spring failed to settle after {} steps (position {:.3}, target {:.3}); forcing rest",
                self.steps,
                self.position,
                self.target
            );
            self.snap();
            return false;
        }

        true
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrance() -> Spring {
        Spring::new(fps(FPS), 5.0, 0.7)
    }

    #[test]
    fn fps_is_reciprocal() {
        assert!((fps(60) - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn update_at_target_is_fixed_point() {
        for spring in [
            entrance(),
            Spring::new(fps(FPS), 8.0, 0.85),
            Spring::new(fps(FPS), 6.0, 1.0),
            Spring::new(fps(FPS), 6.0, 2.0),
        ] {
            let (p, v) = spring.update(1.0, 0.0, 1.0);
            assert_eq!(p, 1.0);
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn zero_frequency_is_identity() {
        let spring = Spring::new(fps(FPS), 0.0, 0.5);
        assert_eq!(spring.update(0.5, 2.0, 1.0), (0.5, 2.0));
    }

    #[test]
    fn underdamped_energy_never_increases() {
        let spring = entrance();
        let omega = 5.0;
        let energy = |p: f64, v: f64| v * v + omega * omega * (p - 1.0) * (p - 1.0);

        let (mut p, mut v) = (0.0, 0.0);
        let mut last = energy(p, v);
        for _ in 0..600 {
            let next = spring.update(p, v, 1.0);
            p = next.0;
            v = next.1;
            let e = energy(p, v);
            assert!(e <= last + 1e-12, "energy rose from {} to {}", last, e);
            assert!(p > -0.01 && p < 1.1, "position diverged: {}", p);
            last = e;
        }
        assert!((p - 1.0).abs() < 1e-6);
    }

    #[test]
    fn overdamped_does_not_overshoot() {
        let spring = Spring::new(fps(FPS), 6.0, 2.0);
        let (mut p, mut v) = (0.0, 0.0);
        for _ in 0..600 {
            let next = spring.update(p, v, 1.0);
            assert!(next.0 >= p - 1e-12);
            assert!(next.0 <= 1.0 + 1e-9);
            p = next.0;
            v = next.1;
        }
    }

    #[test]
    fn critically_damped_converges() {
        let spring = Spring::new(fps(FPS), 6.0, 1.0);
        let (mut p, mut v) = (10.0, 0.0);
        for _ in 0..600 {
            (p, v) = spring.update(p, v, 0.0);
        }
        assert!(p.abs() < 1e-3);
        assert!(v.abs() < 1e-3);
    }

    #[test]
    fn animated_value_settles_and_stays() {
        let mut value = AnimatedValue::at_rest(entrance(), 0.001, 0.0);
        value.trigger(0.0, 1.0);
        let mut steps = 0;
        while value.step() {
            steps += 1;
            assert!(steps < 1_000, "entrance never settled");
        }
        assert!(value.is_settled());
        assert_eq!(value.position, 1.0);
        assert_eq!(value.velocity, 0.0);

        for _ in 0..10 {
            assert!(!value.step());
            assert_eq!(value.position, 1.0);
            assert_eq!(value.velocity, 0.0);
        }
    }

    #[test]
    fn trigger_overrides_motion_in_flight() {
        let mut value = AnimatedValue::at_rest(Spring::new(fps(FPS), 8.0, 0.85), 0.5, 0.0);
        value.trigger(82.0, 0.0);
        for _ in 0..5 {
            value.step();
        }
        assert!(value.velocity != 0.0);

        value.trigger(-82.0, 0.0);
        assert_eq!(value.position, -82.0);
        assert_eq!(value.velocity, 0.0);
        assert_eq!(value.target, 0.0);
        assert!(!value.is_settled());
    }

    #[test]
    fn at_rest_is_settled() {
        let value = AnimatedValue::at_rest(entrance(), 0.001, 0.5);
        assert!(value.is_settled());
        assert_eq!(value.target, 0.5);
    }

    #[test]
    fn stalled_value_is_forced_to_rest() {
        // Zero frequency never moves, so only the step ceiling can stop it.
        let mut value = AnimatedValue::at_rest(Spring::new(fps(FPS), 0.0, 1.0), 0.001, 0.0);
        value.trigger(5.0, 0.0);
        let mut steps = 0;
        while value.step() {
            steps += 1;
        }
        assert_eq!(steps + 1, MAX_STEPS);
        assert_eq!(value.position, 0.0);
        assert!(value.is_settled());
    }
}
