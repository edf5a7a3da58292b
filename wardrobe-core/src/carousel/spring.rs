//! Spring-damper settle animation for a single scalar (the rotation angle)

use std::time::Instant;

use crate::constants::spring as sc;

/// Stiffness, damping and mass of the settle spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: sc::STIFFNESS,
            damping: sc::DAMPING,
            mass: sc::MASS,
        }
    }
}

impl SpringConfig {
    /// Critically damped spring: fastest approach without overshoot.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }
}

/// In-flight spring toward `target`.
///
/// `current()` is the interpolated value at the last tick and is what an
/// interrupting gesture must start from.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    last_update: Instant,
    active: bool,
}

impl Spring {
    pub fn start(
        config: SpringConfig,
        from: f32,
        target: f32,
        now: Instant,
    ) -> Self {
        Self::start_with_velocity(config, from, 0.0, target, now)
    }

    /// Start from a moving value, e.g. when replacing a spring mid-flight.
    pub fn start_with_velocity(
        config: SpringConfig,
        from: f32,
        velocity: f32,
        target: f32,
        now: Instant,
    ) -> Self {
        let mut spring = Self {
            config,
            value: from,
            velocity,
            target,
            last_update: now,
            active: true,
        };
        spring.check_rest();
        spring
    }

    pub fn current(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop where we are; returns the value the spring was at.
    pub fn cancel(&mut self) -> f32 {
        self.active = false;
        self.velocity = 0.0;
        self.value
    }

    /// Advance to `now`; returns true while motion is active.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        let dt = now
            .saturating_duration_since(self.last_update)
            .as_secs_f32()
            .min(sc::MAX_DT_S);
        self.last_update = now;
        if dt <= 0.0 {
            return true;
        }

        let steps = (dt / sc::SUBSTEP_S).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        for _ in 0..steps {
            let spring_force = -stiffness * (self.value - self.target);
            let damping_force = -damping * self.velocity;
            // Semi-implicit Euler: velocity first, then position
            self.velocity += (spring_force + damping_force) / mass * h;
            self.value += self.velocity * h;
        }

        self.check_rest();
        self.active
    }

    fn check_rest(&mut self) {
        if (self.value - self.target).abs() < sc::REST_DISTANCE_DEG
            && self.velocity.abs() < sc::REST_VELOCITY_DEG_PER_S
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.active = false;
        }
    }
}
