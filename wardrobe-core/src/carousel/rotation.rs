//! Rotation state: the single source of truth for the carousel angle
//!
//! The angle is unbounded (it may wind past 360 or go negative). It changes
//! only linearly with drag input while `Dragging`, or through the settle
//! spring while `Settling`. Observers registered with `subscribe` see every
//! change.

use std::time::Instant;

use log::trace;

use super::spring::{Spring, SpringConfig};

/// Current interaction phase.
#[derive(Debug, Clone)]
pub enum RotationPhase {
    Idle,
    /// Angle follows `origin + drag delta`.
    Dragging { origin: f32 },
    /// Spring is pulling the angle toward a snap target.
    Settling(Spring),
}

/// Phase without payload, for observers and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Dragging,
    Settling,
}

impl RotationPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            RotationPhase::Idle => PhaseKind::Idle,
            RotationPhase::Dragging { .. } => PhaseKind::Dragging,
            RotationPhase::Settling(_) => PhaseKind::Settling,
        }
    }
}

/// What observers receive on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSnapshot {
    pub angle_degrees: f32,
    pub phase: PhaseKind,
    /// Bumped on every change.
    pub revision: u64,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&RotationSnapshot)>;

pub struct RotationState {
    angle_degrees: f32,
    phase: RotationPhase,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl std::fmt::Debug for RotationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationState")
            .field("angle_degrees", &self.angle_degrees)
            .field("phase", &self.phase)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RotationState {
    /// Fresh state resting at `initial_angle` (the initial-index effect).
    pub fn new(initial_angle: f32) -> Self {
        Self {
            angle_degrees: initial_angle,
            phase: RotationPhase::Idle,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// The interpolated angle right now, including mid-spring values.
    pub fn current_angle(&self) -> f32 {
        self.angle_degrees
    }

    pub fn phase(&self) -> &RotationPhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, RotationPhase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, RotationPhase::Settling(_))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot {
            angle_degrees: self.angle_degrees,
            phase: self.phase.kind(),
            revision: self.revision,
        }
    }

    /// Spring target while settling.
    pub fn settle_target(&self) -> Option<f32> {
        match &self.phase {
            RotationPhase::Settling(spring) => Some(spring.target()),
            _ => None,
        }
    }

    // ========== OBSERVERS ==========

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&RotationSnapshot) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not (or no longer) registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ========== TRANSITIONS ==========

    /// Enter `Dragging`, cancelling any spring. The drag origin is the
    /// current interpolated angle, never the spring's start or target.
    pub fn begin_drag(&mut self) -> f32 {
        if let RotationPhase::Settling(spring) = &mut self.phase {
            self.angle_degrees = spring.cancel();
            trace!("Drag grant interrupted settle at {}", self.angle_degrees);
        }
        let origin = self.angle_degrees;
        self.phase = RotationPhase::Dragging { origin };
        self.notify();
        origin
    }

    /// Direct set while dragging: `origin + delta_degrees`. Ignored outside
    /// `Dragging`. Returns true if the angle was written.
    pub fn apply_drag(&mut self, delta_degrees: f32) -> bool {
        let RotationPhase::Dragging { origin } = self.phase else {
            return false;
        };
        if !delta_degrees.is_finite() {
            return false;
        }
        self.angle_degrees = origin + delta_degrees;
        self.notify();
        true
    }

    /// Animate toward `target`. Replaces (cancels) an in-flight spring,
    /// starting from its current value and velocity.
    pub fn settle_to(
        &mut self,
        target: f32,
        config: SpringConfig,
        now: Instant,
    ) {
        let velocity = match &mut self.phase {
            RotationPhase::Settling(spring) => {
                let velocity = spring.velocity();
                self.angle_degrees = spring.cancel();
                velocity
            }
            _ => 0.0,
        };
        let spring = Spring::start_with_velocity(
            config,
            self.angle_degrees,
            velocity,
            target,
            now,
        );
        self.phase = if spring.is_active() {
            RotationPhase::Settling(spring)
        } else {
            self.angle_degrees = target;
            RotationPhase::Idle
        };
        self.notify();
    }

    /// Drop out of `Settling` or `Dragging` where the angle is now.
    pub fn stop(&mut self) {
        if let RotationPhase::Settling(spring) = &mut self.phase {
            self.angle_degrees = spring.cancel();
        }
        if !matches!(self.phase, RotationPhase::Idle) {
            self.phase = RotationPhase::Idle;
            self.notify();
        }
    }

    /// Advance the settle spring. Returns true while still settling.
    pub fn tick(&mut self, now: Instant) -> bool {
        let RotationPhase::Settling(spring) = &mut self.phase else {
            return false;
        };
        let active = spring.tick(now);
        self.angle_degrees = spring.current();
        if !active {
            trace!("Settled at {}", self.angle_degrees);
            self.phase = RotationPhase::Idle;
        }
        self.notify();
        active
    }

    fn notify(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn drag_writes_origin_plus_delta() {
        let mut state = RotationState::new(40.0);
        assert!(!state.apply_drag(10.0), "ignored while idle");
        assert_eq!(state.begin_drag(), 40.0);
        assert!(state.apply_drag(-15.0));
        assert_eq!(state.current_angle(), 25.0);
        assert!(state.apply_drag(5.0));
        assert_eq!(state.current_angle(), 45.0);
        assert!(!state.apply_drag(f32::NAN));
        assert_eq!(state.current_angle(), 45.0);
    }

    #[test]
    fn listeners_see_every_change_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = RotationState::new(0.0);
        let id = state.subscribe({
            let seen = Rc::clone(&seen);
            move |snap: &RotationSnapshot| {
                seen.borrow_mut().push((snap.angle_degrees, snap.phase))
            }
        });
        state.begin_drag();
        state.apply_drag(12.0);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.apply_drag(20.0);

        assert_eq!(
            *seen.borrow(),
            vec![(0.0, PhaseKind::Dragging), (12.0, PhaseKind::Dragging)]
        );
        assert_eq!(state.revision(), 3);
    }

    #[test]
    fn settle_then_idle() {
        let t0 = Instant::now();
        let mut state = RotationState::new(0.0);
        state.settle_to(30.0, SpringConfig::default(), t0);
        assert!(state.is_settling());
        assert_eq!(state.settle_target(), Some(30.0));

        let mut now = t0;
        for _ in 0..500 {
            now += Duration::from_millis(16);
            if !state.tick(now) {
                break;
            }
        }
        assert_eq!(state.phase_kind(), PhaseKind::Idle);
        assert_eq!(state.current_angle(), 30.0);
    }

    #[test]
    fn settle_to_current_angle_stays_idle() {
        let mut state = RotationState::new(90.0);
        state.settle_to(90.0, SpringConfig::default(), Instant::now());
        assert_eq!(state.phase_kind(), PhaseKind::Idle);
    }

    #[test]
    fn grant_interrupts_settle_at_interpolated_value() {
        let t0 = Instant::now();
        let mut state = RotationState::new(0.0);
        state.settle_to(120.0, SpringConfig::default(), t0);
        state.tick(t0 + Duration::from_millis(40));
        let mid = state.current_angle();
        assert!(mid > 0.0 && mid < 120.0);

        let origin = state.begin_drag();
        assert!(state.is_dragging());
        assert_eq!(origin, mid);
        // ticks no longer move the angle
        assert!(!state.tick(t0 + Duration::from_millis(80)));
        assert_eq!(state.current_angle(), mid);
    }

    #[test]
    fn retarget_keeps_position_and_velocity() {
        let t0 = Instant::now();
        let mut state = RotationState::new(0.0);
        state.settle_to(100.0, SpringConfig::default(), t0);
        state.tick(t0 + Duration::from_millis(30));
        let mid = state.current_angle();

        state.settle_to(
            -50.0,
            SpringConfig::default(),
            t0 + Duration::from_millis(30),
        );
        assert_eq!(state.current_angle(), mid);
        let RotationPhase::Settling(spring) = state.phase() else {
            panic!("expected settling");
        };
        assert_eq!(spring.target(), -50.0);
        assert!(spring.velocity() > 0.0, "momentum carried over");
    }
}
