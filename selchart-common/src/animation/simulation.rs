use std::{fmt::Debug, sync::Arc, time::Duration};

use crate::Tween;

/// Progress of an animation as a function of the time elapsed since it started.
///
/// Every simulation in this crate runs from 0.0 to 1.0. Callers map that progress onto
/// their own value range with [crate::Lerp].
pub trait Simulation: Debug + Send + Sync + 'static {
    fn state(&self, time: Duration) -> SimulationState {
        SimulationState {
            x: self.x(time),
            dx: self.dx(time),
            completed: self.completed(time),
        }
    }

    fn x(&self, time: Duration) -> f32;

    fn dx(&self, time: Duration) -> f32;

    fn completed(&self, time: Duration) -> bool;

    fn clone_box(&self) -> Box<dyn Simulation>;
}

impl Clone for Box<dyn Simulation> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct SimulationState {
    pub x: f32,
    pub dx: f32,
    pub completed: bool,
}

/// Runs progress through a curve over a fixed duration.
#[derive(Clone)]
pub struct TweenSimulation {
    pub duration: Duration,
    pub curve: Option<Arc<dyn Tween<Output = f32> + Send + Sync>>,
}

impl Debug for TweenSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenSimulation")
            .field("duration", &self.duration)
            .field("curved", &self.curve.is_some())
            .finish()
    }
}

impl TweenSimulation {
    fn linear_progress(&self, time: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        ((time.as_nanos() as f64 / self.duration.as_nanos() as f64) as f32).clamp(0.0, 1.0)
    }
}

const TWEEN_DERIVATIVE_STEP: Duration = Duration::from_millis(1);

impl Simulation for TweenSimulation {
    fn x(&self, time: Duration) -> f32 {
        let t = self.linear_progress(time);
        match &self.curve {
            Some(curve) => curve.interp(t),
            None => t,
        }
    }

    fn dx(&self, time: Duration) -> f32 {
        if self.completed(time) {
            return 0.0;
        }
        let next = self.x(time + TWEEN_DERIVATIVE_STEP);
        (next - self.x(time)) / TWEEN_DERIVATIVE_STEP.as_secs_f32()
    }

    fn completed(&self, time: Duration) -> bool {
        time >= self.duration
    }

    fn clone_box(&self) -> Box<dyn Simulation> {
        Box::new(self.clone())
    }
}

/// A damped harmonic oscillator released at rest from 0.0 and pulled toward 1.0.
///
/// `stiffness` is per unit mass, so the undamped angular frequency is `sqrt(stiffness)`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SpringSimulation {
    pub damping_ratio: f32,
    pub stiffness: f32,
}

/// Displacement from the rest position below which a spring counts as settled.
const SPRING_DISPLACEMENT_THRESHOLD: f64 = 1e-3;
/// Speed in progress per second below which a spring counts as settled.
const SPRING_VELOCITY_THRESHOLD: f64 = 1e-2;

impl SpringSimulation {
    /// No overshoot, settles as fast as possible without oscillating.
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_LOW: f32 = 200.0;

    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        debug_assert!(damping_ratio > 0.0, "Spring damping ratio must be positive");
        debug_assert!(stiffness > 0.0, "Spring stiffness must be positive");
        Self {
            damping_ratio,
            stiffness,
        }
    }

    /// Displacement from the rest position and its derivative.
    fn displacement(&self, time: Duration) -> (f64, f64) {
        let t = time.as_secs_f64();
        let zeta = self.damping_ratio as f64;
        let omega = (self.stiffness as f64).sqrt();
        // Released at rest, one unit short of the rest position.
        let y0 = -1.0;
        let v0 = 0.0;
        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = y0;
            let b = (v0 + zeta * omega * a) / omega_d;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let y = decay * (a * cos + b * sin);
            let dy = decay
                * ((b * omega_d - zeta * omega * a) * cos - (a * omega_d + zeta * omega * b) * sin);
            (y, dy)
        } else if zeta == 1.0 {
            let a = y0;
            let b = v0 + omega * a;
            let decay = (-omega * t).exp();
            let y = (a + b * t) * decay;
            let dy = (b - omega * (a + b * t)) * decay;
            (y, dy)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * y0) / (r2 - r1);
            let c1 = y0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }

    /// Upper bounds on `|y|` and `|dy|` from `time` onward. Both only ever decrease once
    /// the spring is within the settle thresholds.
    fn settle_bounds(&self, time: Duration) -> (f64, f64) {
        let zeta = self.damping_ratio as f64;
        if zeta < 1.0 {
            // An oscillating spring crosses zero displacement at full speed, so bound it by
            // the amplitude of its decay envelope instead.
            let omega = (self.stiffness as f64).sqrt();
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a: f64 = -1.0;
            let b = zeta * omega * a / omega_d;
            let decay = (-zeta * omega * time.as_secs_f64()).exp();
            let velocity_amplitude = (b * omega_d - zeta * omega * a)
                .hypot(a * omega_d + zeta * omega * b);
            (decay * a.hypot(b), decay * velocity_amplitude)
        } else {
            let (y, dy) = self.displacement(time);
            (y.abs(), dy.abs())
        }
    }
}

impl Default for SpringSimulation {
    fn default() -> Self {
        Self::new(Self::DAMPING_RATIO_NO_BOUNCY, Self::STIFFNESS_MEDIUM)
    }
}

impl Simulation for SpringSimulation {
    fn x(&self, time: Duration) -> f32 {
        if self.completed(time) {
            return 1.0;
        }
        (1.0 + self.displacement(time).0) as f32
    }

    fn dx(&self, time: Duration) -> f32 {
        if self.completed(time) {
            return 0.0;
        }
        self.displacement(time).1 as f32
    }

    fn completed(&self, time: Duration) -> bool {
        let (y, dy) = self.settle_bounds(time);
        y < SPRING_DISPLACEMENT_THRESHOLD && dy < SPRING_VELOCITY_THRESHOLD
    }

    fn clone_box(&self) -> Box<dyn Simulation> {
        Box::new(*self)
    }
}
