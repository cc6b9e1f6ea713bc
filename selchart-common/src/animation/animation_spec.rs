use std::{fmt::Debug, sync::Arc, time::Duration};

use crate::{Simulation, SpringSimulation, Tween, TweenSimulation, EASE};

/// How an animated value travels to a new target.
#[derive(Clone)]
pub enum AnimationSpec {
    Tween {
        duration: Duration,
        curve: Option<Arc<dyn Tween<Output = f32> + Send + Sync>>,
    },
    Spring {
        damping_ratio: f32,
        stiffness: f32,
    },
    /// Jump to the target without animating.
    Snap,
}

impl AnimationSpec {
    pub fn tween(
        duration: Duration,
        curve: impl Tween<Output = f32> + Send + Sync + 'static,
    ) -> Self {
        Self::Tween {
            duration,
            curve: Some(Arc::new(curve)),
        }
    }

    pub fn spring(damping_ratio: f32, stiffness: f32) -> Self {
        Self::Spring {
            damping_ratio,
            stiffness,
        }
    }

    /// `None` when the target should be applied at once.
    pub fn create_simulation(&self) -> Option<Box<dyn Simulation>> {
        match self {
            AnimationSpec::Tween { duration, curve } => Some(Box::new(TweenSimulation {
                duration: *duration,
                curve: curve.clone(),
            })),
            AnimationSpec::Spring {
                damping_ratio,
                stiffness,
            } => Some(Box::new(SpringSimulation::new(*damping_ratio, *stiffness))),
            AnimationSpec::Snap => None,
        }
    }
}

impl Debug for AnimationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tween { duration, curve } => f
                .debug_struct("Tween")
                .field("duration", duration)
                .field("curved", &curve.is_some())
                .finish(),
            Self::Spring {
                damping_ratio,
                stiffness,
            } => f
                .debug_struct("Spring")
                .field("damping_ratio", damping_ratio)
                .field("stiffness", stiffness)
                .finish(),
            Self::Snap => write!(f, "Snap"),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref DEFAULT_ROTATION_ANIMATION: AnimationSpec =
        AnimationSpec::tween(Duration::from_millis(500), EASE);
    pub static ref DEFAULT_SEGMENT_ANIMATION: AnimationSpec = AnimationSpec::spring(
        SpringSimulation::DAMPING_RATIO_NO_BOUNCY,
        SpringSimulation::STIFFNESS_MEDIUM,
    );
}
