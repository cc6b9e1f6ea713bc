use std::time::Instant;

use crate::{AnimationFrame, AnimationSpec, Lerp, Simulation};

/// A value that moves toward its target over time instead of jumping to it.
///
/// Retargeting while an animation is in flight starts the new animation from whatever is
/// displayed at that frame, so the value never jumps.
#[derive(Debug)]
pub struct AnimatedValue<T> {
    source: T,
    target: T,
    active: Option<ActiveAnimation>,
}

#[derive(Debug)]
struct ActiveAnimation {
    start_time: Instant,
    simulation: Box<dyn Simulation>,
}

impl<T> AnimatedValue<T>
where
    T: Lerp + PartialEq + Clone,
{
    pub fn new(value: T) -> Self {
        Self {
            source: value.clone(),
            target: value,
            active: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn value(&self, frame: &AnimationFrame) -> T {
        let Some(active) = &self.active else {
            return self.target.clone();
        };
        let elapsed = frame.time.saturating_duration_since(active.start_time);
        let state = active.simulation.state(elapsed);
        if state.completed {
            return self.target.clone();
        }
        self.source.lerp(&self.target, state.x)
    }

    pub fn is_animating(&self, frame: &AnimationFrame) -> bool {
        self.active.as_ref().is_some_and(|active| {
            !active
                .simulation
                .completed(frame.time.saturating_duration_since(active.start_time))
        })
    }

    /// Starts moving toward `target`. Returns false, leaving any running animation alone, if
    /// `target` is already the target.
    pub fn animate_to(&mut self, target: T, spec: &AnimationSpec, frame: &AnimationFrame) -> bool {
        if target == self.target {
            return false;
        }
        let current = self.value(frame);
        match spec.create_simulation() {
            Some(simulation) => {
                self.source = current;
                self.target = target;
                self.active = Some(ActiveAnimation {
                    start_time: frame.time,
                    simulation,
                });
            }
            None => self.snap_to(target),
        }
        true
    }

    pub fn snap_to(&mut self, value: T) {
        self.source = value.clone();
        self.target = value;
        self.active = None;
    }
}
