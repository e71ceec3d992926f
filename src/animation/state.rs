use std::time::Duration;

use super::{duration_ms, Animatable, SpringState, TimingFunction, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running, in its delay, or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Animation state for one animatable property.
///
/// Time is supplied by the caller through [`tick`](Self::tick), so the same
/// sequence of ticks always produces the same sequence of values.
#[derive(Debug)]
pub struct AnimationState<T: Animatable> {
    current: T,
    target: T,
    start: T,
    /// Time since the animation (including its delay) started
    elapsed: Duration,
    transition: Transition,
    spring_state: Option<SpringState>,
    running: bool,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            elapsed: Duration::ZERO,
            spring_state: None,
            transition,
            running: false,
        }
    }

    /// Replace the transition used by the next animation
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Start animating from the current value to a new target.
    ///
    /// An in-flight animation is interrupted and continues from wherever it
    /// currently is.
    pub fn animate_to(&mut self, new_target: T) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }
        let from = self.current.clone();
        self.restart(from, new_target);
    }

    /// Jump to `from` and animate to `to`, even if `to` is the current target.
    pub fn restart(&mut self, from: T, to: T) {
        self.start = from.clone();
        self.current = from;
        self.target = to;
        self.elapsed = Duration::ZERO;
        self.spring_state = self.transition.timing.is_spring().then(SpringState::new);
        self.running = true;
    }

    /// Advance the animation by `dt` and return whether the value changed
    pub fn tick(&mut self, dt: Duration) -> AdvanceResult<T> {
        if !self.running {
            return AdvanceResult::NoChange;
        }

        self.elapsed += dt;
        let adjusted_elapsed = duration_ms(self.elapsed) - self.transition.delay_ms;
        if adjusted_elapsed <= 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let (eased_t, finished) = match (&mut self.spring_state, &self.transition.timing) {
            (Some(spring_state), TimingFunction::Spring(config)) => {
                let position = spring_state.step(adjusted_elapsed / 1000.0, config);
                (position, spring_state.is_settled(0.01))
            }
            (_, timing) => {
                let t = if self.transition.duration_ms > 0.0 {
                    (adjusted_elapsed / self.transition.duration_ms).min(1.0)
                } else {
                    1.0
                };
                (timing.evaluate(t), t >= 1.0)
            }
        };

        let new_value = if finished {
            self.running = false;
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, eased_t)
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: T) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.spring_state = None;
        self.running = false;
    }
}
