mod animatable;
mod spring;
mod state;
mod timing;

pub use animatable::Animatable;
pub use spring::{SpringConfig, SpringState};
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

use std::time::Duration;

/// Configuration for how a property should animate when it changes
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// Create a spring-based transition with the given configuration
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            // Springs run until settled; this is only an upper bound
            duration_ms: 1000.0,
            timing: TimingFunction::Spring(config),
            delay_ms: 0.0,
        }
    }

    /// Spring transition tuned by a bounce coefficient
    pub fn bounce(bounce: f32, visual_duration: Duration) -> Self {
        Self::spring(SpringConfig::from_bounce(
            bounce,
            visual_duration.as_secs_f32(),
        ))
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Milliseconds in `duration`, exact for whole microseconds
pub(crate) fn duration_ms(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1000.0
}

impl Default for Transition {
    fn default() -> Self {
        Self::spring(SpringConfig::DEFAULT)
    }
}
