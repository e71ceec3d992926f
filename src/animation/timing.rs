//! Timing functions (easing curves) for animations.
//!
//! - [`TimingFunction::Linear`] - Constant speed, used for opacity fades
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::Spring`] - Physics-based spring (can overshoot)

use super::spring::SpringConfig;

/// Timing function that controls the animation curve
#[derive(Clone, Debug, PartialEq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Spring physics simulation (can overshoot)
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    ///
    /// Springs are stepped with real elapsed time by the animation state,
    /// so this returns `t` unchanged for them.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::Spring(_) => t,
        }
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, TimingFunction::Spring(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5);
        assert_eq!(TimingFunction::EaseOut.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let early = TimingFunction::EaseInOut.evaluate(0.25);
        let late = TimingFunction::EaseInOut.evaluate(0.75);
        assert!((early + late - 1.0).abs() < 1e-6);
    }
}
