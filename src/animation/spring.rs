use std::f32::consts::PI;

/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
}

impl SpringConfig {
    /// Perceived duration of a bounce-tuned spring when none is given, in seconds
    pub const DEFAULT_VISUAL_DURATION: f32 = 0.3;

    /// Default spring with pleasant overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    /// Build a spring from a bounce coefficient and a perceived duration.
    ///
    /// `bounce` 0.0 is critically damped, values towards 1.0 oscillate more.
    /// The damping ratio is clamped to [0.05, 1.0] so the spring always settles.
    pub fn from_bounce(bounce: f32, visual_duration_secs: f32) -> Self {
        let duration = visual_duration_secs.max(0.01);
        let root = 2.0 * PI / (duration * 1.2);
        let stiffness = root * root;
        let damping_ratio = (1.0 - bounce).clamp(0.05, 1.0);
        Self {
            mass: 1.0,
            stiffness,
            damping: 2.0 * damping_ratio * stiffness.sqrt(),
        }
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// State for spring physics simulation
#[derive(Clone, Debug, Default)]
pub struct SpringState {
    /// Current position (0.0 = start, 1.0 = target)
    pub position: f32,
    /// Current velocity
    pub velocity: f32,
    /// Last evaluation time
    pub last_t: f32,
}

impl SpringState {
    /// Create a new spring state starting at position 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Step the spring simulation forward to `elapsed_secs` since the animation
    /// started. Returns the current position, which can overshoot 1.0.
    pub fn step(&mut self, elapsed_secs: f32, config: &SpringConfig) -> f32 {
        let dt = (elapsed_secs - self.last_t).max(0.0);
        self.last_t = elapsed_secs;

        if dt < 1e-6 {
            return self.position;
        }

        // Cap individual timestep for numerical stability (~30fps minimum)
        let capped_dt = dt.min(0.033);

        let displacement = self.position - 1.0;
        let force = -config.stiffness * displacement - config.damping * self.velocity;
        let acceleration = force / config.mass;

        // Semi-implicit Euler
        self.velocity += acceleration * capped_dt;
        self.position += self.velocity * capped_dt;

        self.position
    }

    /// Check if the spring has settled (position near target, velocity near zero)
    pub fn is_settled(&self, threshold: f32) -> bool {
        (self.position - 1.0).abs() < threshold && self.velocity.abs() < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &SpringConfig, frames: usize) -> (SpringState, f32) {
        let mut state = SpringState::new();
        let mut max_position: f32 = 0.0;
        for i in 1..=frames {
            let pos = state.step(i as f32 / 60.0, config);
            max_position = max_position.max(pos);
        }
        (state, max_position)
    }

    #[test]
    fn test_spring_reaches_target() {
        let (state, _) = run(&SpringConfig::DEFAULT, 120);
        assert!(
            (state.position - 1.0).abs() < 0.1,
            "Spring should settle near target, got {}",
            state.position
        );
    }

    #[test]
    fn test_bouncier_spring_overshoots_more() {
        let visual = SpringConfig::DEFAULT_VISUAL_DURATION;
        let (_, calm) = run(&SpringConfig::from_bounce(0.3, visual), 120);
        let (_, bouncy) = run(&SpringConfig::from_bounce(0.5, visual), 120);
        assert!(bouncy > calm, "bouncy max {bouncy} should exceed calm max {calm}");
        assert!(bouncy > 1.0);
    }

    #[test]
    fn test_zero_bounce_is_critically_damped() {
        let config = SpringConfig::from_bounce(0.0, 0.3);
        assert!((config.damping_ratio() - 1.0).abs() < 1e-4);

        let (state, max_position) = run(&config, 120);
        assert!(max_position < 1.02, "overshot to {max_position}");
        assert!(state.is_settled(0.01));
    }

    #[test]
    fn test_bounce_is_clamped() {
        let config = SpringConfig::from_bounce(2.0, 0.3);
        assert!((config.damping_ratio() - 0.05).abs() < 1e-4);
    }
}
