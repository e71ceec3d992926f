//! Spring tuning for each transition key.
//!
//! Both tables are indexed by [`TransitionKey`] through an exhaustive `match`
//! and cover the same seven keys. Self transitions (`idle-idle`,
//! `ring-ring`, `timer-timer`) have no entry; [`shell_bounce`] and
//! [`content_params`] return `None` for them and the `resolved_*` variants
//! fall back to [`DEFAULT_BOUNCE`] and [`ContentParams::NEUTRAL`].

use crate::transition::TransitionKey;
use crate::view::View;

/// Bounce used when a key has no table entry.
pub const DEFAULT_BOUNCE: f32 = 0.25;

/// Exit motion of outgoing content, and the bounce of its spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentParams {
    pub scale: f32,
    /// Vertical offset in logical pixels, positive is down.
    pub y: Option<f32>,
    /// Extra horizontal scale applied on top of `scale`.
    pub scale_x: Option<f32>,
    pub bounce: f32,
}

impl ContentParams {
    /// No scale or offset change.
    pub const NEUTRAL: Self = Self {
        scale: 1.0,
        y: None,
        scale_x: None,
        bounce: DEFAULT_BOUNCE,
    };

    const fn scaled(scale: f32, bounce: f32) -> Self {
        Self {
            scale,
            y: None,
            scale_x: None,
            bounce,
        }
    }

    const fn shifted(scale: f32, y: f32, bounce: f32) -> Self {
        Self {
            scale,
            y: Some(y),
            scale_x: None,
            bounce,
        }
    }

    /// Vertical offset, zero when absent.
    pub fn offset_y(&self) -> f32 {
        self.y.unwrap_or(0.0)
    }

    /// Effective horizontal scale.
    pub fn horizontal_scale(&self) -> f32 {
        self.scale * self.scale_x.unwrap_or(1.0)
    }
}

impl Default for ContentParams {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Spring bounce of the shell's layout animation.
pub fn shell_bounce(key: TransitionKey) -> Option<f32> {
    use View::*;

    match key {
        TransitionKey::Initial(Idle) => Some(0.5),
        TransitionKey::Between { from, to } => match (from, to) {
            (Ring, Idle) => Some(0.5),
            (Timer, Ring) => Some(0.35),
            (Ring, Timer) => Some(0.35),
            (Timer, Idle) => Some(0.3),
            (Idle, Timer) => Some(0.3),
            (Idle, Ring) => Some(0.5),
            (Idle, Idle) | (Ring, Ring) | (Timer, Timer) => None,
        },
        TransitionKey::Initial(Ring | Timer) => None,
    }
}

/// Exit motion of the outgoing content.
pub fn content_params(key: TransitionKey) -> Option<ContentParams> {
    use View::*;

    match key {
        TransitionKey::Initial(Idle) => Some(ContentParams::scaled(1.0, 0.5)),
        TransitionKey::Between { from, to } => match (from, to) {
            (Idle, Timer) => Some(ContentParams::shifted(1.4, 7.5, 0.3)),
            (Idle, Ring) => Some(ContentParams::scaled(1.1, 0.5)),
            (Ring, Idle) => Some(ContentParams {
                scale_x: Some(0.9),
                ..ContentParams::scaled(0.9, 0.5)
            }),
            (Timer, Ring) => Some(ContentParams::shifted(0.7, -7.5, 0.35)),
            (Ring, Timer) => Some(ContentParams::shifted(1.4, 7.5, 0.35)),
            (Timer, Idle) => Some(ContentParams::shifted(0.7, -7.5, 0.3)),
            (Idle, Idle) | (Ring, Ring) | (Timer, Timer) => None,
        },
        TransitionKey::Initial(Ring | Timer) => None,
    }
}

pub fn resolved_shell_bounce(key: TransitionKey) -> f32 {
    shell_bounce(key).unwrap_or_else(|| {
        log::debug!("no shell bounce for {key}, using {DEFAULT_BOUNCE}");
        DEFAULT_BOUNCE
    })
}

pub fn resolved_content_params(key: TransitionKey) -> ContentParams {
    content_params(key).unwrap_or_else(|| {
        log::debug!("no content params for {key}, using neutral motion");
        ContentParams::NEUTRAL
    })
}
