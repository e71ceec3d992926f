//! Keyed enter/exit of the island's content.
//!
//! The content shown inside the shell is identified by its [`View`]. Moving
//! to a different view mounts a fresh entering layer and pops the old one out
//! into a single exit layer driven by the transition's [`ContentParams`].

use std::time::Duration;

use crate::animation::{duration_ms, AnimationState, TimingFunction, Transition};
use crate::params::ContentParams;
use crate::reactive::ChangeFlags;
use crate::view::View;

/// Blur applied to content before it enters and after it exits, in pixels
pub const HIDDEN_BLUR: f32 = 5.0;
/// Scale content enters from
pub const ENTER_SCALE: f32 = 0.9;

/// Timing shared by every layer
#[derive(Clone, Debug, PartialEq)]
pub struct PresenceTiming {
    pub visual_duration: Duration,
    pub enter_delay: Duration,
    pub exit_fade: Duration,
}

impl Default for PresenceTiming {
    fn default() -> Self {
        Self {
            visual_duration: Duration::from_millis(300),
            enter_delay: Duration::from_millis(50),
            exit_fade: Duration::from_millis(300),
        }
    }
}

/// Content currently mounted in the shell
pub struct EnterLayer {
    view: View,
    opacity: AnimationState<f32>,
    scale: AnimationState<f32>,
    blur: AnimationState<f32>,
}

impl EnterLayer {
    fn mount(view: View, bounce: f32, timing: &PresenceTiming) -> Self {
        let transition = Transition::bounce(bounce, timing.visual_duration)
            .delay(duration_ms(timing.enter_delay));

        let mut opacity = AnimationState::new(0.0, transition.clone());
        let mut scale = AnimationState::new(ENTER_SCALE, transition.clone());
        let mut blur = AnimationState::new(HIDDEN_BLUR, transition);
        opacity.restart(0.0, 1.0);
        scale.restart(ENTER_SCALE, 1.0);
        blur.restart(HIDDEN_BLUR, 0.0);

        Self {
            view,
            opacity,
            scale,
            blur,
        }
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let opacity = self.opacity.tick(dt).is_changed();
        let scale = self.scale.tick(dt).is_changed();
        let blur = self.blur.tick(dt).is_changed();
        opacity || scale || blur
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Springs overshoot; opacity is clamped to [0, 1]
    pub fn opacity(&self) -> f32 {
        self.opacity.current().clamp(0.0, 1.0)
    }

    pub fn scale(&self) -> f32 {
        *self.scale.current()
    }

    pub fn blur(&self) -> f32 {
        self.blur.current().max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.scale.is_animating() || self.blur.is_animating()
    }
}

/// Outgoing content, removed once it has faded out
pub struct ExitLayer {
    view: View,
    opacity: AnimationState<f32>,
    blur: AnimationState<f32>,
    scale: AnimationState<f32>,
    scale_x: AnimationState<f32>,
    offset_y: AnimationState<f32>,
}

impl ExitLayer {
    fn start(view: View, params: ContentParams, timing: &PresenceTiming) -> Self {
        let fade_ms = duration_ms(timing.exit_fade);
        let motion = Transition::bounce(params.bounce, timing.visual_duration);

        let mut opacity = AnimationState::new(1.0, Transition::new(fade_ms, TimingFunction::Linear));
        let mut blur = AnimationState::new(0.0, Transition::new(fade_ms, TimingFunction::EaseOut));
        let mut scale = AnimationState::new(1.0, motion.clone());
        let mut scale_x = AnimationState::new(1.0, motion.clone());
        let mut offset_y = AnimationState::new(0.0, motion);
        opacity.restart(1.0, 0.0);
        blur.restart(0.0, HIDDEN_BLUR);
        scale.restart(1.0, params.scale);
        scale_x.restart(1.0, params.scale_x.unwrap_or(1.0));
        offset_y.restart(0.0, params.offset_y());

        Self {
            view,
            opacity,
            blur,
            scale,
            scale_x,
            offset_y,
        }
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let mut changed = self.opacity.tick(dt).is_changed();
        changed |= self.blur.tick(dt).is_changed();
        changed |= self.scale.tick(dt).is_changed();
        changed |= self.scale_x.tick(dt).is_changed();
        changed |= self.offset_y.tick(dt).is_changed();
        changed
    }

    fn is_finished(&self) -> bool {
        !self.opacity.is_animating()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.current().clamp(0.0, 1.0)
    }

    pub fn blur(&self) -> f32 {
        self.blur.current().max(0.0)
    }

    pub fn scale(&self) -> f32 {
        *self.scale.current()
    }

    /// Horizontal scale including the uniform scale
    pub fn scale_x(&self) -> f32 {
        self.scale() * self.scale_x.current()
    }

    pub fn offset_y(&self) -> f32 {
        *self.offset_y.current()
    }
}

pub struct Presence {
    timing: PresenceTiming,
    present: EnterLayer,
    exiting: Option<ExitLayer>,
}

impl Presence {
    /// Mount `view` and play its enter animation.
    pub fn new(view: View, bounce: f32, timing: PresenceTiming) -> Self {
        let present = EnterLayer::mount(view, bounce, &timing);
        Self {
            timing,
            present,
            exiting: None,
        }
    }

    /// Swap the mounted content for `view`.
    ///
    /// Reselecting the mounted view keeps it in place. Otherwise the old
    /// content exits with `params` and replaces any layer still exiting.
    /// Returns whether anything was remounted.
    pub fn show(&mut self, view: View, bounce: f32, params: ContentParams) -> bool {
        if view == self.present.view {
            return false;
        }

        let outgoing = self.present.view;
        if let Some(interrupted) = self.exiting.take() {
            log::trace!("dropping exit of {} for newer transition", interrupted.view);
        }
        self.exiting = Some(ExitLayer::start(outgoing, params, &self.timing));
        self.present = EnterLayer::mount(view, bounce, &self.timing);
        log::debug!("content {outgoing} exiting, {view} entering");
        true
    }

    pub fn tick(&mut self, dt: Duration) -> ChangeFlags {
        let mut changed = self.present.tick(dt);
        if let Some(exit) = self.exiting.as_mut() {
            changed |= exit.tick(dt);
            if exit.is_finished() {
                log::trace!("exit of {} finished", exit.view);
                self.exiting = None;
            }
        }

        if changed {
            ChangeFlags::NEEDS_PAINT
        } else {
            ChangeFlags::empty()
        }
    }

    pub fn present(&self) -> &EnterLayer {
        &self.present
    }

    pub fn exiting(&self) -> Option<&ExitLayer> {
        self.exiting.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.present.is_animating() || self.exiting.is_some()
    }
}
