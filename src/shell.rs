//! The pill-shaped container whose size morphs between views.

use std::time::Duration;

use crate::animation::{AnimationState, Transition};
use crate::geometry::{Rect, Size};
use crate::reactive::ChangeFlags;
use crate::view::View;

pub struct Shell {
    size: AnimationState<Size>,
    min_width: f32,
    corner_radius: f32,
    visual_duration: Duration,
}

impl Shell {
    pub fn new(view: View, min_width: f32, corner_radius: f32, visual_duration: Duration) -> Self {
        let mut size = AnimationState::new(Size::zero(), Transition::default());
        size.set_immediate(Self::fit(view, min_width));
        Self {
            size,
            min_width,
            corner_radius,
            visual_duration,
        }
    }

    /// Shell size wrapping a view's content
    fn fit(view: View, min_width: f32) -> Size {
        let content = view.content_size();
        Size::new(content.width.max(min_width), content.height)
    }

    /// Start morphing towards the size of `view` with a spring of `bounce`.
    ///
    /// Retargets an in-flight morph from the current size. Returns false when
    /// the shell is already at or heading to that size.
    pub fn morph_to(&mut self, view: View, bounce: f32) -> bool {
        let target = Self::fit(view, self.min_width);
        if *self.size.target() == target {
            return false;
        }
        self.size
            .set_transition(Transition::bounce(bounce, self.visual_duration));
        self.size.animate_to(target);
        log::debug!(
            "shell morphing to {}x{} for {view} (bounce {bounce})",
            target.width,
            target.height
        );
        true
    }

    pub fn tick(&mut self, dt: Duration) -> ChangeFlags {
        if self.size.tick(dt).is_changed() {
            ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT
        } else {
            ChangeFlags::empty()
        }
    }

    pub fn size(&self) -> Size {
        *self.size.current()
    }

    pub fn is_animating(&self) -> bool {
        self.size.is_animating()
    }

    /// Corner radius, never more than half the current height
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.min(self.size().height.max(0.0) / 2.0)
    }

    pub fn rect(&self, center_x: f32, top: f32) -> Rect {
        Rect::centered(center_x, top, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn shell() -> Shell {
        Shell::new(View::Idle, 100.0, 32.0, Duration::from_millis(300))
    }

    #[test]
    fn test_idle_uses_min_width() {
        let shell = shell();
        assert_eq!(shell.size(), Size::new(100.0, 28.0));
        assert_eq!(shell.corner_radius(), 14.0);
        assert!(!shell.is_animating());
    }

    #[test]
    fn test_morph_reaches_content_size() {
        let mut shell = shell();
        assert!(shell.morph_to(View::Timer, 0.3));

        let first = shell.tick(FRAME);
        assert!(first.contains(ChangeFlags::NEEDS_LAYOUT));

        for _ in 0..200 {
            shell.tick(FRAME);
        }
        assert!(!shell.is_animating());
        assert_eq!(shell.size(), View::Timer.content_size());
        assert_eq!(shell.corner_radius(), 24.0);
    }

    #[test]
    fn test_morph_to_same_view_is_noop() {
        let mut shell = shell();
        assert!(!shell.morph_to(View::Idle, 0.5));
        assert_eq!(shell.tick(FRAME), ChangeFlags::empty());
    }

    #[test]
    fn test_rect_is_centered() {
        let shell = shell();
        assert_eq!(shell.rect(200.0, 40.0), Rect::new(150.0, 40.0, 100.0, 28.0));
    }
}
