use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::controller::ViewTransitionController;
use crate::controls::ButtonBar;
use crate::geometry::Rect;
use crate::params;
use crate::presence::{Presence, PresenceTiming};
use crate::reactive::{create_effect, ChangeFlags, Effect};
use crate::scene::{LayerVisual, Scene, ShellVisual};
use crate::shell::Shell;
use crate::transition::TransitionKey;
use crate::view::View;

/// Geometry and timing of the island
#[derive(Clone, Debug, PartialEq)]
pub struct IslandConfig {
    /// Width of the area the island is centered in
    pub canvas_width: f32,
    /// Top edge of the shell
    pub island_top: f32,
    /// Top edge of the button row
    pub controls_top: f32,
    pub min_width: f32,
    pub corner_radius: f32,
    pub timing: PresenceTiming,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            canvas_width: 480.0,
            island_top: 40.0,
            controls_top: 240.0,
            min_width: 100.0,
            corner_radius: 32.0,
            timing: PresenceTiming::default(),
        }
    }
}

/// Animated state driven by the controller
struct Stage {
    shell: Shell,
    presence: Presence,
}

impl Stage {
    fn apply(&mut self, view: View, key: TransitionKey) {
        let bounce = params::resolved_shell_bounce(key);
        let content = params::resolved_content_params(key);
        if key.is_self_transition() {
            log::debug!("{key} has no tuning, {view} stays mounted");
        }
        self.shell.morph_to(view, bounce);
        self.presence.show(view, bounce, content);
    }
}

/// A Dynamic Island: controller, shell, content and buttons wired together.
///
/// Selecting a view updates the controller; an effect subscribed to the
/// controller retargets the shell and swaps the content. [`tick`](Self::tick)
/// advances every animation and [`scene`](Self::scene) snapshots the result.
pub struct Island {
    config: IslandConfig,
    controller: ViewTransitionController,
    stage: Rc<RefCell<Stage>>,
    controls: ButtonBar,
    _effect: Effect,
}

impl Island {
    pub fn new(config: IslandConfig) -> Self {
        let controller = ViewTransitionController::new();
        let view = controller.view();
        let bounce = controller.shell_bounce();

        let stage = Rc::new(RefCell::new(Stage {
            shell: Shell::new(
                view,
                config.min_width,
                config.corner_radius,
                config.timing.visual_duration,
            ),
            presence: Presence::new(view, bounce, config.timing.clone()),
        }));

        let effect = {
            let controller = controller.clone();
            let stage = stage.clone();
            create_effect(move || {
                let view = controller.view();
                let key = controller.transition_key();
                stage.borrow_mut().apply(view, key);
            })
        };

        let center_x = config.canvas_width / 2.0;
        let controls = ButtonBar::new(center_x, config.controls_top);

        Self {
            config,
            controller,
            stage,
            controls,
            _effect: effect,
        }
    }

    pub fn select_view(&self, view: View) {
        self.controller.select_view(view);
    }

    /// Dispatch a pointer click. Returns the view selected, if a button was hit.
    pub fn click(&self, x: f32, y: f32) -> Option<View> {
        let view = self.controls.hit(x, y)?;
        self.select_view(view);
        Some(view)
    }

    pub fn controller(&self) -> &ViewTransitionController {
        &self.controller
    }

    pub fn controls(&self) -> &ButtonBar {
        &self.controls
    }

    /// Advance all animations by `dt`
    pub fn tick(&self, dt: Duration) -> ChangeFlags {
        let mut stage = self.stage.borrow_mut();
        stage.shell.tick(dt) | stage.presence.tick(dt)
    }

    pub fn is_animating(&self) -> bool {
        let stage = self.stage.borrow();
        stage.shell.is_animating() || stage.presence.is_animating()
    }

    pub fn scene(&self) -> Scene {
        let stage = self.stage.borrow();
        let center_x = self.config.canvas_width / 2.0;
        let top = self.config.island_top;
        let shell_rect = stage.shell.rect(center_x, top);

        // Content is centered in the shell; exiting content is pinned to the
        // shell's top edge and moves with its own offset.
        let present = stage.presence.present();
        let size = present.view().content_size();
        let content_rect = Rect::centered(
            center_x,
            shell_rect.y + (shell_rect.height - size.height) / 2.0,
            size,
        );
        let content = LayerVisual {
            view: present.view(),
            rect: content_rect,
            opacity: present.opacity(),
            scale_x: present.scale(),
            scale_y: present.scale(),
            offset_y: 0.0,
            blur: present.blur(),
        };

        let exiting = stage.presence.exiting().map(|exit| LayerVisual {
            view: exit.view(),
            rect: Rect::centered(center_x, top, exit.view().content_size()),
            opacity: exit.opacity(),
            scale_x: exit.scale_x(),
            scale_y: exit.scale(),
            offset_y: exit.offset_y(),
            blur: exit.blur(),
        });

        Scene {
            view: self.controller.view(),
            key: self.controller.transition_key(),
            shell: ShellVisual {
                rect: shell_rect,
                corner_radius: stage.shell.corner_radius(),
            },
            content,
            exiting,
            buttons: self.controls.buttons().to_vec(),
        }
    }
}

impl Default for Island {
    fn default() -> Self {
        Self::new(IslandConfig::default())
    }
}
