//! Per-frame snapshot of everything the island draws.

use std::fmt;

use crate::controls::Button;
use crate::geometry::Rect;
use crate::transition::TransitionKey;
use crate::view::View;

#[derive(Debug, Clone, PartialEq)]
pub struct ShellVisual {
    pub rect: Rect,
    pub corner_radius: f32,
}

/// One piece of content with its animated paint properties
#[derive(Debug, Clone, PartialEq)]
pub struct LayerVisual {
    pub view: View,
    /// Unscaled bounds, before `offset_y`
    pub rect: Rect,
    pub opacity: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub offset_y: f32,
    pub blur: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view: View,
    pub key: TransitionKey,
    pub shell: ShellVisual,
    pub content: LayerVisual,
    pub exiting: Option<LayerVisual>,
    pub buttons: Vec<Button>,
}

impl fmt::Display for LayerVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} opacity={:.2} scale={:.2}x{:.2} y={:+.1} blur={:.1}",
            self.view, self.opacity, self.scale_x, self.scale_y, self.offset_y, self.blur
        )
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] shell {:.1}x{:.1} r={:.1} | {}",
            self.key,
            self.shell.rect.width,
            self.shell.rect.height,
            self.shell.corner_radius,
            self.content
        )?;
        if let Some(exiting) = &self.exiting {
            write!(f, " | exiting {exiting}")?;
        }
        Ok(())
    }
}
