//! The row of buttons that selects a view.

use crate::geometry::{Rect, Size};
use crate::view::View;

pub const BUTTON_SIZE: Size = Size {
    width: 128.0,
    height: 40.0,
};
pub const BUTTON_GAP: f32 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub view: View,
    pub rect: Rect,
}

impl Button {
    pub fn label(&self) -> &'static str {
        self.view.name()
    }
}

/// One button per view, laid out in a centered row
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonBar {
    buttons: Vec<Button>,
}

impl ButtonBar {
    pub fn new(center_x: f32, top: f32) -> Self {
        let count = View::ALL.len() as f32;
        let row_width = count * BUTTON_SIZE.width + (count - 1.0) * BUTTON_GAP;
        let mut x = center_x - row_width / 2.0;

        let buttons = View::ALL
            .into_iter()
            .map(|view| {
                let rect = Rect::new(x, top, BUTTON_SIZE.width, BUTTON_SIZE.height);
                x += BUTTON_SIZE.width + BUTTON_GAP;
                Button { view, rect }
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// The view whose button contains the point, if any
    pub fn hit(&self, x: f32, y: f32) -> Option<View> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(x, y))
            .map(|button| button.view)
    }
}
