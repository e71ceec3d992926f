use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::Size;

/// One of the mutually exclusive displays the island can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    Idle,
    Ring,
    Timer,
}

impl View {
    /// Every view, in button order.
    pub const ALL: [View; 3] = [View::Idle, View::Ring, View::Timer];

    /// The view shown before any selection.
    pub const INITIAL: View = View::Idle;

    pub fn name(self) -> &'static str {
        match self {
            View::Idle => "idle",
            View::Ring => "ring",
            View::Timer => "timer",
        }
    }

    /// Size of the leaf visual this view puts inside the shell.
    pub fn content_size(self) -> Size {
        match self {
            // The idle pill is an empty 28px-high spacer; the shell's
            // minimum width gives it its shape.
            View::Idle => Size::new(0.0, 28.0),
            View::Ring => Size::new(148.0, 28.0),
            View::Timer => Size::new(232.0, 48.0),
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::INITIAL
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown view {0:?}, expected one of idle, ring, timer")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseViewError(trimmed.to_string()))
    }
}
