pub mod animation;
pub mod controller;
pub mod controls;
pub mod geometry;
pub mod island;
pub mod params;
pub mod presence;
pub mod reactive;
pub mod scene;
pub mod shell;
pub mod transition;
pub mod view;

mod app;

pub use app::{AppConfig, Command, CommandError, FrameCallback, IslandApp, IslandError};

pub mod prelude {
    pub use crate::animation::{SpringConfig, Transition};
    pub use crate::controller::ViewTransitionController;
    pub use crate::geometry::{Rect, Size};
    pub use crate::island::{Island, IslandConfig};
    pub use crate::params::{ContentParams, DEFAULT_BOUNCE};
    pub use crate::reactive::{batch, create_effect, create_signal, ChangeFlags, Effect, Signal};
    pub use crate::scene::Scene;
    pub use crate::transition::TransitionKey;
    pub use crate::view::{ParseViewError, View};
    pub use crate::{AppConfig, IslandApp};
}
