pub mod effect;
pub mod invalidation;
pub mod runtime;
pub mod signal;

pub use effect::{create_effect, Effect};
pub use invalidation::{request_frame, take_frame_request, ChangeFlags};
pub use runtime::batch;
pub use signal::{create_signal, Signal};
