use std::cell::Cell;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what aspects of the island need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Shell size changed, so layout (and paint) must be redone
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

thread_local! {
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Request that a new frame be rendered
pub fn request_frame() {
    FRAME_REQUESTED.with(|requested| requested.set(true));
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|requested| requested.replace(false))
}
