use std::time::Duration;

use island::prelude::*;

fn main() -> Result<(), island::IslandError> {
    // Type idle / ring / timer (or `click <x> <y>`) and press enter; `q` quits.
    // Run with RUST_LOG=island=trace to see every frame.
    IslandApp::new()
        .frame_interval(Duration::from_millis(16))
        .visual_duration(Duration::from_millis(300))
        .on_frame(|scene, flags| {
            if flags.contains(ChangeFlags::NEEDS_LAYOUT) {
                println!("{scene}");
            }
        })
        .run()
}
