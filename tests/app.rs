use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use island::controls::ButtonBar;
use island::prelude::*;
use island::Command;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Gives up on a run that never reaches its expected frame
const MAX_FRAMES: usize = 2000;

#[test]
fn test_commands_drive_frames_until_sender_dropped() {
    init_logger();
    let config = IslandConfig::default();
    let timer = ButtonBar::new(config.canvas_width / 2.0, config.controls_top).buttons()[2]
        .rect;

    let (sender, commands) = calloop::channel::channel();
    sender.send(Command::Select(View::Ring)).unwrap();

    let keys = Rc::new(RefCell::new(Vec::new()));
    let painted = Rc::new(Cell::new(false));
    let mut sender = Some(sender);
    let mut clicked = false;
    let mut frames = 0;

    let app = {
        let keys = keys.clone();
        let painted = painted.clone();
        IslandApp::new()
            .frame_interval(Duration::from_millis(1))
            .on_frame(move |scene, flags| {
                frames += 1;
                keys.borrow_mut().push(scene.key.to_string());
                if flags.contains(ChangeFlags::NEEDS_PAINT) {
                    painted.set(true);
                }

                let key = scene.key.to_string();
                if key == "idle-ring" && !clicked {
                    clicked = true;
                    if let Some(sender) = &sender {
                        let click = Command::Click {
                            x: timer.x + timer.width / 2.0,
                            y: timer.y + timer.height / 2.0,
                        };
                        sender.send(click).unwrap();
                    }
                }
                if key == "ring-timer" || frames > MAX_FRAMES {
                    // Closing the channel stops the loop
                    sender = None;
                }
            })
    };

    app.run_with(commands).unwrap();

    let keys = keys.borrow();
    assert!(painted.get());
    assert!(keys.iter().any(|key| key == "idle-ring"));
    assert_eq!(keys.last().map(String::as_str), Some("ring-timer"));
}

#[test]
fn test_quit_stops_the_loop() {
    init_logger();
    let (sender, commands) = calloop::channel::channel();
    sender.send(Command::Select(View::Timer)).unwrap();
    sender.send(Command::Quit).unwrap();

    IslandApp::new()
        .frame_interval(Duration::from_millis(1))
        .run_with(commands)
        .unwrap();
    drop(sender);
}

#[test]
fn test_caller_effects_survive_an_app_run() {
    init_logger();
    let controller = ViewTransitionController::new();
    let runs = Rc::new(Cell::new(0));

    let _effect = {
        let controller = controller.clone();
        let runs = runs.clone();
        create_effect(move || {
            controller.view();
            runs.set(runs.get() + 1);
        })
    };
    controller.select_view(View::Ring);
    assert_eq!(runs.get(), 2);

    let (sender, commands) = calloop::channel::channel();
    sender.send(Command::Select(View::Timer)).unwrap();
    sender.send(Command::Quit).unwrap();
    IslandApp::new()
        .frame_interval(Duration::from_millis(1))
        .run_with(commands)
        .unwrap();

    controller.select_view(View::Timer);
    assert_eq!(runs.get(), 3);
    assert_eq!(controller.transition_key().to_string(), "ring-timer");

    // A signal created after the run must not be confused with older ones
    let later = create_signal(0);
    let later_runs = Rc::new(Cell::new(0));
    let _later_effect = {
        let later = later.clone();
        let later_runs = later_runs.clone();
        create_effect(move || {
            later.get();
            later_runs.set(later_runs.get() + 1);
        })
    };
    later.set(1);
    assert_eq!(later_runs.get(), 2);
    controller.select_view(View::Idle);
    assert_eq!(runs.get(), 4);
}

#[test]
fn test_builder_sizes_the_shell() {
    init_logger();
    let (sender, commands) = calloop::channel::channel::<Command>();
    let seen = Rc::new(RefCell::new(None));
    let mut sender = Some(sender);

    let app = {
        let seen = seen.clone();
        IslandApp::new()
            .frame_interval(Duration::from_millis(1))
            .min_width(180.0)
            .corner_radius(10.0)
            .on_frame(move |scene, _| {
                if seen.borrow().is_none() {
                    *seen.borrow_mut() = Some(scene.shell.clone());
                }
                sender = None;
            })
    };
    app.run_with(commands).unwrap();

    let shell = seen.borrow().clone().expect("the enter animation paints a frame");
    assert_eq!(shell.rect.size(), Size::new(180.0, 28.0));
    assert_eq!(shell.corner_radius, 10.0);
}
