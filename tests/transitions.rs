use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use island::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn keys_for(sequence: &[View]) -> Vec<(String, f32, ContentParams)> {
    let controller = ViewTransitionController::new();
    sequence
        .iter()
        .map(|view| {
            controller.select_view(*view);
            (
                controller.transition_key().to_string(),
                controller.shell_bounce(),
                controller.content_params(),
            )
        })
        .collect()
}

#[test]
fn test_key_before_first_selection_is_initial_view() {
    init_logger();
    let controller = ViewTransitionController::new();
    assert_eq!(controller.transition_key(), TransitionKey::Initial(View::Idle));
    assert_eq!(controller.transition_key().to_string(), "idle");
}

#[test]
fn test_every_key_encodes_previous_and_next() {
    init_logger();
    let sequence = [
        View::Ring,
        View::Timer,
        View::Timer,
        View::Idle,
        View::Timer,
        View::Ring,
        View::Idle,
        View::Idle,
    ];
    let keys = keys_for(&sequence);

    let mut previous = View::Idle;
    for (view, (key, _, _)) in sequence.iter().zip(&keys) {
        assert_eq!(*key, format!("{previous}-{view}"));
        previous = *view;
    }
}

#[test]
fn test_idle_to_ring() {
    init_logger();
    let controller = ViewTransitionController::new();
    controller.select_view(View::Ring);

    assert_eq!(controller.transition_key().to_string(), "idle-ring");
    assert_eq!(controller.view(), View::Ring);
    assert_eq!(controller.shell_bounce(), 0.5);
    assert_eq!(controller.content_params().scale, 1.1);
}

#[test]
fn test_ring_to_timer() {
    init_logger();
    let controller = ViewTransitionController::new();
    controller.select_view(View::Ring);
    controller.select_view(View::Timer);

    let params = controller.content_params();
    assert_eq!(controller.transition_key().to_string(), "ring-timer");
    assert_eq!(controller.shell_bounce(), 0.35);
    assert_eq!(params.scale, 1.4);
    assert_eq!(params.y, Some(7.5));
}

#[test]
fn test_timer_to_idle() {
    init_logger();
    let controller = ViewTransitionController::new();
    controller.select_view(View::Timer);
    controller.select_view(View::Idle);

    let params = controller.content_params();
    assert_eq!(controller.transition_key().to_string(), "timer-idle");
    assert_eq!(controller.shell_bounce(), 0.3);
    assert_eq!(params.scale, 0.7);
    assert_eq!(params.y, Some(-7.5));
}

#[test]
fn test_self_transitions_are_well_formed() {
    init_logger();
    for view in View::ALL {
        let controller = ViewTransitionController::new();
        controller.select_view(view);
        controller.select_view(view);

        assert_eq!(
            controller.transition_key().to_string(),
            format!("{view}-{view}")
        );
        assert_eq!(controller.shell_bounce(), DEFAULT_BOUNCE);
        assert_eq!(controller.content_params(), ContentParams::NEUTRAL);
    }
}

#[test]
fn test_replaying_a_sequence_is_deterministic() {
    init_logger();
    let sequence = [View::Timer, View::Ring, View::Idle, View::Ring, View::Ring];
    assert_eq!(keys_for(&sequence), keys_for(&sequence));
}

#[test]
fn test_effect_sees_view_and_key_together() {
    init_logger();
    let controller = ViewTransitionController::new();
    let observed = Rc::new(RefCell::new(Vec::new()));

    let _effect = {
        let controller = controller.clone();
        let observed = observed.clone();
        create_effect(move || {
            let view = controller.view();
            let key = controller.transition_key();
            observed.borrow_mut().push((view, key));
        })
    };

    controller.select_view(View::Ring);
    controller.select_view(View::Timer);

    let observed = observed.borrow();
    assert_eq!(observed.len(), 3);
    for (view, key) in observed.iter() {
        assert_eq!(key.target(), *view, "torn pair {view} / {key}");
    }
}

#[test]
fn test_island_frames_replay_identically() {
    init_logger();
    fn record() -> Vec<Scene> {
        let island = Island::default();
        let mut scenes = Vec::new();
        for view in [View::Ring, View::Timer, View::Idle] {
            island.select_view(view);
            for _ in 0..20 {
                island.tick(FRAME);
                scenes.push(island.scene());
            }
        }
        scenes
    }

    assert_eq!(record(), record());
}

#[test]
fn test_exit_layer_follows_content_params() {
    init_logger();
    let island = Island::default();
    island.select_view(View::Ring);
    for _ in 0..120 {
        island.tick(FRAME);
    }

    island.select_view(View::Timer);
    let exiting = island.scene().exiting.expect("ring should be exiting");
    assert_eq!(exiting.view, View::Ring);
    assert_eq!(exiting.opacity, 1.0);

    let mut max_offset: f32 = 0.0;
    let mut saw_exit_end = false;
    for _ in 0..40 {
        island.tick(FRAME);
        match island.scene().exiting {
            Some(layer) => {
                max_offset = max_offset.max(layer.offset_y);
                assert!(layer.opacity < 1.0);
            }
            None => saw_exit_end = true,
        }
    }

    assert!(saw_exit_end, "exit layer should be removed after fading");
    assert!(max_offset > 0.0 && max_offset < 7.5 * 1.5);
}

#[test]
fn test_interrupting_a_morph_retargets_the_shell() {
    init_logger();
    let island = Island::default();
    island.select_view(View::Timer);
    for _ in 0..5 {
        island.tick(FRAME);
    }
    let mid_width = island.scene().shell.rect.width;
    assert!(mid_width > 100.0 && mid_width < View::Timer.content_size().width);

    island.select_view(View::Ring);
    assert_eq!(island.scene().shell.rect.width, mid_width);
    for _ in 0..200 {
        island.tick(FRAME);
    }
    assert_eq!(island.scene().shell.rect.size(), View::Ring.content_size());
}
