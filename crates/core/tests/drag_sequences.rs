//! Multi-step drag scenarios across the public API

use slider_web_core::{
    Arity, DragTarget, Mode, SliderOptions, SliderState, Value,
};

fn options(mode: Mode, arity: Arity, steps: u32) -> SliderOptions {
    SliderOptions {
        mode,
        arity,
        steps,
        ..SliderOptions::default()
    }
}

/// Simulate a full drag of one handle through a series of raw positions,
/// returning every emitted value.
fn drag(state: &mut SliderState, target: DragTarget, raws: &[f64]) -> Vec<Value> {
    assert!(state.pointer_down(target));
    let emitted = raws
        .iter()
        .filter_map(|&raw| state.pointer_move(raw))
        .collect();
    assert!(state.pointer_up());
    emitted
}

#[test]
fn range_invariant_holds_across_interleaved_drags() {
    let mut state = SliderState::new(options(Mode::Continuous, Arity::Range, 5)).unwrap();

    let sequences = [
        (DragTarget::End, vec![90.0, 55.0, 20.0, -5.0]),
        (DragTarget::Start, vec![10.0, 60.0, 130.0]),
        (DragTarget::End, vec![0.0, 100.0, 47.5]),
        (DragTarget::Start, vec![47.5, 48.0]),
    ];

    for (target, raws) in sequences {
        for value in drag(&mut state, target, &raws) {
            let Value::Range(low, high) = value else {
                panic!("range slider emitted a scalar: {value:?}");
            };
            assert!(low <= high, "invariant violated: {low} > {high}");
            assert!((0.0..=100.0).contains(&low));
            assert!((0.0..=100.0).contains(&high));
        }
    }
}

#[test]
fn start_handle_parks_at_high_when_pushed_past_it() {
    let mut state = SliderState::new(options(Mode::Continuous, Arity::Range, 5)).unwrap();
    drag(&mut state, DragTarget::End, &[60.0]);

    let emitted = drag(&mut state, DragTarget::Start, &[59.0, 60.0, 75.0, 120.0]);
    assert_eq!(
        emitted,
        vec![
            Value::Range(59.0, 60.0),
            Value::Range(60.0, 60.0),
            Value::Range(60.0, 60.0),
            Value::Range(60.0, 60.0),
        ]
    );
}

#[test]
fn discrete_range_snaps_both_endpoints() {
    let mut state = SliderState::new(options(Mode::Discrete, Arity::Range, 5)).unwrap();

    drag(&mut state, DragTarget::Start, &[47.0]);
    assert_eq!(state.value(), Value::Range(50.0, 100.0));

    drag(&mut state, DragTarget::End, &[62.0]);
    // 62 snaps down to 50, landing exactly on the low endpoint
    assert_eq!(state.value(), Value::Range(50.0, 50.0));
}

#[test]
fn every_emission_reflects_current_state() {
    let mut state = SliderState::new(options(Mode::Continuous, Arity::Single, 5)).unwrap();
    assert!(state.pointer_down(DragTarget::Start));
    for raw in [5.0, 95.0, 50.0] {
        let emitted = state.pointer_move(raw).unwrap();
        assert_eq!(emitted, state.value());
    }
    assert!(state.pointer_up());
}

#[test]
fn reconfiguring_mid_drag_resets_and_releases() {
    let mut state = SliderState::new(options(Mode::Continuous, Arity::Single, 5)).unwrap();
    assert!(state.pointer_down(DragTarget::Start));
    state.pointer_move(70.0);

    state
        .set_options(options(Mode::Continuous, Arity::Range, 5))
        .unwrap();
    assert_eq!(state.value(), Value::Range(0.0, 100.0));
    assert!(!state.is_dragging());
    // Moves after the forced release emit nothing
    assert_eq!(state.pointer_move(10.0), None);
    assert!(!state.pointer_up());
}

#[test]
fn repeated_drags_stay_balanced() {
    let mut state = SliderState::new(options(Mode::Continuous, Arity::Single, 5)).unwrap();
    for i in 0..20 {
        assert!(state.pointer_down(DragTarget::Start), "drag {i} failed to start");
        state.pointer_move(f64::from(i) * 5.0);
        assert!(state.pointer_up(), "drag {i} failed to end");
    }
    // One extra up is absorbed quietly
    assert!(!state.pointer_up());
}
