use super::*;

fn rotate_to(deg: f64) -> CameraUpdate {
    CameraUpdate { rotate: Some(deg), ..CameraUpdate::default() }
}

// --- construction ---

#[test]
fn new_store_is_at_default_pose() {
    let store = CameraStore::new();
    assert_eq!(store.state(), CameraState::default());
    assert!(!store.can_undo());
    assert!(!store.can_redo());
}

// --- update ---

#[test]
fn effective_update_pushes_pre_mutation_state() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(30.0));
    assert_eq!(store.state().rotate, 30.0);
    assert!(store.can_undo());
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn noop_update_does_not_grow_history() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(30.0));
    store.update(&rotate_to(30.0));
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn noop_update_does_not_clear_future() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(30.0));
    store.undo();
    assert!(store.can_redo());
    store.update(&rotate_to(0.0));
    assert!(store.can_redo());
}

#[test]
fn empty_update_is_a_noop() {
    let mut store = CameraStore::new();
    store.update(&CameraUpdate::default());
    assert_eq!(store.state(), CameraState::default());
    assert!(!store.can_undo());
}

#[test]
fn effective_update_clears_future() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(30.0));
    store.undo();
    assert!(store.can_redo());
    store.update(&rotate_to(-15.0));
    assert!(!store.can_redo());
}

#[test]
fn each_effective_update_is_its_own_entry() {
    let mut store = CameraStore::new();
    for deg in [1.0, 2.0, 3.0, 4.0] {
        store.update(&rotate_to(deg));
    }
    assert_eq!(store.undo_depth(), 4);
}

// --- undo / redo round trip ---

#[test]
fn undo_restores_exact_pre_update_state() {
    let mut store = CameraStore::new();
    store.update(&CameraUpdate {
        rotate: Some(45.0),
        tilt: Some(0.3),
        wide_angle: Some(true),
        ..CameraUpdate::default()
    });
    let after = store.state();
    store.undo();
    assert_eq!(store.state(), CameraState::default());
    store.redo();
    assert_eq!(store.state(), after);
}

#[test]
fn undo_redo_walks_the_full_timeline() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(10.0));
    store.update(&rotate_to(20.0));
    store.update(&rotate_to(30.0));

    store.undo();
    store.undo();
    assert_eq!(store.state().rotate, 10.0);
    store.redo();
    assert_eq!(store.state().rotate, 20.0);
    store.redo();
    assert_eq!(store.state().rotate, 30.0);
    assert!(!store.can_redo());
}

#[test]
fn undo_on_empty_past_is_a_noop() {
    let mut store = CameraStore::new();
    store.undo();
    assert_eq!(store.state(), CameraState::default());
    assert!(!store.can_redo());
}

#[test]
fn redo_on_empty_future_is_a_noop() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(10.0));
    store.redo();
    assert_eq!(store.state().rotate, 10.0);
    assert_eq!(store.undo_depth(), 1);
}

#[test]
fn redo_moves_current_state_back_onto_past() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(10.0));
    store.undo();
    assert_eq!(store.undo_depth(), 0);
    store.redo();
    assert_eq!(store.undo_depth(), 1);
    assert_eq!(store.redo_depth(), 0);
}

// --- reset ---

#[test]
fn reset_returns_to_default_pose() {
    let mut store = CameraStore::new();
    store.update(&CameraUpdate::from(CameraState {
        rotate: 45.0,
        forward: 3.0,
        tilt: 0.5,
        wide_angle: true,
        floating: true,
    }));
    store.reset();
    assert_eq!(store.state(), CameraState::default());
}

#[test]
fn reset_is_undoable() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(60.0));
    store.reset();
    store.undo();
    assert_eq!(store.state().rotate, 60.0);
}

#[test]
fn reset_clears_future() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(60.0));
    store.undo();
    assert!(store.can_redo());
    store.reset();
    assert!(!store.can_redo());
}

// --- bounded history ---

#[test]
fn history_never_exceeds_the_cap() {
    let mut store = CameraStore::new();
    for deg in 0..80 {
        store.update(&rotate_to(f64::from(deg)));
    }
    assert_eq!(store.undo_depth(), HISTORY_CAP);
}

#[test]
fn pushing_past_the_cap_evicts_the_oldest_entry() {
    let mut store = CameraStore::new();
    // 60 effective updates; entries 0..=9 must have been evicted.
    for deg in 1..=60 {
        store.update(&rotate_to(f64::from(deg)));
    }
    for _ in 0..HISTORY_CAP {
        store.undo();
    }
    assert!(!store.can_undo());
    // Oldest surviving snapshot is the pre-state of update #11.
    assert_eq!(store.state().rotate, 10.0);
}

#[test]
fn reset_pushes_are_bounded_too() {
    let mut store = CameraStore::new();
    store.update(&rotate_to(1.0));
    for _ in 0..80 {
        store.reset();
        store.update(&rotate_to(1.0));
    }
    assert_eq!(store.undo_depth(), HISTORY_CAP);
}

#[test]
fn redo_stack_never_exceeds_the_cap() {
    let mut store = CameraStore::new();
    for deg in 0..80 {
        store.update(&rotate_to(f64::from(deg)));
    }
    for _ in 0..80 {
        store.undo();
    }
    assert_eq!(store.redo_depth(), HISTORY_CAP);
}

// --- domain invariant under clamped callers ---

#[test]
fn state_stays_in_domain_for_clamped_update_sequences() {
    let mut store = CameraStore::new();
    let wild = [
        CameraUpdate { rotate: Some(500.0), ..CameraUpdate::default() },
        CameraUpdate { forward: Some(-9.0), tilt: Some(42.0), ..CameraUpdate::default() },
        CameraUpdate { tilt: Some(-42.0), floating: Some(true), ..CameraUpdate::default() },
    ];
    for update in wild {
        store.update(&update.clamped());
        assert!(store.state().in_domain());
    }
}
