use querygen_core::{update, AppState, Mode, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new(Mode::Podcasts);
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_without_notifications_does_not_request_render() {
    let (mut next, effects) = update(AppState::new(Mode::Podcasts), Msg::Tick { now_ms: 75 });

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn view_does_not_depend_on_render_bookkeeping() {
    let (mut state, _) = update(AppState::new(Mode::Podcasts), Msg::RemoveClicked("a".into()));
    let before = state.view();

    assert!(state.consume_dirty());
    assert_eq!(before, state.view());
}
