use querygen_core::{update, AppState, Mode, Msg, MSG_REMOVED, MSG_SAVED, NOTIFICATION_TTL_MS};

fn save(state: AppState, query: &str) -> AppState {
    update(
        state,
        Msg::SaveClicked {
            query: query.to_string(),
            source: None,
        },
    )
    .0
}

#[test]
fn notifications_stack_and_expire_on_the_logical_clock() {
    let state = save(AppState::new(Mode::Podcasts), "a");
    let (state, _) = update(state, Msg::Tick { now_ms: 500 });
    let state = update(state, Msg::RemoveClicked("a".into())).0;

    let view = state.view();
    let stacked: Vec<_> = view.notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(stacked, vec![MSG_SAVED, MSG_REMOVED]);
    assert_eq!(view.notifications[0].expires_at_ms, NOTIFICATION_TTL_MS);
    assert_eq!(view.notifications[1].expires_at_ms, 500 + NOTIFICATION_TTL_MS);

    let (mut state, _) = update(state, Msg::Tick { now_ms: NOTIFICATION_TTL_MS - 1 });
    assert_eq!(state.view().notifications.len(), 2);
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::Tick { now_ms: NOTIFICATION_TTL_MS });
    assert!(state.consume_dirty());
    assert_eq!(state.view().notifications.len(), 1);

    let (state, _) = update(state, Msg::Tick { now_ms: 500 + NOTIFICATION_TTL_MS });
    assert!(state.view().notifications.is_empty());
}

#[test]
fn clock_never_runs_backwards() {
    let (state, _) = update(AppState::new(Mode::Podcasts), Msg::Tick { now_ms: 1_000 });
    let (state, _) = update(state, Msg::Tick { now_ms: 10 });
    let state = save(state, "a");

    assert_eq!(
        state.view().notifications[0].expires_at_ms,
        1_000 + NOTIFICATION_TTL_MS
    );
}
