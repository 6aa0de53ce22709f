use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use querygen_core::{update, AppState, AppViewModel, Effect, Mode, Msg};
use querygen_engine::{purge_legacy_state, EngineHandle};
use querygen_logging::{qg_debug, qg_info, qg_warn};

use super::bridge::{decode_event, write_commands, PageEvent};
use super::clipboard::SystemClipboard;
use super::effects::EffectRunner;
use super::{config, logging, ui};

const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub(crate) enum LoopEvent {
    Msg(Msg),
    Shutdown,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load()?;
    logging::initialize(config.log_destination);

    match purge_legacy_state(&config.legacy_state_dir) {
        Ok(0) => {}
        Ok(removed) => qg_info!(
            "Purged {} legacy saved-query entries from {:?}",
            removed,
            config.legacy_state_dir
        ),
        Err(err) => qg_warn!("Legacy state purge failed: {}", err),
    }

    let mode = Mode::resolve(config.page_mode.as_deref(), &config.page_path);
    let state = AppState::new(mode).with_suggestion_source(config.suggestion_source.into());
    qg_info!(
        "Controller ready mode={} suggestions={:?} backend={}",
        mode,
        state.suggestion_source(),
        config.base_url
    );

    let (engine, events) =
        EngineHandle::with_settings(config.client_settings()).context("starting request engine")?;
    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let mut runner = EffectRunner::new(
        engine,
        events,
        Box::new(SystemClipboard::default()),
        loop_tx.clone(),
    );

    spawn_page_reader(loop_tx.clone());
    spawn_ticker(loop_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_loop(Controller::new(state), &loop_rx, &mut runner, &mut out)?;
    qg_info!("Page closed, shutting down");
    Ok(())
}

struct Controller {
    state: AppState,
}

impl Controller {
    fn new(state: AppState) -> Self {
        Self { state }
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Runs one message through the core. The view is returned only when the
    /// state changed.
    fn dispatch(&mut self, msg: Msg) -> (Vec<Effect>, Option<AppViewModel>) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        (effects, view)
    }
}

fn run_loop<W: Write>(
    mut controller: Controller,
    events: &mpsc::Receiver<LoopEvent>,
    runner: &mut EffectRunner,
    out: &mut W,
) -> io::Result<()> {
    write_commands(out, &ui::render::render(&controller.view()))?;

    while let Ok(event) = events.recv() {
        let msg = match event {
            LoopEvent::Msg(msg) => msg,
            LoopEvent::Shutdown => break,
        };
        let (effects, view) = controller.dispatch(msg);
        if let Some(view) = view {
            write_commands(out, &ui::render::render(&view))?;
        }
        if !effects.is_empty() {
            qg_debug!("Running {} effects", effects.len());
            runner.enqueue(effects);
        }
    }
    Ok(())
}

fn spawn_page_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    qg_warn!("Page input closed: {}", err);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match decode_event(&line) {
                Ok(PageEvent::Shutdown) => break,
                Ok(event) => {
                    if loop_tx.send(LoopEvent::Msg(event.into_msg())).is_err() {
                        return;
                    }
                }
                Err(err) => qg_warn!("Ignoring malformed page event: {}", err),
            }
        }
        let _ = loop_tx.send(LoopEvent::Shutdown);
    });
}

// Drives notification expiry; the core only ever sees this logical clock.
fn spawn_ticker(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let start = Instant::now();
        loop {
            let now_ms = start.elapsed().as_millis() as u64;
            if loop_tx.send(LoopEvent::Msg(Msg::Tick { now_ms })).is_err() {
                break;
            }
            thread::sleep(TICK_INTERVAL);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::platform::clipboard::{ClipboardError, ClipboardSink};
    use querygen_core::{CardRef, Pane, MSG_ENTER_TEXT, MSG_SAVED};
    use querygen_engine::{BackendError, GenerateRequest, QueryBackend, SuggestRequest};

    struct EchoBackend;

    #[async_trait::async_trait]
    impl QueryBackend for EchoBackend {
        async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>, BackendError> {
            Ok(vec![request.text.clone()])
        }

        async fn suggest(&self, _request: &SuggestRequest) -> Result<Vec<String>, BackendError> {
            Ok(Vec::new())
        }
    }

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn runner(loop_tx: mpsc::Sender<LoopEvent>) -> EffectRunner {
        let (engine, events) = EngineHandle::new(Arc::new(EchoBackend));
        EffectRunner::new(engine, events, Box::new(NullClipboard), loop_tx)
    }

    #[test]
    fn dispatch_returns_view_only_when_dirty() {
        let mut controller = Controller::new(AppState::new(Mode::Podcasts));

        let (effects, view) = controller.dispatch(Msg::NoOp);
        assert!(effects.is_empty());
        assert!(view.is_none());

        let (effects, view) = controller.dispatch(Msg::SaveClicked {
            query: "Q1".to_string(),
            source: None,
        });
        assert!(effects.is_empty());
        let view = view.expect("save changes the view");
        assert_eq!(view.saved, vec!["Q1".to_string()]);
        assert_eq!(view.notifications[0].message, MSG_SAVED);
    }

    #[test]
    fn generation_round_trip_through_engine() {
        let (loop_tx, loop_rx) = mpsc::channel();
        let mut runner = runner(loop_tx);
        let mut controller = Controller::new(AppState::new(Mode::Podcasts));

        controller.dispatch(Msg::InputChanged("true crime".to_string()));
        let (effects, view) = controller.dispatch(Msg::OptionClicked("titles".to_string()));
        assert_eq!(view.map(|view| view.results), Some(Pane::Loading));
        runner.enqueue(effects);

        let msg = match loop_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(LoopEvent::Msg(msg)) => msg,
            _ => panic!("expected generation result"),
        };
        let (_, view) = controller.dispatch(msg);
        let view = view.expect("results change the view");
        assert!(view.results_visible);
        match view.results {
            Pane::Cards(cards) => assert_eq!(cards[0].text, "true crime"),
            other => panic!("unexpected pane {other:?}"),
        }
    }

    #[test]
    fn loop_writes_initial_render_and_stops_on_shutdown() {
        let (loop_tx, loop_rx) = mpsc::channel();
        let mut runner = runner(loop_tx.clone());

        loop_tx
            .send(LoopEvent::Msg(Msg::OptionClicked("titles".to_string())))
            .unwrap();
        loop_tx
            .send(LoopEvent::Msg(Msg::SaveClicked {
                query: "Q1".to_string(),
                source: Some(CardRef::results(0)),
            }))
            .unwrap();
        loop_tx.send(LoopEvent::Shutdown).unwrap();

        let mut out = Vec::new();
        run_loop(
            Controller::new(AppState::new(Mode::Podcasts)),
            &loop_rx,
            &mut runner,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let frames = text
            .lines()
            .filter(|line| line.contains(r#""command":"set_class""#))
            .count();
        assert_eq!(frames, 3);
        assert!(text.contains(MSG_ENTER_TEXT));
        assert!(text.contains(r#""target":"user_input","class":"is-invalid","enabled":true"#));
        assert!(text.contains(r#"data-action=\"remove\" data-payload=\"Q1\""#));
    }
}
