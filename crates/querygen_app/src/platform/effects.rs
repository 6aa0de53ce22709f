use std::sync::mpsc;
use std::thread;

use querygen_core::{Effect, Msg, RequestResult};
use querygen_engine::{
    BackendError, EngineEvent, EngineEvents, EngineHandle, GenerateRequest, SuggestRequest,
};
use querygen_logging::{qg_debug, qg_info, qg_warn};

use super::app::LoopEvent;
use super::clipboard::ClipboardSink;

/// Executes core effects and feeds their outcomes back into the event loop.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardSink>,
    loop_tx: mpsc::Sender<LoopEvent>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: EngineEvents,
        clipboard: Box<dyn ClipboardSink>,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> Self {
        spawn_event_pump(events, loop_tx.clone());
        Self {
            engine,
            clipboard,
            loop_tx,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Generate {
                    request_id,
                    text,
                    option,
                    mode,
                } => {
                    qg_info!(
                        "Generate request_id={} option={} mode={} text_len={}",
                        request_id,
                        option,
                        mode,
                        text.len()
                    );
                    let request = GenerateRequest {
                        text,
                        option,
                        mode: mode.label().to_string(),
                    };
                    if let Err(err) = self.engine.generate(request_id, request) {
                        self.send(Msg::GenerationDone {
                            request_id,
                            result: failed("generate", request_id, &err),
                        });
                    }
                }
                Effect::FetchSuggestions {
                    request_id,
                    text,
                    mode,
                } => {
                    qg_info!("Suggestions request_id={} mode={}", request_id, mode);
                    let request = SuggestRequest {
                        text,
                        mode: mode.label().to_string(),
                    };
                    if let Err(err) = self.engine.suggest(request_id, request) {
                        self.send(Msg::SuggestionsDone {
                            request_id,
                            result: failed("suggestions", request_id, &err),
                        });
                    }
                }
                Effect::CopyToClipboard { text } => {
                    let succeeded = match self.clipboard.copy(&text) {
                        Ok(()) => true,
                        Err(err) => {
                            qg_warn!("Copy failed: {}", err);
                            false
                        }
                    };
                    self.send(Msg::CopyFinished { succeeded });
                }
            }
        }
    }

    fn send(&self, msg: Msg) {
        let _ = self.loop_tx.send(LoopEvent::Msg(msg));
    }
}

fn spawn_event_pump(events: EngineEvents, loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if loop_tx.send(LoopEvent::Msg(map_event(event))).is_err() {
                break;
            }
        }
        qg_debug!("Engine event pump stopped");
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { request_id, result } => Msg::GenerationDone {
            request_id,
            result: map_result("generate", request_id, result),
        },
        EngineEvent::SuggestionsCompleted { request_id, result } => Msg::SuggestionsDone {
            request_id,
            result: map_result("suggestions", request_id, result),
        },
    }
}

fn map_result(
    call: &str,
    request_id: u64,
    result: Result<Vec<String>, BackendError>,
) -> RequestResult {
    match result {
        Ok(items) => {
            qg_debug!("{} request {} returned {} items", call, request_id, items.len());
            RequestResult::Items(items)
        }
        Err(err) => failed(call, request_id, &err),
    }
}

fn failed(call: &str, request_id: u64, err: &BackendError) -> RequestResult {
    qg_warn!("{} request {} failed: {}", call, request_id, err);
    RequestResult::Failed
}
