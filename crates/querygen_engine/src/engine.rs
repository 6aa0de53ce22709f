use std::sync::{mpsc, Arc};
use std::thread;

use querygen_logging::{qg_debug, qg_error};

use crate::client::{ClientSettings, QueryBackend, ReqwestBackend};
use crate::{BackendError, EngineEvent, FailureKind, GenerateRequest, RequestId, SuggestRequest};

enum EngineCommand {
    Generate {
        request_id: RequestId,
        request: GenerateRequest,
    },
    Suggest {
        request_id: RequestId,
        request: SuggestRequest,
    },
}

/// Submits backend calls to a background runtime. Calls run concurrently and
/// complete in whatever order the backend answers.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Completion side of an [`EngineHandle`].
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn with_settings(settings: ClientSettings) -> Result<(Self, EngineEvents), BackendError> {
        let backend = ReqwestBackend::new(settings)?;
        Ok(Self::new(Arc::new(backend)))
    }

    pub fn new(backend: Arc<dyn QueryBackend>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    qg_error!("Failed to start engine runtime: {}", err);
                    reject_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(backend.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            qg_debug!("Engine command channel closed");
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn generate(
        &self,
        request_id: RequestId,
        request: GenerateRequest,
    ) -> Result<(), BackendError> {
        self.submit(EngineCommand::Generate {
            request_id,
            request,
        })
    }

    pub fn suggest(&self, request_id: RequestId, request: SuggestRequest) -> Result<(), BackendError> {
        self.submit(EngineCommand::Suggest {
            request_id,
            request,
        })
    }

    fn submit(&self, command: EngineCommand) -> Result<(), BackendError> {
        self.cmd_tx
            .send(command)
            .map_err(|_| BackendError::new(FailureKind::Unavailable, "engine stopped"))
    }
}

impl EngineEvents {
    /// Blocks until the next completion. `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    #[cfg(test)]
    fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(backend: &dyn QueryBackend, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Generate {
            request_id,
            request,
        } => EngineEvent::GenerationCompleted {
            request_id,
            result: backend.generate(&request).await,
        },
        EngineCommand::Suggest {
            request_id,
            request,
        } => EngineEvent::SuggestionsCompleted {
            request_id,
            result: backend.suggest(&request).await,
        },
    }
}

fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: &str,
) {
    while let Ok(command) = cmd_rx.recv() {
        let error = BackendError::new(FailureKind::Unavailable, reason);
        let event = match command {
            EngineCommand::Generate { request_id, .. } => EngineEvent::GenerationCompleted {
                request_id,
                result: Err(error),
            },
            EngineCommand::Suggest { request_id, .. } => EngineEvent::SuggestionsCompleted {
                request_id,
                result: Err(error),
            },
        };
        if event_tx.send(event).is_err() {
            return;
        }
    }
}
