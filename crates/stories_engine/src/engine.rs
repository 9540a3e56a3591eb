use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use stories_logging::{stories_debug, stories_error, stories_trace, stories_warn};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, RequestId, SearchHit};

enum EngineCommand {
    Fetch { request_id: RequestId, query: String },
}

/// Runs searches on a background tokio runtime.
///
/// Requests run concurrently, so completions can arrive in any order; every
/// event carries the `RequestId` it was started with. Nothing is ever aborted.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker_tx = event_tx.clone();

        thread::spawn(move || {
            let event_tx = worker_tx;
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    stories_error!("Failed to start engine runtime: {}", err);
                    reject_all(cmd_rx, event_tx, err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(fetcher, command, event_tx));
            }
        });

        Self {
            cmd_tx,
            event_tx,
            event_rx,
        }
    }

    /// Starts a search. If the worker thread is gone the request fails right
    /// away instead of never completing.
    pub fn fetch(&self, request_id: RequestId, query: impl Into<String>) {
        let command = EngineCommand::Fetch {
            request_id,
            query: query.into(),
        };
        if let Err(mpsc::SendError(EngineCommand::Fetch { request_id, query })) =
            self.cmd_tx.send(command)
        {
            stories_error!("Engine worker stopped; failing request {}", request_id);
            send_event(
                &self.event_tx,
                request_id,
                query,
                Err(FetchError::new(
                    FailureKind::EngineUnavailable,
                    "engine worker stopped",
                )),
            );
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: Arc<dyn Fetcher>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            stories_debug!("Engine running request {} for {:?}", request_id, query);
            let search_query = query.clone();
            let task = tokio::spawn(async move { fetcher.search(&search_query).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    stories_error!("Search task for request {} died: {}", request_id, err);
                    Err(FetchError::new(FailureKind::TaskFailed, err.to_string()))
                }
            };
            send_event(&event_tx, request_id, query, result);
        }
    }
}

fn send_event(
    event_tx: &mpsc::Sender<EngineEvent>,
    request_id: RequestId,
    query: String,
    result: Result<Vec<SearchHit>, FetchError>,
) {
    stories_trace!("Request {} completed, ok={}", request_id, result.is_ok());
    let event = EngineEvent::FetchCompleted {
        request_id,
        query,
        result,
    };
    if event_tx.send(event).is_err() {
        stories_warn!("No receiver for completion of request {}", request_id);
    }
}

/// Without a runtime every request fails at once, so callers never wait forever.
fn reject_all(
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    reason: String,
) {
    while let Ok(EngineCommand::Fetch { request_id, query }) = cmd_rx.recv() {
        send_event(
            &event_tx,
            request_id,
            query,
            Err(FetchError::new(FailureKind::EngineUnavailable, reason.clone())),
        );
    }
}
