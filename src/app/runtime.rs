use std::collections::VecDeque;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::{
    select,
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};

use crate::app::{Action, AppState, Effect};
use crate::core::{StockError, StockService};
use crate::download::DownloadSink;

/* ---------------- Public API ---------------- */

/// Owns an [`AppState`] together with the backend and the download sink.
pub struct App<S, D> {
    state: AppState,
    service: Arc<S>,
    sink: Arc<D>,
}

impl<S, D> App<S, D>
where
    S: StockService + 'static,
    D: DownloadSink + 'static,
{
    pub fn new(service: S, sink: D) -> Self {
        Self {
            state: AppState::new(),
            service: Arc::new(service),
            sink: Arc::new(sink),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `action` and runs every resulting effect to completion, one at a time.
    ///
    /// Requests never overlap here. Use [`App::spawn`] to let them.
    pub async fn dispatch(&mut self, action: Action) {
        let mut pending: VecDeque<Effect> = self.state.reduce(action).into();
        while let Some(effect) = pending.pop_front() {
            let next = run_effect(self.service.clone(), self.sink.clone(), effect).await;
            pending.extend(self.state.reduce(next));
        }
    }

    /// Moves the app onto a background task and returns a handle for sending
    /// actions plus a subscription to state snapshots.
    ///
    /// All state changes happen on that one task. Effects are polled there
    /// concurrently, so a new search does not wait for an older one; the older
    /// response is discarded when it arrives.
    pub fn spawn(self) -> (AppHandle, watch::Receiver<AppState>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let (state_tx, state_rx) = watch::channel(self.state.clone());

        let App {
            mut state,
            service,
            sink,
        } = self;

        let join = tokio::spawn(async move {
            let mut in_flight: FuturesUnordered<BoxFuture<'static, Action>> =
                FuturesUnordered::new();

            loop {
                let action = select! {
                    _ = &mut stop_rx => break,
                    received = rx.recv() => match received {
                        Some(action) => action,
                        None => break,
                    },
                    Some(resolved) = in_flight.next(), if !in_flight.is_empty() => resolved,
                };

                for effect in state.reduce(action) {
                    in_flight.push(run_effect(service.clone(), sink.clone(), effect));
                }
                state_tx.send_replace(state.clone());
            }
        });

        (
            AppHandle {
                tx,
                join,
                stop_tx: Some(stop_tx),
            },
            state_rx,
        )
    }
}

/// A handle to a running [`App`] task.
pub struct AppHandle {
    tx: mpsc::UnboundedSender<Action>,
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl AppHandle {
    /// Queues an action.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Closed`] once the task has stopped.
    pub fn send(&self, action: Action) -> Result<(), StockError> {
        self.tx.send(action).map_err(|_| StockError::Closed)
    }

    /// Ask the task to stop and wait for it. In-flight requests are dropped.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task.
    pub fn abort(self) {
        self.join.abort();
    }
}

/// Runs one effect against the backend or the sink and turns the outcome into
/// the `Action` that reports it.
pub fn run_effect<S, D>(service: Arc<S>, sink: Arc<D>, effect: Effect) -> BoxFuture<'static, Action>
where
    S: StockService + 'static,
    D: DownloadSink + 'static,
{
    Box::pin(async move {
        match effect {
            Effect::FetchQuote(req) => Action::QuoteResolved {
                token: req.token,
                result: service.fetch_quote(&req.symbol).await,
            },
            Effect::FetchSeries(req) => {
                let result = service.fetch_series(&req.symbol, req.period).await;
                Action::SeriesResolved {
                    request: req,
                    result,
                }
            }
            Effect::ExportCsv(req) => Action::ExportResolved {
                token: req.token,
                result: service.export_csv(&req.symbol, req.period).await,
            },
            Effect::Save(req) => Action::ExportSaved {
                token: req.token,
                result: sink
                    .save(&req.file_name, &req.bytes)
                    .await
                    .map_err(|e| e.to_string()),
            },
        }
    })
}
