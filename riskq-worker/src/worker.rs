//! Message-driven aggregation worker.
//!
//! The worker task owns the aggregator and processes requests one at a
//! time from a bounded queue. Each computation runs on the blocking pool
//! so a slow or panicking aggregation never stalls the async runtime.

use std::any::Any;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinError;
use tracing::{debug, info, warn, Instrument};

use riskq_aggregation::AggregationEngine;
use riskq_core::config::RiskqConfig;
use riskq_core::errors::WorkerError;
use riskq_core::models::AnalysisData;
use riskq_core::traits::IAggregator;

use crate::request::ComputeRequest;

type Reply = oneshot::Sender<Result<AnalysisData, WorkerError>>;

enum WorkerMessage {
    Compute {
        request: ComputeRequest,
        reply: Reply,
    },
    Shutdown {
        done: oneshot::Sender<()>,
    },
}

/// The worker task. Created through [`AggregationWorker::spawn`].
pub struct AggregationWorker {
    aggregator: Arc<dyn IAggregator>,
    inbox: mpsc::Receiver<WorkerMessage>,
}

impl AggregationWorker {
    /// Spawn a worker running the default aggregation engine.
    pub fn spawn(config: &RiskqConfig) -> WorkerHandle {
        let engine = AggregationEngine::new(config.aggregation.clone());
        Self::spawn_with(config.worker.queue_capacity, Arc::new(engine))
    }

    /// Spawn a worker around any aggregator. Must be called inside a tokio
    /// runtime.
    pub fn spawn_with(queue_capacity: usize, aggregator: Arc<dyn IAggregator>) -> WorkerHandle {
        let (tx, inbox) = mpsc::channel(queue_capacity.max(1));
        let worker = Self { aggregator, inbox };
        tokio::spawn(worker.run());
        WorkerHandle { tx }
    }

    async fn run(mut self) {
        debug!("aggregation worker started");
        while let Some(message) = self.inbox.recv().await {
            match message {
                WorkerMessage::Compute { request, reply } => {
                    let span = riskq_core::worker_span!(request.risk_file_id());
                    let result = self.compute(request).instrument(span).await;
                    // The caller may have given up waiting.
                    let _ = reply.send(result);
                }
                WorkerMessage::Shutdown { done } => {
                    self.drain();
                    info!("aggregation worker shut down");
                    let _ = done.send(());
                    return;
                }
            }
        }
        debug!("all handles dropped, aggregation worker exiting");
    }

    async fn compute(&self, request: ComputeRequest) -> Result<AnalysisData, WorkerError> {
        request.validate()?;

        let risk_file_id = request.risk_file.id.clone();
        let aggregator = Arc::clone(&self.aggregator);
        let outcome = tokio::task::spawn_blocking(move || {
            aggregator.aggregate(&request.risk_file, &request.analyses, &request.cascades)
        })
        .await;

        outcome.map_err(|err| WorkerError::ComputationFailed {
            risk_file_id,
            reason: join_failure(err),
        })
    }

    /// Refuse anything still queued once shutdown was requested.
    fn drain(&mut self) {
        self.inbox.close();
        while let Ok(message) = self.inbox.try_recv() {
            match message {
                WorkerMessage::Compute { reply, .. } => {
                    let _ = reply.send(Err(WorkerError::Closed));
                }
                WorkerMessage::Shutdown { done } => {
                    let _ = done.send(());
                }
            }
        }
    }
}

fn join_failure(err: JoinError) -> String {
    if err.is_cancelled() {
        return "computation cancelled".to_string();
    }
    panic_message(err.into_panic())
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("computation panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("computation panicked: {s}")
    } else {
        "computation panicked".to_string()
    }
}

/// Cloneable handle for submitting work to the worker.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<WorkerMessage>,
}

impl WorkerHandle {
    /// Queue a computation and wait for its result.
    pub async fn compute(&self, request: ComputeRequest) -> Result<AnalysisData, WorkerError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(WorkerMessage::Compute { request, reply })
            .await
            .map_err(|_| WorkerError::Closed)?;
        rx.await.map_err(|_| WorkerError::Closed)?
    }

    /// Like [`compute`](Self::compute), but every failure becomes the
    /// "data unavailable" placeholder for the requested risk file.
    pub async fn compute_or_placeholder(&self, request: ComputeRequest) -> AnalysisData {
        let risk_file_id = request.risk_file.id.clone();
        match self.compute(request).await {
            Ok(data) => data,
            Err(err) => {
                warn!(risk_file_id = %risk_file_id, error = %err, "aggregation unavailable");
                AnalysisData::unavailable(risk_file_id)
            }
        }
    }

    /// Stop the worker. Requests still queued are answered with
    /// `WorkerError::Closed`; later calls on any clone fail the same way.
    /// Returns once the worker has stopped.
    pub async fn shutdown(&self) {
        let (done, rx) = oneshot::channel();
        if self.tx.send(WorkerMessage::Shutdown { done }).await.is_ok() {
            let _ = rx.await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
