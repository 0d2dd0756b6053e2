//! Fetch worker
//!
//! Runs provider requests on a background thread hosting a single-threaded
//! tokio runtime, so the UI thread never blocks on the network. Requests
//! arrive over an unbounded channel and each runs as its own task: in-flight
//! requests are neither serialized nor cancelled by newer ones. Settled
//! requests are sent back over a std channel the UI thread drains.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::error::GeocompleteError;
use crate::provider::{FeatureCollection, GeocodeClient, ProviderError, SearchOptions};

/// A fetch for one settled burst of typing
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Monotonically increasing, used to recognise stale responses
    pub request_id: u64,
    pub text: String,
    pub options: SearchOptions,
}

/// Outcome of one request
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    Success {
        request_id: u64,
        collection: FeatureCollection,
    },
    Failure {
        request_id: u64,
        error: ProviderError,
    },
}

impl FetchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchResponse::Success { request_id, .. }
            | FetchResponse::Failure { request_id, .. } => *request_id,
        }
    }
}

/// The controller's ends of the worker channels
#[derive(Debug)]
pub struct WorkerChannels {
    pub request_tx: UnboundedSender<FetchRequest>,
    pub response_rx: Receiver<FetchResponse>,
}

/// Handle owning the worker thread; shuts it down when dropped
#[derive(Debug)]
pub struct FetchWorker {
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl FetchWorker {
    /// Stop the worker
    ///
    /// In-flight requests are abandoned and nothing more is delivered.
    pub fn shutdown(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("Fetch worker thread panicked");
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for FetchWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the fetch worker thread
///
/// # Returns
/// The worker handle and the channel ends to hand to the controller.
pub fn spawn_worker(
    client: GeocodeClient,
) -> Result<(FetchWorker, WorkerChannels), GeocompleteError> {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| GeocompleteError::WorkerSpawn(e.to_string()))?;

    let token = shutdown.clone();
    let thread = std::thread::Builder::new()
        .name("geocomplete-fetch".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx, token));
            log::debug!("Fetch worker shutting down");
        })?;

    Ok((
        FetchWorker {
            shutdown,
            thread: Some(thread),
        },
        WorkerChannels {
            request_tx,
            response_rx,
        },
    ))
}

/// Accept requests until the controller hangs up or shutdown is requested
async fn worker_loop(
    client: GeocodeClient,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => {
                    tokio::spawn(run_request(
                        client.clone(),
                        request,
                        response_tx.clone(),
                        shutdown.clone(),
                    ));
                }
                None => break,
            },
        }
    }
}

async fn run_request(
    client: GeocodeClient,
    request: FetchRequest,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    let request_id = request.request_id;
    let result = tokio::select! {
        _ = shutdown.cancelled() => {
            log::debug!("Abandoning request {} on shutdown", request_id);
            return;
        }
        result = client.autocomplete(&request.text, &request.options) => result,
    };

    let response = match result {
        Ok(collection) => FetchResponse::Success {
            request_id,
            collection,
        },
        Err(error) => FetchResponse::Failure { request_id, error },
    };

    if response_tx.send(response).is_err() {
        log::debug!("Controller gone, discarding response {}", request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
