//! Background fetches.
//!
//! A fetch runs as a task on a tokio runtime while the menu loop keeps
//! polling input. The task hands its single result over a oneshot channel.

use std::future::Future;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::error::CatalogError;

/// Handle to an in-flight fetch.
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct PendingFetch<T> {
    receiver: oneshot::Receiver<Result<T, CatalogError>>,
    task: Option<JoinHandle<()>>,
    finished: bool,
}

impl<T: Send + 'static> PendingFetch<T> {
    /// Spawns `fetch` on `runtime`.
    pub fn spawn<F>(runtime: &tokio::runtime::Handle, fetch: F) -> Self
    where
        F: Future<Output = Result<T, CatalogError>> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let task = runtime.spawn(async move {
            // The receiver may already be gone if the menu quit.
            let _ = sender.send(fetch.await);
        });

        Self {
            receiver,
            task: Some(task),
            finished: false,
        }
    }
}

impl<T> PendingFetch<T> {
    /// Wraps a bare receiver. The sending side plays the role of the task.
    pub fn from_receiver(receiver: oneshot::Receiver<Result<T, CatalogError>>) -> Self {
        Self {
            receiver,
            task: None,
            finished: false,
        }
    }

    /// Returns the result once it is available, without blocking.
    ///
    /// Yields `Some` at most once. A task that ended without sending (aborted
    /// or panicked) yields [`CatalogError::Cancelled`].
    pub fn poll(&mut self) -> Option<Result<T, CatalogError>> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.finished = true;
                Some(Err(CatalogError::Cancelled))
            }
        }
    }

    /// Aborts the fetch. Any result produced afterwards is discarded.
    pub fn cancel(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        self.receiver.close();
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Background fetch aborted");
        }
    }
}

impl<T> Drop for PendingFetch<T> {
    fn drop(&mut self) {
        if !self.finished {
            self.abort();
        }
    }
}
