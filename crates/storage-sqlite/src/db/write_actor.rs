//! Single-writer actor for database mutations.
//!
//! SQLite allows one writer at a time; instead of letting pooled connections
//! contend for the write lock, every mutation in the workspace is sent to
//! one background task that owns a dedicated connection and executes jobs
//! serially, each inside an immediate transaction. A job that returns an
//! error rolls its whole transaction back, which is what gives multi-line
//! stock movements their all-or-nothing behavior.

use super::DbPool;
use crate::errors::StorageError;
use cambio_core::errors::Result;
use diesel::SqliteConnection;
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A write job: runs against the writer's connection, returns a core Result.
type WriteJob<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Jobs are type-erased so one channel serves every return type; each is
    // paired with a oneshot sender for its reply.
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        WriteJob<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns the background task that acts as the single writer. It holds one
/// connection from the pool for its whole lifetime and processes jobs in
/// arrival order.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        WriteJob<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            // StorageError carries typed domain errors through the
            // transaction boundary unchanged, so a caller still sees an
            // insufficient-stock rejection as exactly that.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // Ignore error if the receiver has dropped.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
