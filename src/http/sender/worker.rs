use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::time::Instant;
use tracing::debug;

use crate::{
    args::PositiveUsize,
    domain::WorkItem,
    error::AppResult,
    metrics::RequestResult,
};

use super::super::workload::RequestExecutor;

/// Every result of a pool run plus its wall-clock duration.
#[derive(Debug)]
pub struct PoolOutcome {
    pub results: Vec<RequestResult>,
    pub duration: Duration,
}

/// Runs `total_requests` work items across exactly `parallel_count` workers.
///
/// The work queue is filled and closed before any worker starts. Each
/// worker keeps a fixed index for the whole run and exits once the queue
/// is drained, so workers beyond the number of items exit immediately.
///
/// # Errors
///
/// Returns an error when a worker task panics.
pub async fn run_worker_pool<E>(
    executor: Arc<E>,
    total_requests: usize,
    parallel_count: PositiveUsize,
) -> AppResult<PoolOutcome>
where
    E: RequestExecutor + 'static,
{
    let (work_tx, work_rx) = mpsc::channel::<WorkItem>(total_requests.max(1));
    for test_number in 0..total_requests {
        if work_tx.try_send(WorkItem { test_number }).is_err() {
            break;
        }
    }
    drop(work_tx);

    let work_rx = Arc::new(Mutex::new(work_rx));
    let (result_tx, mut result_rx) = mpsc::channel::<RequestResult>(total_requests.max(1));

    let start = Instant::now();
    let mut worker_handles = Vec::with_capacity(parallel_count.get());
    for worker in 0..parallel_count.get() {
        let executor = Arc::clone(&executor);
        let work_rx = Arc::clone(&work_rx);
        let result_tx = result_tx.clone();

        worker_handles.push(tokio::spawn(async move {
            debug!("Worker {} started", worker);
            let mut completed: usize = 0;
            loop {
                let next = work_rx.lock().await.recv().await;
                let Some(item) = next else {
                    break;
                };
                let result = executor.execute(item, worker).await;
                if result_tx.send(result).await.is_err() {
                    break;
                }
                completed = completed.saturating_add(1);
            }
            debug!("Worker {} exited after {} requests", worker, completed);
        }));
    }
    drop(result_tx);

    let mut results = Vec::with_capacity(total_requests);
    while let Some(result) = result_rx.recv().await {
        results.push(result);
    }
    for handle in worker_handles {
        handle.await?;
    }

    Ok(PoolOutcome {
        results,
        duration: start.elapsed(),
    })
}
