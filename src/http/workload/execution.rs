use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::{
    domain::{BenchmarkConfig, WorkItem},
    error::HttpError,
    metrics::RequestResult,
    sinks::FailureDumper,
};

use super::builders::build_request;
use super::template::RequestVars;

/// Executes one work item on behalf of a worker.
///
/// Implementations never fail: every outcome, including transport and
/// construction errors, is folded into the returned [`RequestResult`].
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, item: WorkItem, worker: usize) -> RequestResult;
}

pub struct HttpExecutor {
    client: Client,
    config: Arc<BenchmarkConfig>,
    failures: Arc<FailureDumper>,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(
        client: Client,
        config: Arc<BenchmarkConfig>,
        failures: Arc<FailureDumper>,
    ) -> Self {
        Self {
            client,
            config,
            failures,
        }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, item: WorkItem, worker: usize) -> RequestResult {
        let vars = RequestVars::new(item.test_number, worker);
        let request = match build_request(&self.client, &self.config, &vars) {
            Ok(request) => request,
            Err(err) => {
                let message = err.to_string();
                debug!("Request {} not sent: {}", item.test_number, message);
                self.failures.record_failure(0, "", &message).await;
                return RequestResult::errored(Duration::ZERO, err);
            }
        };

        let start = Instant::now();
        let sent = self.client.execute(request).await;
        let response_time = start.elapsed();

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                let err = HttpError::RequestFailed { source: err };
                let message = err.to_string();
                if err.is_timeout() {
                    debug!(
                        "Request {} timed out after {:?}",
                        item.test_number, response_time
                    );
                } else {
                    debug!(
                        "Request {} failed after {:?}: {}",
                        item.test_number, response_time, message
                    );
                }
                self.failures.record_failure(0, "", &message).await;
                return RequestResult::errored(response_time, err);
            }
        };

        let status = response.status().as_u16();
        let body = read_response_body(response).await;
        if (200..300).contains(&status) {
            return RequestResult::succeeded(response_time, status);
        }

        let message = format!("HTTP {} response", status);
        debug!("Request {} returned {}", item.test_number, message);
        self.failures.record_failure(status, &body, &message).await;
        RequestResult::rejected(response_time, status, body)
    }
}

/// Drains the whole body; a read error becomes the body text.
async fn read_response_body(response: reqwest::Response) -> String {
    let mut stream = response.bytes_stream();
    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(err) => return format!("Error reading response body: {}", err),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
