use reqwest::Client;

use crate::{
    domain::BenchmarkConfig,
    error::{AppError, AppResult, HttpError},
};

/// Builds the client shared by every worker for one run.
///
/// The timeout covers connect, send, and the full response.
pub(super) fn build_client(config: &BenchmarkConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
