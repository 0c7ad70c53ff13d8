use std::path::PathBuf;

use crate::args::{TesterArgs, parse_key_value_pairs};
use crate::domain::BenchmarkConfig;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Turns merged CLI/config arguments into the immutable run configuration.
///
/// # Errors
///
/// Returns an error when the URL is missing or the POST data file cannot be
/// read.
pub fn resolve_benchmark_config(args: &TesterArgs) -> AppResult<BenchmarkConfig> {
    let url = args
        .url
        .as_ref()
        .filter(|url| !url.trim().is_empty())
        .cloned()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;

    let mut headers = args.config_headers.clone();
    for raw in &args.headers {
        headers.extend(parse_key_value_pairs(raw, ':'));
    }

    let mut parameters = args.config_params.clone();
    for raw in &args.params {
        parameters.extend(parse_key_value_pairs(raw, '='));
    }

    let body_file = args
        .post_file
        .as_ref()
        .filter(|path| !path.is_empty())
        .cloned();
    let body = match args.post_data.as_ref().filter(|data| !data.is_empty()) {
        Some(data) => Some(data.clone()),
        None => match body_file.as_ref() {
            Some(path) => Some(std::fs::read_to_string(path).map_err(|err| {
                AppError::config(ConfigError::ReadPostData {
                    path: PathBuf::from(path),
                    source: err,
                })
            })?),
            None => None,
        },
    };

    Ok(BenchmarkConfig {
        url,
        method: args.method,
        auth_token: args
            .auth_token
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned(),
        total_requests: args.total_requests.get(),
        parallel_count: args.parallel_count,
        timeout: args.request_timeout,
        headers,
        parameters,
        body,
        body_file,
        content_type: args.content_type.clone(),
        dump_failures_dir: args
            .dump_failures
            .as_ref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from),
    })
}
