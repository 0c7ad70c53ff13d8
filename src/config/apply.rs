use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{HttpMethod, PositiveUsize, TesterArgs, parse_duration_arg};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// A config value only applies when the matching flag was not given on the
/// command line. Header and parameter maps are stored separately so CLI
/// pairs can be layered on top of them during resolution.
///
/// # Errors
///
/// Returns an error when a config value cannot be parsed.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = non_empty(config.url.as_ref())
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "method")
        && let Some(method) = non_empty(config.method.as_ref())
    {
        args.method = method.parse::<HttpMethod>()?;
    }

    if !is_cli(matches, "auth_token")
        && let Some(token) = non_empty(config.auth_token.as_ref())
    {
        args.auth_token = Some(token);
    }

    if !is_cli(matches, "total_requests")
        && let Some(total) = config.total_requests.filter(|total| *total > 0)
    {
        args.total_requests = PositiveUsize::try_from(total)?;
    }

    if !is_cli(matches, "parallel_count")
        && let Some(parallel) = config.parallel_count.filter(|parallel| *parallel > 0)
    {
        args.parallel_count = PositiveUsize::try_from(parallel)?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = non_empty(config.timeout.as_ref())
    {
        args.request_timeout = parse_duration_arg(&timeout).map_err(|err| {
            AppError::config(ConfigError::InvalidTimeout {
                value: timeout.clone(),
                source: err,
            })
        })?;
    }

    if let Some(headers) = config.headers.as_ref() {
        args.config_headers = headers.clone();
    }

    if let Some(parameters) = config.parameters.as_ref() {
        args.config_params = parameters.clone();
    }

    if !is_cli(matches, "post_file")
        && let Some(path) = non_empty(config.post_data_file.as_ref())
    {
        args.post_file = Some(path);
    }

    if !is_cli(matches, "post_data")
        && let Some(data) = non_empty(config.post_data.as_ref())
    {
        args.post_data = Some(data);
    }

    if !is_cli(matches, "content_type")
        && let Some(content_type) = non_empty(config.content_type.as_ref())
    {
        args.content_type = content_type;
    }

    if !is_cli(matches, "dump_failures")
        && let Some(dir) = non_empty(config.dump_failures_dir.as_ref())
    {
        args.dump_failures = Some(dir);
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = non_empty(config.export_json.as_ref())
    {
        args.export_json = Some(path);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.is_empty()).cloned()
}
