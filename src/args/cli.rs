use clap::Parser;
use std::collections::BTreeMap;
use std::time::Duration;

use super::defaults::DEFAULT_CONTENT_TYPE;
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{HttpMethod, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-pool async HTTP benchmark tool - templated per-request variables, nearest-rank latency percentiles, and de-duplicated failure dumps."
)]
pub struct TesterArgs {
    /// Path to config file (JSON/TOML). Defaults to ./httpbench.toml or ./httpbench.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Target URL to benchmark ([test_number] and [thread_number] are substituted per request)
    #[arg(long, short)]
    pub url: Option<String>,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Authorization token (sent as a Bearer token)
    #[arg(long = "token")]
    pub auth_token: Option<String>,

    /// Total number of requests to make
    #[arg(
        long = "total",
        short = 'n',
        default_value = "100",
        value_parser = parse_positive_usize
    )]
    pub total_requests: PositiveUsize,

    /// Number of parallel workers
    #[arg(
        long = "parallel",
        short = 'p',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub parallel_count: PositiveUsize,

    /// Request timeout (supports ns/us/ms/s/m/h with decimals, e.g. 500ms, 1.5s or 1m30s)
    #[arg(long = "timeout", default_value = "30s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Custom headers in 'key1:value1,key2:value2' format (repeatable)
    #[arg(long, short = 'H')]
    pub headers: Vec<String>,

    /// Query parameters in 'key1=value1,key2=value2' format (repeatable)
    #[arg(long = "params", short = 'P')]
    pub params: Vec<String>,

    /// Directory to dump failure responses into (only unique failures)
    #[arg(long = "dump-failures")]
    pub dump_failures: Option<String>,

    /// File containing the request body
    #[arg(long = "post-file")]
    pub post_file: Option<String>,

    /// Request body as a string (for POST/PUT/PATCH)
    #[arg(long = "post-data", short = 'd')]
    pub post_data: Option<String>,

    /// Content-Type for requests that carry a body
    #[arg(long = "content-type", short = 'T', default_value = DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Export the benchmark result to JSON
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by HTTPBENCH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Headers taken from the config file; CLI pairs are layered on top.
    #[arg(skip)]
    pub config_headers: BTreeMap<String, String>,

    /// Query parameters taken from the config file; CLI pairs are layered on top.
    #[arg(skip)]
    pub config_params: BTreeMap<String, String>,
}
