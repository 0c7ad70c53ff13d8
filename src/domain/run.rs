use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::args::{HttpMethod, PositiveUsize};

/// Fully resolved benchmark settings.
///
/// Built once by the config layer with every default applied, then shared
/// read-only by all workers for the duration of the run.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub url: String,
    pub method: HttpMethod,
    pub auth_token: Option<String>,
    pub total_requests: usize,
    pub parallel_count: PositiveUsize,
    pub timeout: Duration,
    pub headers: BTreeMap<String, String>,
    pub parameters: BTreeMap<String, String>,
    /// Request body, already read from `post_file` when one was given.
    pub body: Option<String>,
    /// Path the body was read from, kept for display only.
    pub body_file: Option<String>,
    pub content_type: String,
    pub dump_failures_dir: Option<PathBuf>,
}

impl BenchmarkConfig {
    /// Body to send for this run's method, if any.
    #[must_use]
    pub fn request_body(&self) -> Option<&str> {
        if !self.method.carries_body() {
            return None;
        }
        self.body.as_deref().filter(|body| !body.is_empty())
    }
}

/// One unit of benchmark work, identified by its test index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub test_number: usize,
}
