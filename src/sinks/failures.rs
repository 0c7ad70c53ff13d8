use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::SinkError;

const REPORT_SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Default)]
struct DumpState {
    seen: HashSet<String>,
    unique_failures: usize,
}

/// Writes one report file per distinct failure seen during a run.
///
/// Failures are keyed by the MD5 of their status, error message, and
/// body. The check-and-write happens under a single lock so concurrent
/// workers never produce duplicate files for the same signature.
#[derive(Debug)]
pub struct FailureDumper {
    dump_dir: Option<PathBuf>,
    state: Mutex<DumpState>,
}

impl FailureDumper {
    /// Creates a dumper writing into `dump_dir`, creating it if needed.
    ///
    /// A missing directory argument or a directory that cannot be created
    /// yields a disabled dumper; the run continues either way.
    pub async fn new(dump_dir: Option<&Path>) -> Self {
        let Some(dir) = dump_dir else {
            return Self::disabled();
        };
        if let Err(err) = tokio::fs::create_dir_all(dir).await {
            let err = SinkError::CreateDumpDir {
                path: dir.to_path_buf(),
                source: err,
            };
            warn!("{}; failure dumping disabled", err);
            return Self::disabled();
        }
        Self {
            dump_dir: Some(dir.to_path_buf()),
            state: Mutex::new(DumpState::default()),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            dump_dir: None,
            state: Mutex::new(DumpState::default()),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.dump_dir.is_some()
    }

    #[must_use]
    pub fn dump_dir(&self) -> Option<&Path> {
        self.dump_dir.as_deref()
    }

    pub async fn unique_failures(&self) -> usize {
        self.state.lock().await.unique_failures
    }

    /// Records a failure, writing a report only the first time its
    /// signature is seen. Write errors are logged and swallowed.
    pub async fn record_failure(&self, status_code: u16, response_body: &str, error_message: &str) {
        let Some(dir) = self.dump_dir.as_deref() else {
            return;
        };
        let signature = failure_signature(status_code, response_body, error_message);

        let mut state = self.state.lock().await;
        if !state.seen.insert(signature.clone()) {
            return;
        }
        state.unique_failures = state.unique_failures.saturating_add(1);

        let now = chrono::Local::now();
        let filename = format!(
            "failure_{}_{}_status_{}.txt",
            state.unique_failures,
            now.format("%Y%m%d_%H%M%S"),
            status_code
        );
        let path = dir.join(filename);
        let report = format_report(
            &now.format("%Y-%m-%d %H:%M:%S").to_string(),
            &signature,
            status_code,
            error_message,
            response_body,
        );

        match tokio::fs::write(&path, report).await {
            Ok(()) => debug!("Saved failure report {}", path.display()),
            Err(err) => {
                let err = SinkError::WriteFailureDump { path, source: err };
                warn!("{}", err);
            }
        }
    }
}

pub(crate) fn failure_signature(status_code: u16, response_body: &str, error_message: &str) -> String {
    let content = format!(
        "Status: {}\nError: {}\nResponse: {}",
        status_code, error_message, response_body
    );
    format!("{:x}", md5::compute(content.as_bytes()))
}

fn format_report(
    generated: &str,
    signature: &str,
    status_code: u16,
    error_message: &str,
    response_body: &str,
) -> String {
    format!(
        "HTTP Benchmark Failure Report\n\
         Generated: {generated}\n\
         Hash: {signature}\n\
         \n\
         Status Code: {status_code}\n\
         Error Message: {error_message}\n\
         \n\
         Response Headers: (captured in request)\n\
         Response Body:\n\
         {response_body}\n\
         \n\
         {REPORT_SEPARATOR}\n\
         This is a unique failure response that hasn't been seen before in this benchmark run.\n"
    )
}
