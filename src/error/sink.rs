use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to create dump directory '{path}': {source}")]
    CreateDumpDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write failure dump '{path}': {source}")]
    WriteFailureDump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize JSON export: {source}")]
    SerializeExport {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write JSON export '{path}': {source}")]
    WriteExport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
