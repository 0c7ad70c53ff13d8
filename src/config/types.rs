use std::collections::BTreeMap;

use serde::Deserialize;

/// On-disk configuration (JSON or TOML).
///
/// Every field is optional; anything missing falls back to the CLI value.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<String>,
    pub auth_token: Option<String>,
    /// Zero is treated as unset.
    pub total_requests: Option<usize>,
    /// Zero is treated as unset.
    pub parallel_count: Option<usize>,
    /// Duration string, e.g. `"30s"` or `"1m30s"`.
    pub timeout: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    pub parameters: Option<BTreeMap<String, String>>,
    pub post_data_file: Option<String>,
    pub post_data: Option<String>,
    pub content_type: Option<String>,
    pub dump_failures_dir: Option<String>,
    pub export_json: Option<String>,
}
