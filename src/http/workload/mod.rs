//! Per-request construction and execution.
mod builders;
mod execution;
pub(crate) mod template;

pub use execution::{HttpExecutor, RequestExecutor};

#[cfg(test)]
pub(crate) use builders::{build_headers, resolve_url};
#[cfg(test)]
pub(crate) use template::RequestVars;
