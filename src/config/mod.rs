//! Configuration loading, merging, and resolution.
pub(crate) mod apply;
mod loader;
mod resolve;
pub mod types;

#[cfg(test)]
mod test_support;

pub use apply::apply_config;
pub use loader::load_config;
pub use resolve::resolve_benchmark_config;

#[cfg(test)]
pub(crate) use test_support::load_config_file;
