//! Core library for the `httpbench` CLI.
//!
//! Exposes the building blocks the binary is made of: argument and config
//! resolution into a [`domain::BenchmarkConfig`], the fixed worker pool and
//! HTTP executor, result aggregation, and the failure dump sink.
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sinks;
