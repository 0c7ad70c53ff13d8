mod app;
mod args;
mod config;
mod domain;
mod entry;
mod error;
mod http;
mod metrics;
mod sinks;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
