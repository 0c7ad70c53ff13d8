//! Output sinks that persist run artifacts outside the terminal.
mod failures;


pub use failures::FailureDumper;

#[cfg(test)]
pub(crate) use failures::failure_signature;
