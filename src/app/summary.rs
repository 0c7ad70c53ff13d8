mod lines;

use std::path::Path;

use crate::{domain::BenchmarkConfig, metrics::BenchmarkResult};

#[cfg(test)]
pub(crate) use lines::{config_lines, failure_dump_line, format_duration, result_lines};

pub(crate) fn print_config(config: &BenchmarkConfig) {
    for line in lines::config_lines(config) {
        println!("{}", line);
    }
    println!("{}", lines::SECTION_RULE);
}

pub(crate) fn print_failure_dump_summary(unique_failures: usize, dump_dir: &Path) {
    println!();
    println!("{}", lines::failure_dump_line(unique_failures, dump_dir));
}

pub(crate) fn print_results(result: &BenchmarkResult) {
    println!();
    for line in lines::result_lines(result) {
        println!("{}", line);
    }
}
