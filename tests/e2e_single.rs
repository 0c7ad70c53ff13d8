mod support_single;

use std::collections::BTreeSet;
use std::fs;
use std::process::Output;

use tempfile::tempdir;

use support_single::{run_httpbench, spawn_http_server};

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn expect_lines(stdout: &str, expected: &[&str]) -> Result<(), String> {
    for line in expected {
        if !stdout.lines().any(|candidate| candidate.starts_with(line)) {
            return Err(format!("Missing '{}' in output:\n{}", line, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_single_counts_failures_and_dumps_once() -> Result<(), String> {
    let (url, _server) = spawn_http_server(Some(4))?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let dump_dir = dir.path().join("failures");

    let args = vec![
        "-u".to_owned(),
        format!("{}/items/[test_number]", url),
        "-n".to_owned(),
        "10".to_owned(),
        "-p".to_owned(),
        "3".to_owned(),
        "--dump-failures".to_owned(),
        dump_dir.to_string_lossy().into_owned(),
    ];

    let output = run_httpbench(args, dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    expect_lines(
        &stdout,
        &[
            "Starting HTTP benchmark...",
            "Total requests:      10",
            "Successful requests: 9",
            "Failed requests:     1",
            "Success rate:        90.00%",
            "Failure dump summary: 1 unique failure types saved to",
            "  50th percentile:",
        ],
    )?;

    let dumps: Vec<_> = fs::read_dir(&dump_dir)
        .map_err(|err| format!("read dump dir failed: {}", err))?
        .collect();
    if dumps.len() != 1 {
        return Err(format!("Expected one dump file, got {}", dumps.len()));
    }
    Ok(())
}

#[test]
fn e2e_single_substitutes_test_numbers_into_url() -> Result<(), String> {
    let (url, server) = spawn_http_server(None)?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let args = vec![
        "--url".to_owned(),
        format!("{}/items/[test_number]", url),
        "--total".to_owned(),
        "5".to_owned(),
        "--parallel".to_owned(),
        "2".to_owned(),
        "--params".to_owned(),
        "worker=[thread_number]".to_owned(),
    ];

    let output = run_httpbench(args, dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let paths: BTreeSet<String> = server
        .request_lines()
        .iter()
        .filter_map(|line| line.split_whitespace().nth(1))
        .filter_map(|target| target.split('?').next())
        .map(str::to_owned)
        .collect();
    let expected: BTreeSet<String> = (0..5).map(|index| format!("/items/{}", index)).collect();
    if paths != expected {
        return Err(format!("Unexpected request paths: {:?}", paths));
    }
    let all_have_worker = server.request_lines().iter().all(|line| {
        line.contains("?worker=0 ") || line.contains("?worker=1 ")
    });
    if !all_have_worker {
        return Err(format!(
            "Expected worker parameter on every request: {:?}",
            server.request_lines()
        ));
    }
    Ok(())
}

#[test]
fn e2e_single_config_file_and_json_export() -> Result<(), String> {
    let (url, _server) = spawn_http_server(None)?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config_path = dir.path().join("bench.json");
    let export_path = dir.path().join("result.json");

    let config = serde_json::json!({
        "url": url,
        "method": "POST",
        "total_requests": 3,
        "parallel_count": 2,
        "timeout": "5s",
        "post_data": "{\"id\": [test_number]}",
        "headers": { "X-Test": "yes" },
        "export_json": export_path.to_string_lossy()
    });
    let json_bytes = serde_json::to_vec_pretty(&config)
        .map_err(|err| format!("serialize config failed: {}", err))?;
    fs::write(&config_path, json_bytes).map_err(|err| format!("write config failed: {}", err))?;

    let args = vec![
        "--config".to_owned(),
        config_path.to_string_lossy().into_owned(),
    ];
    let output = run_httpbench(args, dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    expect_lines(
        &stdout_of(&output),
        &["Method: POST", "POST data: [PROVIDED]", "Total requests:      3"],
    )?;

    let exported: serde_json::Value = serde_json::from_slice(
        &fs::read(&export_path).map_err(|err| format!("read export failed: {}", err))?,
    )
    .map_err(|err| format!("parse export failed: {}", err))?;
    if exported.get("total_requests").and_then(serde_json::Value::as_u64) != Some(3) {
        return Err(format!("Unexpected export: {}", exported));
    }
    if exported.get("successful_requests").and_then(serde_json::Value::as_u64) != Some(3) {
        return Err(format!("Unexpected export: {}", exported));
    }
    Ok(())
}

#[test]
fn e2e_single_default_config_is_discovered() -> Result<(), String> {
    let (url, _server) = spawn_http_server(None)?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!("url = \"{}\"\ntotal_requests = 2\nparallel_count = 1\n", url);
    fs::write(dir.path().join("httpbench.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_httpbench(Vec::<String>::new(), dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    expect_lines(&stdout_of(&output), &["Total requests:      2"])
}

#[test]
fn e2e_single_without_args_prints_help() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_httpbench(Vec::<String>::new(), dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if !stdout_of(&output).contains("Usage:") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_single_missing_url_fails() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_httpbench(["--total", "5"], dir.path())?;
    if output.status.success() {
        return Err(format!("Expected failure without URL\n{}", describe(&output)));
    }
    if stdout_of(&output).contains("BENCHMARK RESULTS") {
        return Err("No benchmark should run without a URL".to_owned());
    }
    Ok(())
}
