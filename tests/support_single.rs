use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl ServerHandle {
    /// Request lines seen so far, e.g. `GET /items/3 HTTP/1.1`.
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server for tests.
///
/// Every request gets `200 OK` except the one whose zero-based arrival
/// index equals `fail_at`, which gets `500` with body `boom`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(fail_at: Option<usize>) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let request_lines = Arc::new(Mutex::new(Vec::new()));
    let server_lines = Arc::clone(&request_lines);
    let hits = Arc::new(AtomicUsize::new(0));

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hit = hits.fetch_add(1, Ordering::SeqCst);
                    let fail = fail_at == Some(hit);
                    let lines = Arc::clone(&server_lines);
                    thread::spawn(move || handle_client(stream, fail, &lines));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            request_lines,
        },
    ))
}

fn handle_client(mut stream: TcpStream, fail: bool, lines: &Mutex<Vec<String>>) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    if let Some(first) = request.lines().next()
        && let Ok(mut lines) = lines.lock()
    {
        lines.push(first.to_owned());
    }

    let response: &[u8] = if fail {
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nboom"
    } else {
        b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK"
    };
    if stream.write_all(response).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Reads the request head plus any `Content-Length` body.
fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buffer = [0u8; 4096];
    loop {
        let read = stream.read(&mut buffer).ok()?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(buffer.get(..read)?);
        let text = String::from_utf8_lossy(&data).into_owned();
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            continue;
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if body.len() >= content_length {
            return Some(text);
        }
    }
    Some(String::from_utf8_lossy(&data).into_owned())
}

/// Run the `httpbench` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_httpbench<I, S>(args: I, current_dir: &Path) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = httpbench_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(current_dir)
        .env("RUST_LOG", "error")
        .env_remove("HTTPBENCH_LOG")
        .output()
        .map_err(|err| format!("run httpbench failed: {}", err))
}

fn httpbench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_httpbench").map_or_else(
        || Err("CARGO_BIN_EXE_httpbench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
