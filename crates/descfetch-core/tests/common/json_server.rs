//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one configured reply: a canned status and body,
//! a redirect to a second path that serves the body, or silence (accept, read
//! the request, never answer). Counts requests so tests can assert how often
//! a run hits the wire.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Path the redirect reply points at.
const REDIRECT_TARGET: &str = "/moved/variables.json";

#[derive(Debug, Clone)]
enum Reply {
    Canned { status: u16, body: Vec<u8> },
    Redirect { body: Vec<u8> },
    Silent,
}

/// Handle to a running server.
pub struct JsonServer {
    /// Request URL, e.g. "http://127.0.0.1:12345/variables.json".
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Requests received so far, redirect hops included.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Replies `status` with `body` to every request.
pub fn start(status: u16, body: &str) -> JsonServer {
    spawn(Reply::Canned {
        status,
        body: body.as_bytes().to_vec(),
    })
}

/// Replies 302 to the original path and 200 with `body` at the redirect target.
pub fn start_redirect(body: &str) -> JsonServer {
    spawn(Reply::Redirect {
        body: body.as_bytes().to_vec(),
    })
}

/// Accepts connections and reads requests but never replies.
pub fn start_silent() -> JsonServer {
    spawn(Reply::Silent)
}

/// A URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/variables.json", port)
}

/// Starts the server in a background thread. It runs until the process exits.
fn spawn(reply: Reply) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let reply = Arc::new(reply);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = Arc::clone(&reply);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &reply, &hits));
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/variables.json", port),
        hits,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

fn respond(stream: &mut TcpStream, status: u16, extra_headers: &str, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status,
        reason(status),
        body.len(),
        extra_headers
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

/// Path of the request line, e.g. "/variables.json".
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}

fn handle(mut stream: TcpStream, reply: &Reply, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    hits.fetch_add(1, Ordering::SeqCst);
    let request = String::from_utf8_lossy(&buf[..n]);

    match reply {
        Reply::Canned { status, body } => respond(&mut stream, *status, "", body),
        Reply::Redirect { body } => {
            if request_path(&request) == REDIRECT_TARGET {
                respond(&mut stream, 200, "", body);
            } else {
                let location = format!("Location: {}\r\n", REDIRECT_TARGET);
                respond(&mut stream, 302, &location, b"");
            }
        }
        Reply::Silent => {
            // Hold the connection open well past any client timeout.
            thread::sleep(Duration::from_secs(10));
        }
    }
}
