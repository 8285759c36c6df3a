//! Minimal HTTP/1.1 server for fetcher integration tests.
//!
//! Serves canned replies keyed by request path and records the raw request
//! heads it receives. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: &'static str,
    pub content_type: Option<&'static str>,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            content_type: Some(content_type),
            location: None,
            body,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            location: None,
            body: status.as_bytes().to_vec(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 Found",
            content_type: Some("text/html"),
            location: Some(location.to_string()),
            body: Vec::new(),
        }
    }
}

pub struct TestServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Raw request heads received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(routes: Vec<(&'static str, Reply)>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Reply>> = Arc::new(routes.into_iter().collect());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// Starts a server that accepts connections and never answers.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/slow.png", port)
}

/// A URL on a local port with nothing listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/gone.png", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<&'static str, Reply>, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let head = match read_head(&mut stream) {
        Some(h) => h,
        None => return,
    };
    let path = head
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(head);

    let reply = routes
        .get(path.as_str())
        .cloned()
        .unwrap_or_else(|| Reply::status("404 Not Found"));

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        reply.status,
        reply.body.len()
    );
    if let Some(ct) = reply.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(loc) = &reply.location {
        response.push_str(&format!("Location: {}\r\n", loc));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&reply.body);
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8(buf).ok()
}
