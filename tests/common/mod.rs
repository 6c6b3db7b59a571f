#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use pwgauge::api::client::ClientError;
use pwgauge::api::models::{
    AnalysisExtras, AnalysisRequest, AnalysisResult, BootstrapResponse, Entropy,
};
use pwgauge::core::ports::{AnalysisBackend, CredentialStore};
use secrecy::ExposeSecret;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

pub fn result(score: u32, feedback: &[&str]) -> AnalysisResult {
    AnalysisResult {
        score,
        strength: "Strong".into(),
        length: 10,
        has_uppercase: true,
        has_lowercase: true,
        has_digits: true,
        has_special: true,
        entropy: Entropy::Number(45.2),
        time_to_crack: "3 years".into(),
        feedback: feedback.iter().map(|s| s.to_string()).collect(),
        extras: AnalysisExtras::default(),
    }
}

fn decode_error() -> ClientError {
    ClientError::Decode {
        what: "analysis result",
        source: serde_json::from_str::<u32>("{").unwrap_err(),
    }
}

/// What the mock answers for one password.
pub struct Scripted {
    pub gate: Option<oneshot::Receiver<()>>,
    pub reply: Option<AnalysisResult>,
}

/// In-process backend recording every request it sees.
#[derive(Default)]
pub struct MockBackend {
    pub bootstrap_calls: AtomicUsize,
    pub analyze_calls: AtomicUsize,
    pub fail_bootstrap: bool,
    seen: Mutex<Vec<(String, Option<String>, Option<f64>)>>,
    scripts: Mutex<HashMap<String, Scripted>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_bootstrap() -> Self {
        Self {
            fail_bootstrap: true,
            ..Self::default()
        }
    }

    /// Answer `password` with `reply` (None means a failed request).
    pub fn reply(&self, password: &str, reply: Option<AnalysisResult>) {
        self.scripts.lock().unwrap().insert(
            password.to_string(),
            Scripted { gate: None, reply },
        );
    }

    /// Like [`reply`](Self::reply) but held until the returned sender fires.
    pub fn gated_reply(&self, password: &str, reply: Option<AnalysisResult>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.scripts.lock().unwrap().insert(
            password.to_string(),
            Scripted {
                gate: Some(rx),
                reply,
            },
        );
        tx
    }

    pub fn seen(&self) -> Vec<(String, Option<String>, Option<f64>)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn analyze_count(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn bootstrap(&self) -> Result<BootstrapResponse, ClientError> {
        self.bootstrap_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_bootstrap {
            return Err(decode_error());
        }
        Ok(BootstrapResponse {
            message: "Sample data created successfully".into(),
            success: Some(true),
        })
    }

    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let password = request.password.expose_secret().to_string();
        self.seen.lock().unwrap().push((
            password.clone(),
            request.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            request.max_time_to_crack,
        ));
        let script = self.scripts.lock().unwrap().remove(&password);
        let Some(script) = script else {
            return Ok(result(50, &[]));
        };
        if let Some(gate) = script.gate {
            let _ = gate.await;
        }
        script.reply.ok_or_else(decode_error)
    }
}

/// Credential store held in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub values: Mutex<HashMap<String, String>>,
    pub writes: AtomicUsize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(anyhow!("storage unavailable"));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("storage is read-only"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Minimal HTTP/1.1 server answering each `(method, path)` with a canned
/// status and JSON body.
pub struct StubServer {
    pub url: Url,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

pub async fn spawn_stub(routes: Vec<(&'static str, &'static str, u16, String)>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut sock, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            let recorded = Arc::clone(&recorded);
            tokio::spawn(async move {
                let Some(req) = read_request(&mut sock).await else {
                    return;
                };
                let (status, body) = routes
                    .iter()
                    .find(|(m, p, _, _)| *m == req.method && *p == req.path)
                    .map(|(_, _, s, b)| (*s, b.clone()))
                    .unwrap_or((404, r#"{"error":"not found"}"#.to_string()));
                recorded.lock().unwrap().push(req);
                let response = format!(
                    "HTTP/1.1 {status} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = sock.write_all(response.as_bytes()).await;
                let _ = sock.shutdown().await;
            });
        }
    });

    StubServer {
        url: Url::parse(&format!("http://{addr}")).unwrap(),
        requests,
    }
}

async fn read_request(sock: &mut tokio::net::TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let path = first.next()?.to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    Some(Recorded { method, path, body })
}
