use anyhow::{Context, Result};
/// Test utilities for integration tests
/// Runs a router on a real loopback listener and talks to it over HTTP,
/// and captures `tracing` output for assertions
use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

pub const LOOPBACK: &str = "127.0.0.1:0";

/// Test fixture that owns a listener bound to an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Bind a fresh loopback port and serve `app` on it in the background
    pub async fn spawn(app: Router) -> Result<Self> {
        let listener = TcpListener::bind(LOOPBACK)
            .await
            .context("Failed to bind loopback listener")?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        self.client
            .get(&url)
            .send()
            .await
            .context(format!("GET {} failed", url))
    }

    /// Stop accepting connections and wait for the server task to finish
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        (&mut self.handle)
            .await
            .context("Server task panicked")?
            .context("Server returned an error")?;

        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Log sink for asserting on what a `tracing` subscriber wrote
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// A plain-text fmt subscriber that writes into this sink
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish()
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
