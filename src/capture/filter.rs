//! Capture filter state machine

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::config::CaptureConfig;
use crate::storage::LogWriter;

use super::{LogEntry, ObservedRequest};

/// Recording flag plus the session buffer, mutated only under the lock
#[derive(Debug, Default)]
struct CaptureState {
    recording: bool,
    buffer: Vec<LogEntry>,
}

/// Stateful request observer
///
/// Arms on a GET whose URL contains the start marker, buffers every request
/// while armed, and flushes the buffer to the configured log file on a GET
/// whose URL contains the stop marker. Re-arming mid-session discards the
/// unsaved buffer: only the latest bracketed session is ever persisted.
pub struct CaptureFilter {
    config: Arc<CaptureConfig>,
    writer: LogWriter,
    state: Mutex<CaptureState>,
}

impl CaptureFilter {
    /// Create a filter for the given configuration
    #[must_use]
    pub fn new(config: Arc<CaptureConfig>) -> Self {
        let writer = LogWriter::new(&config);

        Self {
            config,
            writer,
            state: Mutex::new(CaptureState::default()),
        }
    }

    /// Request hook, invoked by the host proxy for every intercepted request
    ///
    /// Start check, capture, and stop check run in that order under a single
    /// lock, so concurrent invocations serialize and a flush can never race
    /// an append. The lock is released before the file write; the flush
    /// operates on a snapshot of the buffer. Persistence failures are logged
    /// and swallowed, never surfaced to the host.
    pub async fn on_request(&self, req: &ObservedRequest) {
        debug!("Inspecting request: {}", req.url);

        let mut state = self.state.lock().await;

        if req.method == "GET" && req.url.contains(&self.config.start_marker) {
            state.recording = true;
            state.buffer.clear();
            info!("Started capturing network logs at: {}", req.url);
        }

        if state.recording {
            state.buffer.push(LogEntry::from_request(req));
            info!("Captured request: {} {}", req.method, req.url);
        }

        // The stop trigger was captured above, so it becomes the final entry
        // of the persisted session.
        if state.recording && req.method == "GET" && req.url.contains(&self.config.stop_marker) {
            state.recording = false;
            info!("Stopped capturing network logs at: {}", req.url);

            let entries = state.buffer.clone();
            drop(state);

            match self.writer.write(&entries) {
                Ok(path) => info!("Network logs saved to '{}'", path.display()),
                Err(e) => error!("Failed to save network logs: {e}"),
            }
        }
    }

    /// Whether a session is currently being recorded
    pub async fn is_recording(&self) -> bool {
        self.state.lock().await.recording
    }

    /// Number of entries buffered for the current session
    pub async fn buffered_count(&self) -> usize {
        self.state.lock().await.buffer.len()
    }

    /// Copy of the currently buffered entries
    pub async fn snapshot(&self) -> Vec<LogEntry> {
        self.state.lock().await.buffer.clone()
    }

    /// Destination path of the persisted log file
    #[must_use]
    pub fn log_path(&self) -> &std::path::Path {
        self.writer.path()
    }
}
