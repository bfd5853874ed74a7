use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use strip_ansi_escapes::strip;

/// In-memory writer. Clones share the same buffer, so one clone can be
/// handed to a [`Sink`](crate::sink::Sink) while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, escape codes included.
    pub fn raw(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Lines with ANSI escape codes removed.
    pub fn lines(&self) -> Vec<String> {
        let stripped = strip(self.bytes.lock().as_slice());
        String::from_utf8_lossy(&stripped)
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn raw_lines(&self) -> Vec<String> {
        self.raw().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
