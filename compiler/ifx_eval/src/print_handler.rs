//! Destination for `dbg` output.
//!
//! - Stderr: the default, the host's diagnostic stream
//! - Buffer: captured for assertions
//! - Silent: discarded

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line to stderr.
#[derive(Default)]
pub struct StderrPrintHandler;

impl StderrPrintHandler {
    pub fn println(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Captures lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler, dispatched by enum.
pub enum PrintHandlerImpl {
    Stderr(StderrPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stderr(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stderr(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an environment tree and its host.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stderr_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stderr(StderrPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
