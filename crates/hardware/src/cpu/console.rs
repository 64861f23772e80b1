//! Console output sinks.
//!
//! Instructions that produce text (`print`) write through a [`Console`]
//! owned by the core, so hosts decide where the text goes.

use std::io::{self, Write};

/// Output channel for instruction-generated text.
pub trait Console: Send {
    /// Writes `text` verbatim.
    fn write_str(&mut self, text: &str);
}

/// Console that writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_str(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(%err, "console write failed");
        }
    }
}

/// Console that captures everything written to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    buf: String,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Returns and clears the captured text.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

impl Console for BufferConsole {
    fn write_str(&mut self, text: &str) {
        self.buf.push_str(text);
    }
}
