//! Output sinks for the trace lines emitted by variants.
//!
//! Variants never print directly. Each one holds a [`SharedSink`] handed to
//! it by the selector, so the destination of the trace is decided by
//! whoever builds the objects: the driver logs it, tests record it.

use std::sync::{Arc, Mutex, PoisonError};

/// Destination for trace lines.
pub trait TraceSink {
    /// Emit a single trace line.
    fn emit(&self, line: &str);
}

/// Sink handle shared by every part built from one selector call.
pub type SharedSink = Arc<dyn TraceSink + Send + Sync>;

/// Forwards trace lines to the `tracing` facade at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a shared handle to a log sink.
    #[must_use]
    pub fn shared() -> SharedSink {
        Arc::new(Self)
    }
}

impl TraceSink for LogSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "trace", "{line}");
    }
}

/// Prints trace lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a shared handle to a stdout sink.
    #[must_use]
    pub fn shared() -> SharedSink {
        Arc::new(Self)
    }
}

impl TraceSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Records trace lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of every line recorded so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget every recorded line.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}
