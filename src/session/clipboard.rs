//! Clipboard sinks
//!
//! Copying is fire-and-forget: the session hands the compact IBAN to a sink
//! and only cares whether the write succeeded so it can flash the "copied"
//! indicator. Front ends supply their own sink.

use thiserror::Error;

/// Clipboard write failures
#[derive(Debug, Error, PartialEq)]
pub enum ClipboardError {
    /// The platform clipboard rejected the write
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Destination for copied text
pub trait ClipboardSink {
    /// Writes `text` to the clipboard
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard
///
/// Keeps the last text written. Used by front ends without a system
/// clipboard and by tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
