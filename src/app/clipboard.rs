//! Clipboard writing with a fallback path.

use crate::error::{ReframeError, Result};

/// A single clipboard backend.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// In-process clipboard: holds the last written text. Doubles as the
/// fallback selection buffer and as a test double.
#[derive(Default)]
pub struct BufferClipboard {
    contents: Option<String>,
}

impl BufferClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for BufferClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Primary writer with a fallback tried only when the primary fails.
pub struct ClipboardChain {
    primary: Box<dyn Clipboard>,
    fallback: Box<dyn Clipboard>,
}

impl ClipboardChain {
    pub fn new(primary: Box<dyn Clipboard>, fallback: Box<dyn Clipboard>) -> Self {
        Self { primary, fallback }
    }

    /// Both backends in-process; a chain that always succeeds.
    pub fn buffered() -> Self {
        Self::new(
            Box::new(BufferClipboard::new()),
            Box::new(BufferClipboard::new()),
        )
    }

    /// Copy `text`, falling through once. Both paths failing is the only
    /// user-visible clipboard error.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        if self.primary.write(text).is_ok() {
            return Ok(());
        }
        self.fallback
            .write(text)
            .map_err(|_| ReframeError::ClipboardUnavailable)
    }
}
