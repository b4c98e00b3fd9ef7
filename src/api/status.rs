/// Sink for user-facing status lines (load summaries, lifecycle phases).
pub trait StatusSink {
    fn notify(&mut self, message: &str);
}

/// Discards every message.
#[derive(Debug, Default)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn notify(&mut self, _message: &str) {}
}

/// Retains every message in order. Used by tests and headless diagnostics.
#[derive(Debug, Default)]
pub struct MemoryStatus {
    messages: Vec<String>,
}

impl MemoryStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl StatusSink for MemoryStatus {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
