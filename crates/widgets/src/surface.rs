use std::io::Write;
use std::sync::{Arc, Mutex};

/// A visible place to put the rendered summary.  Each call replaces the
/// previous text.
pub trait TextSurface: Send {
    fn set_text(&mut self, text: &str);
}

/// Prints every summary to standard output, followed by a blank line.
#[derive(Debug, Default)]
pub struct StdoutSurface;

impl TextSurface for StdoutSurface {
    fn set_text(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}\n").and_then(|()| out.flush()) {
            tracing::warn!("Cannot write to stdout: {e}");
        }
    }
}

/// In-memory surface whose clones share the same text.
///
/// Handy for embedding: hand one clone to the presenter, read the other.
#[derive(Debug, Clone, Default)]
pub struct SharedText {
    inner: Arc<Mutex<String>>,
}

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> String {
        match self.inner.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TextSurface for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
        guard.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_text_replaces_content() {
        let reader = SharedText::new();
        let mut writer = reader.clone();

        writer.set_text("first");
        writer.set_text("second");
        assert_eq!(reader.text(), "second");
    }
}
