//! Sinks for human-readable status lines.
//!
//! Strategies and the context describe what they are doing as plain text.
//! Where that text goes is up to the caller: the default forwards it to
//! `tracing`, tests usually record it.

use std::sync::{Mutex, PoisonError};

/// Receives status lines emitted by strategies and the planning context.
pub trait StatusObserver: Send + Sync {
    fn notify(&self, line: &str);
}

impl<F> StatusObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, line: &str) {
        self(line)
    }
}

/// Emits each status line as an INFO event.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingObserver;

impl StatusObserver for TracingObserver {
    fn notify(&self, line: &str) {
        tracing::info!(target: "forgeplan::status", "{line}");
    }
}

/// Discards all status lines.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl StatusObserver for NoopObserver {
    fn notify(&self, _line: &str) {}
}

/// Keeps every status line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    lines: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain recorded lines, leaving the recorder empty.
    pub fn take(&self) -> Vec<String> {
        core::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl StatusObserver for RecordingObserver {
    fn notify(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn recording_observer_keeps_order_and_drains() {
        let recorder = RecordingObserver::new();
        recorder.notify("first");
        recorder.notify("second");

        assert_eq!(recorder.lines(), vec!["first", "second"]);
        assert_eq!(recorder.take(), vec!["first", "second"]);
        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn closures_are_observers() {
        let count = AtomicUsize::new(0);
        let observer = |_: &str| {
            count.fetch_add(1, Ordering::SeqCst);
        };

        observer.notify("a");
        observer.notify("b");

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
