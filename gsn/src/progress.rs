use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Snapshot of the search, reported once after every completed attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Number of the attempt that just completed, starting at 1
    pub attempt: usize,
    /// Configured number of attempts
    pub total: usize,
    /// Best attempt utilization found so far, never decreases within a search
    pub best_utilization: f64,
}

/// Best-effort observer of the search.
/// Returning an error does not stop the search, the error is only logged.
pub type ProgressCallback = Box<dyn FnMut(Progress) -> anyhow::Result<()> + Send>;

/// Cooperative cancellation flag shared between the caller and a running search.
/// The search only checks it between attempts, never during one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }
}
