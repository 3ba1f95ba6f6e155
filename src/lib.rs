pub mod ai;
pub mod api;
pub mod error;
pub mod format;
pub mod prompts;
pub mod util;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn ai::Completion>,
    pub last_greeting: LastGreeting,
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(completion: Arc<dyn ai::Completion>) -> Self {
        Self {
            completion,
            last_greeting: LastGreeting::default(),
            started_at: std::time::Instant::now(),
        }
    }
}

/// Process-wide slot holding the most recent formatted greeting.
///
/// Capacity one, unconditional overwrite, no expiry. Concurrent generations
/// race and whichever calls `set` last wins. The lock only guards the copy
/// in or out, never the upstream call.
#[derive(Clone, Default)]
pub struct LastGreeting {
    inner: Arc<parking_lot::Mutex<Option<String>>>,
}

impl LastGreeting {
    pub fn get(&self) -> Option<String> {
        self.inner.lock().clone()
    }

    pub fn set(&self, html: String) {
        *self.inner.lock() = Some(html);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_none()
    }
}
