use std::sync::Arc;

/// Application state shared across all handlers
///
/// Read-only once the router is built; every request sees the same greeting.
#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(greeting: &str) -> Self {
        Self {
            greeting: Arc::from(greeting),
        }
    }
}
