use crate::state::AppState;
use axum::extract::State;

/// Root endpoint
///
/// Always answers, even when the configured greeting is empty.
pub async fn greeting_handler(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}
