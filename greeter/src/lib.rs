pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod variant;

// Re-exports for convenience
pub use config::Config;
pub use error::{GreeterError, GreeterResult};
pub use state::AppState;
pub use variant::Variant;
