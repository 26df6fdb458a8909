// Module declarations for HTTP handlers
pub mod greeting;
pub mod health;

// Re-exports
pub use greeting::greeting_handler;
pub use health::health_handler;
