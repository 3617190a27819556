//! Command implementations for the clinic CLI

pub mod ping;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use ping::run_ping;
pub use serve::run_serve;
