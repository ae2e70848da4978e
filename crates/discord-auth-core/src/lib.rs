#![doc = include_str!("../README.md")]

pub mod env;
pub mod error;

// Re-exports for convenience
pub use env::{detect_env_mode, init_tracing, EnvMode};
pub use error::{AuthError, Result};
