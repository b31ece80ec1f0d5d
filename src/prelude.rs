//! Convenience re-exports for common JobHaus usage
//!
//! This prelude module re-exports the most commonly used items, making it
//! easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use jobhaus::prelude::*;
//!
//! // Now you have access to all the common JobHaus types
//! ```

// Core JobHaus components
pub use crate::core::JobHaus;
pub use crate::errors::JobHausError;
pub use crate::migration;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export commonly used job-store types for convenience
pub use job_store::prelude::*;

// Re-export the data access crate itself
pub use job_store;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
