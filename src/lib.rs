//! # JobHaus
//!
//! Job board backend data layer for PostgreSQL: company and job
//! repositories built on a dynamic query-construction core (partial-update
//! SET builder, rule-driven WHERE builder).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobhaus::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "jobhaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let jobhaus = JobHaus::new(config).await?;
//!     jobhaus.ensure_schema().await?;
//!
//!     let company = jobhaus.companies().create(NewCompany {
//!         handle: "acme".to_string(),
//!         name: "Acme Corp".to_string(),
//!         description: Some("Anvils and rockets".to_string()),
//!         num_employees: Some(250),
//!         logo_url: None,
//!     }).await?;
//!     println!("Created company: {}", company.name);
//!
//!     let updated = jobhaus.companies().update(
//!         "acme",
//!         &UpdatePayload::new().set("numEmployees", json!(300)),
//!     ).await?;
//!     println!("Now {} employees", updated.num_employees.unwrap_or(0));
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::JobHaus;
pub use crate::errors::JobHausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig};

// Re-export the data access crate used by the public API
pub use job_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
