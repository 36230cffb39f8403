//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CheckerConfig (validated, immutable)
//!     → handed to the checker for one run
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path (one-shot tool)
//! - All fields have defaults so the tool runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::CheckerConfig;
pub use schema::ConsumerConfig;
pub use schema::ProducerConfig;
pub use schema::TimingConfig;
