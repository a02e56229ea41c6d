//! Infrastructure layer
//!
//! Contains:
//! - Configuration and environment handling
//! - Database connection management
//! - Error types
//! - Application state

pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::{default_data_path, Config, OmdbConfig, TmdbConfig};
pub use db::{create_pool, DatabaseError};
pub use error::{AppError, AppResult};
pub use state::AppState;
