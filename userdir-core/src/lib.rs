//! userdir core - in-memory user directory
//!
//! This crate follows a small hexagonal layout:
//!
//! - **domain**: user records, creation input and errors
//! - **ports**: the `UserRepository` storage trait
//! - **services**: user operations and report rendering
//! - **adapters**: the in-memory repository

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;

use adapters::InMemoryUserRepository;
use config::Config;
use services::UserService;

// Re-export commonly used types at crate root
pub use domain::{NewUser, User, UserStatus};
pub use domain::result::{Error, OperationResult, Result};
pub use services::DirectorySummary;

/// Main context for directory operations
///
/// Holds the configuration and one isolated user directory. Nothing is
/// shared between contexts.
#[derive(Debug)]
pub struct DirectoryContext {
    pub config: Config,
    pub user_service: UserService<InMemoryUserRepository>,
}

impl DirectoryContext {
    /// Create a context from an already loaded configuration
    pub fn new(config: Config) -> Self {
        let user_service = UserService::in_memory().with_minimum_age(config.minimum_age);
        Self {
            config,
            user_service,
        }
    }

    /// Load configuration from the data directory and create a context
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        Ok(Self::new(config))
    }
}
