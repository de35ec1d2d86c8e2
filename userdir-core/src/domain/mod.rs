//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod user;
pub mod result;

pub use user::{generate_user_id, NewUser, User, UserStatus, MINIMUM_AGE};
