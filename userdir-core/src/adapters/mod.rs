//! Adapter implementations
//!
//! Concrete implementations of the port traits.

pub mod memory;

pub use memory::InMemoryUserRepository;
