//! Repository port - user storage abstraction

use crate::domain::{User, UserStatus};

/// User storage abstraction
///
/// Implementations keep records in insertion order; `list` must return them
/// in the order they were inserted. Mutating methods take `&mut self`, so a
/// repository shared between callers needs an external lock.
pub trait UserRepository {
    /// Store a new record, replacing any record with the same id
    fn insert(&mut self, user: User);

    /// Get a record by id
    fn get(&self, id: &str) -> Option<&User>;

    /// Whether a record with this id exists
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Overwrite the status of a record, returning false if it does not exist
    fn set_status(&mut self, id: &str, status: UserStatus) -> bool;

    /// All records, in insertion order
    fn list(&self) -> Vec<&User>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record
    fn clear(&mut self);
}
