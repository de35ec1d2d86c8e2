//! User service - create, look up, deactivate and report on users

use tracing::{debug, info, warn};

use crate::adapters::InMemoryUserRepository;
use crate::domain::result::Result;
use crate::domain::{generate_user_id, NewUser, User, UserStatus, MINIMUM_AGE};
use crate::ports::UserRepository;

use super::report::{render_report, DirectorySummary};

/// User directory service
///
/// Owns its repository. Every instance is isolated, so tests and callers
/// can run as many directories side by side as they like.
#[derive(Debug)]
pub struct UserService<R: UserRepository = InMemoryUserRepository> {
    repository: R,
    minimum_age: i64,
    id_generator: fn() -> String,
}

impl UserService<InMemoryUserRepository> {
    /// Create a service backed by a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(InMemoryUserRepository::new())
    }
}

impl Default for UserService<InMemoryUserRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            minimum_age: MINIMUM_AGE,
            id_generator: generate_user_id,
        }
    }

    /// Replace the id source. Must keep producing unused ids, since
    /// creation retries until it draws one.
    pub fn with_id_generator(mut self, id_generator: fn() -> String) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Use a stricter age floor; values below the default floor are ignored
    pub fn with_minimum_age(mut self, minimum_age: i64) -> Self {
        self.minimum_age = minimum_age.max(MINIMUM_AGE);
        self
    }

    pub fn minimum_age(&self) -> i64 {
        self.minimum_age
    }

    /// Create a new active user
    ///
    /// Fails with a validation error when name, email or age is missing and
    /// with an age error when the user is under the minimum age.
    pub fn create_user(&mut self, input: NewUser) -> Result<User> {
        input.validate(self.minimum_age)?;
        let id = self.fresh_id();
        let user = input.into_user(id, self.minimum_age)?;

        self.repository.insert(user.clone());
        info!(user_id = %user.id, is_admin = user.is_admin, "user created");
        Ok(user)
    }

    /// Get a user by id
    pub fn get_user_by_id(&self, id: &str) -> Option<&User> {
        let user = self.repository.get(id);
        debug!(user_id = %id, found = user.is_some(), "user lookup");
        user
    }

    /// Deactivate a user without removing it
    ///
    /// Returns false for unknown ids and for admins, which are never
    /// deactivated. Deactivating an already inactive user returns true.
    pub fn deactivate_user(&mut self, id: &str) -> bool {
        let Some(user) = self.repository.get(id) else {
            debug!(user_id = %id, "deactivate: user not found");
            return false;
        };

        if !user.can_deactivate() {
            warn!(user_id = %id, "deactivate refused: admin users cannot be deactivated");
            return false;
        }

        if user.status == UserStatus::Inactive {
            return true;
        }

        let updated = self.repository.set_status(id, UserStatus::Inactive);
        info!(user_id = %id, "user deactivated");
        updated
    }

    /// All users in insertion order
    pub fn list_users(&self) -> Vec<&User> {
        self.repository.list()
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Render the plain-text user report, in insertion order
    pub fn generate_report(&self) -> String {
        render_report(&self.repository.list())
    }

    /// Counts plus a per-user listing, for JSON output
    pub fn summary(&self) -> DirectorySummary {
        DirectorySummary::from_users(&self.repository.list())
    }

    /// Drop every user. Test hook, not part of the production surface.
    #[doc(hidden)]
    pub fn reset(&mut self) {
        let cleared = self.repository.len();
        self.repository.clear();
        debug!(cleared, "user directory reset");
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = (self.id_generator)();
            if !self.repository.contains(&id) {
                return id;
            }
        }
    }
}
