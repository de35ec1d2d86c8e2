//! In-memory user repository
//!
//! Records live in a `HashMap` keyed by id. A separate key vector keeps the
//! insertion order the report relies on.

use std::collections::HashMap;

use crate::domain::{User, UserStatus};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
    order: Vec<String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&mut self, user: User) {
        let id = user.id.clone();
        if self.users.insert(id.clone(), user).is_none() {
            self.order.push(id);
        }
    }

    fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    fn set_status(&mut self, id: &str, status: UserStatus) -> bool {
        match self.users.get_mut(id) {
            Some(user) => {
                user.status = status;
                true
            }
            None => false,
        }
    }

    fn list(&self) -> Vec<&User> {
        self.order
            .iter()
            .filter_map(|id| self.users.get(id))
            .collect()
    }

    fn len(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        self.users.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, MINIMUM_AGE};

    fn user(id: &str, name: &str) -> User {
        NewUser::new(name, format!("{}@example.com", name.to_lowercase()), 30)
            .into_user(id.to_string(), MINIMUM_AGE)
            .unwrap()
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("f0", "Zed"));
        repo.insert(user("0a", "Amy"));
        repo.insert(user("77", "Max"));

        let names: Vec<&str> = repo.list().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
    }

    #[test]
    fn test_reinsert_does_not_duplicate_order() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("a1", "Amy"));
        repo.insert(user("a1", "Amy Renamed"));

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.get("a1").unwrap().name, "Amy Renamed");
    }

    #[test]
    fn test_set_status_and_clear() {
        let mut repo = InMemoryUserRepository::new();
        repo.insert(user("b2", "Bob"));

        assert!(repo.set_status("b2", UserStatus::Inactive));
        assert_eq!(repo.get("b2").unwrap().status, UserStatus::Inactive);
        assert!(!repo.set_status("missing", UserStatus::Inactive));

        repo.clear();
        assert!(repo.is_empty());
        assert!(!repo.contains("b2"));
        assert!(repo.list().is_empty());
    }
}
