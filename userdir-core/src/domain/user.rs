//! User domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Youngest age accepted when creating a user
pub const MINIMUM_AGE: i64 = 18;

/// Number of random bytes behind a user id (hex-encoded to twice as many chars)
const USER_ID_BYTES: usize = 16;

/// Lifecycle status of a user record
///
/// The only allowed transition is `Active -> Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record held by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Random hex token, unique within a directory
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub status: UserStatus,
}

impl User {
    /// Whether the record may be moved to `Inactive`
    pub fn can_deactivate(&self) -> bool {
        !self.is_admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Input for creating a user
///
/// Fields are optional so callers can hand over whatever they received;
/// `None`, an empty string and an age of zero all count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    /// Create a regular (non-admin) user request with all fields present
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
            is_admin: false,
        }
    }

    /// Mark the requested user as an administrator
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Check required fields and the age floor, returning the validated parts
    ///
    /// Missing fields are reported before the age check, so an absent age is
    /// always a validation error and never an age error.
    pub fn validate(&self, minimum_age: i64) -> Result<(&str, &str, i64)> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let email = self.email.as_deref().filter(|s| !s.is_empty());
        let age = self.age.filter(|a| *a != 0);

        let (Some(name), Some(email), Some(age)) = (name, email, age) else {
            return Err(Error::validation("name, email and age are required"));
        };

        if age < minimum_age {
            return Err(Error::Age {
                age,
                minimum: minimum_age,
            });
        }

        Ok((name, email, age))
    }

    /// Build an active record from validated input
    pub fn into_user(self, id: String, minimum_age: i64) -> Result<User> {
        let (name, email, age) = self.validate(minimum_age)?;
        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
            is_admin: self.is_admin,
            created_at: Utc::now(),
            status: UserStatus::Active,
        })
    }
}

/// Generate a fresh user id: 16 bytes from the OS CSPRNG, hex-encoded
pub fn generate_user_id() -> String {
    let mut bytes = [0u8; USER_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_id_format() {
        let id = generate_user_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(id, generate_user_id());
    }

    #[test]
    fn test_validation_treats_empty_values_as_missing() {
        let base = NewUser::new("Ana", "ana@example.com", 30);

        for input in [
            NewUser { name: Some(String::new()), ..base.clone() },
            NewUser { email: None, ..base.clone() },
            NewUser { age: Some(0), ..base.clone() },
        ] {
            assert!(matches!(input.validate(MINIMUM_AGE), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_validation_age_floor() {
        let err = NewUser::new("Teen", "teen@example.com", 17)
            .validate(MINIMUM_AGE)
            .unwrap_err();
        assert!(matches!(err, Error::Age { age: 17, minimum: 18 }));

        assert!(NewUser::new("Adult", "adult@example.com", 18)
            .validate(MINIMUM_AGE)
            .is_ok());
    }

    #[test]
    fn test_negative_age_is_present_but_underage() {
        let input = NewUser {
            age: Some(-5),
            ..NewUser::new("Neg", "neg@example.com", 0)
        };
        let err = input.validate(MINIMUM_AGE).unwrap_err();
        assert!(matches!(err, Error::Age { age: -5, minimum: 18 }));
    }

    #[test]
    fn test_into_user_starts_active() {
        let user = NewUser::new("Root", "root@example.com", 40)
            .admin()
            .into_user("abc".to_string(), MINIMUM_AGE)
            .unwrap();
        assert_eq!(user.id, "abc");
        assert!(user.is_admin);
        assert!(user.is_active());
        assert!(!user.can_deactivate());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserStatus::Inactive).unwrap(), "\"inactive\"");
        assert_eq!(UserStatus::Active.to_string(), "active");
    }
}
