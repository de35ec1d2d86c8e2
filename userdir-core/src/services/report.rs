//! Report rendering - text report and summary counts

use serde::Serialize;

use crate::domain::{User, UserStatus};

/// First line of every text report
pub const REPORT_HEADER: &str = "--- User Report ---\n";

/// Body of the report when the directory is empty
pub const EMPTY_REPORT_MESSAGE: &str = "No users registered.";

/// Render the text report for the given records, in the order given
///
/// Each record gets one `ID: <id>, Name: <name>, Status: <status>` line.
pub fn render_report(users: &[&User]) -> String {
    let mut report = String::from(REPORT_HEADER);
    if users.is_empty() {
        report.push_str(EMPTY_REPORT_MESSAGE);
        return report;
    }

    for user in users {
        report.push_str(&format!(
            "ID: {}, Name: {}, Status: {}\n",
            user.id, user.name, user.status
        ));
    }
    report
}

/// Aggregate view of the directory for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub admin_users: usize,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub status: UserStatus,
    pub is_admin: bool,
}

impl DirectorySummary {
    pub fn from_users(users: &[&User]) -> Self {
        let active_users = users.iter().filter(|u| u.is_active()).count();
        Self {
            total_users: users.len(),
            active_users,
            inactive_users: users.len() - active_users,
            admin_users: users.iter().filter(|u| u.is_admin).count(),
            users: users
                .iter()
                .map(|u| UserSummary {
                    id: u.id.clone(),
                    name: u.name.clone(),
                    status: u.status,
                    is_admin: u.is_admin,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, MINIMUM_AGE};

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&[]), "--- User Report ---\nNo users registered.");
    }

    #[test]
    fn test_report_lines() {
        let alice = NewUser::new("Alice", "alice@example.com", 28)
            .into_user("aa".to_string(), MINIMUM_AGE)
            .unwrap();
        let mut bob = NewUser::new("Bob", "bob@example.com", 32)
            .into_user("bb".to_string(), MINIMUM_AGE)
            .unwrap();
        bob.status = UserStatus::Inactive;

        assert_eq!(
            render_report(&[&alice, &bob]),
            "--- User Report ---\n\
             ID: aa, Name: Alice, Status: active\n\
             ID: bb, Name: Bob, Status: inactive\n"
        );
    }

    #[test]
    fn test_summary_counts() {
        let admin = NewUser::new("Root", "root@example.com", 40)
            .admin()
            .into_user("r".to_string(), MINIMUM_AGE)
            .unwrap();
        let mut carl = NewUser::new("Carl", "carl@example.com", 35)
            .into_user("c".to_string(), MINIMUM_AGE)
            .unwrap();
        carl.status = UserStatus::Inactive;

        let summary = DirectorySummary::from_users(&[&admin, &carl]);
        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.active_users, 1);
        assert_eq!(summary.inactive_users, 1);
        assert_eq!(summary.admin_users, 1);
        assert_eq!(summary.users[1].name, "Carl");
    }
}
