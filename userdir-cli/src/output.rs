//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use userdir_core::{DirectorySummary, User, UserStatus};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn status_label(status: UserStatus) -> String {
    match status {
        UserStatus::Active => status.to_string().green().to_string(),
        UserStatus::Inactive => status.to_string().yellow().to_string(),
    }
}

/// Print a single user as a vertical key/value table
pub fn print_user(user: &User) {
    let mut table = create_table();
    table.add_row(vec!["ID".to_string(), user.id.clone()]);
    table.add_row(vec!["Name".to_string(), user.name.clone()]);
    table.add_row(vec!["Email".to_string(), user.email.clone()]);
    table.add_row(vec!["Age".to_string(), user.age.to_string()]);
    table.add_row(vec!["Admin".to_string(), user.is_admin.to_string()]);
    table.add_row(vec![
        "Created".to_string(),
        user.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    ]);
    table.add_row(vec!["Status".to_string(), status_label(user.status)]);
    println!("{}", table);
}

/// Print the directory summary: counts first, then one row per user
pub fn print_summary(summary: &DirectorySummary) {
    println!("{}", "User Directory".bold());
    println!();

    let mut counts = Table::new();
    counts.set_content_arrangement(ContentArrangement::Dynamic);
    counts.add_row(vec!["Users", &summary.total_users.to_string()]);
    counts.add_row(vec!["Active", &summary.active_users.to_string()]);
    counts.add_row(vec!["Inactive", &summary.inactive_users.to_string()]);
    counts.add_row(vec!["Admins", &summary.admin_users.to_string()]);
    println!("{}", counts);

    if summary.users.is_empty() {
        return;
    }

    println!();
    let mut table = create_table();
    table.set_header(vec!["ID", "Name", "Status", "Admin"]);
    for user in &summary.users {
        table.add_row(vec![
            user.id.clone(),
            user.name.clone(),
            status_label(user.status),
            if user.is_admin { "yes".to_string() } else { String::new() },
        ]);
    }
    println!("{}", table);
}
