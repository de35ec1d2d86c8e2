//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

pub mod report;
mod user;

pub use report::{render_report, DirectorySummary, UserSummary};
pub use user::UserService;
