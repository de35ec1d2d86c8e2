//! Demo command - seed sample users and show the result

use anyhow::Result;
use userdir_core::{DirectoryContext, NewUser};

use crate::output;

pub fn run(ctx: &mut DirectoryContext, json: bool) -> Result<()> {
    let service = &mut ctx.user_service;

    service.create_user(NewUser::new("Alice", "alice@example.com", 28))?;
    let bob = service.create_user(NewUser::new("Bob", "bob@example.com", 32))?;
    let admin = service.create_user(NewUser::new("Admin", "admin@example.com", 40).admin())?;

    let bob_deactivated = service.deactivate_user(&bob.id);
    let admin_deactivated = service.deactivate_user(&admin.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&service.summary())?);
        return Ok(());
    }

    if bob_deactivated {
        output::success(&format!("Deactivated {}", bob.name));
    }
    if !admin_deactivated {
        output::warning(&format!("{} is an admin and stays active", admin.name));
    }
    println!();
    print!("{}", service.generate_report());
    Ok(())
}
