//! Shell command - line-oriented access to one in-process directory
//!
//! Reads commands from stdin until EOF or `exit`. A failing command prints
//! its error and the shell keeps going.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use userdir_core::services::UserService;
use userdir_core::{DirectoryContext, DirectorySummary, NewUser, OperationResult, User};

use crate::output;

const HELP: &str = "\
Commands:
  create <name> <email> <age> [--admin]   Create a user
  get <id> [--json]                       Show a user
  deactivate <id>                         Deactivate a non-admin user
  report                                  Print the user report
  status [--json]                         Show directory counts
  help                                    Show this help
  exit | quit                             Leave the shell

Arguments after a bare -- are never read as flags.";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Create(NewUser),
    Get { id: String, json: bool },
    Deactivate { id: String },
    Report,
    Status { json: bool },
    Help,
    Exit,
}

/// What a command produced, ready to print
#[derive(Debug)]
pub enum Reply {
    Created(User),
    Found { user: Option<User>, json: bool },
    Deactivated { id: String, deactivated: bool },
    Report(String),
    Summary { summary: DirectorySummary, json: bool },
    Help,
    Exit,
}

/// Command arguments split into known flags and positionals
struct Args<'a> {
    flags: Vec<&'a str>,
    positional: Vec<&'a str>,
}

impl<'a> Args<'a> {
    /// Split `args`, rejecting any `--flag` not in `allowed`.
    /// Everything after a bare `--` is positional.
    fn parse(command: &str, args: &'a [String], allowed: &[&str]) -> Result<Self> {
        let mut flags = Vec::new();
        let mut positional = Vec::new();
        let mut flags_done = false;

        for arg in args.iter().map(String::as_str) {
            if flags_done {
                positional.push(arg);
            } else if arg == "--" {
                flags_done = true;
            } else if arg.starts_with("--") {
                if !allowed.contains(&arg) {
                    bail!("Unknown flag for {}: {}", command, arg);
                }
                flags.push(arg);
            } else {
                positional.push(arg);
            }
        }

        Ok(Self { flags, positional })
    }

    fn has(&self, flag: &str) -> bool {
        self.flags.contains(&flag)
    }

    /// Fail with the usage line unless the positional count is within range
    fn expect_count(&self, min: usize, max: usize, usage: &str) -> Result<()> {
        let count = self.positional.len();
        if count < min || count > max {
            bail!("Usage: {}", usage);
        }
        Ok(())
    }

    fn get(&self, index: usize) -> Option<&'a str> {
        self.positional.get(index).copied()
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let words = shell_words::split(line).context("Unbalanced quotes")?;
    let Some((name, args)) = words.split_first() else {
        return Ok(None);
    };
    if name.starts_with('#') {
        return Ok(None);
    }

    let command = match name.as_str() {
        "create" => {
            let args = Args::parse(name, args, &["--admin"])?;
            // Missing fields are left to the core validator.
            args.expect_count(0, 3, "create <name> <email> <age> [--admin]")?;
            let age = args
                .get(2)
                .filter(|raw| !raw.is_empty())
                .map(|raw| {
                    raw.parse::<i64>()
                        .map_err(|_| anyhow!("Age must be an integer, got {:?}", raw))
                })
                .transpose()?;
            ShellCommand::Create(NewUser {
                name: args.get(0).map(str::to_string),
                email: args.get(1).map(str::to_string),
                age,
                is_admin: args.has("--admin"),
            })
        }
        "get" => {
            let args = Args::parse(name, args, &["--json"])?;
            args.expect_count(1, 1, "get <id> [--json]")?;
            ShellCommand::Get {
                id: args.positional[0].to_string(),
                json: args.has("--json"),
            }
        }
        "deactivate" => {
            let args = Args::parse(name, args, &[])?;
            args.expect_count(1, 1, "deactivate <id>")?;
            ShellCommand::Deactivate {
                id: args.positional[0].to_string(),
            }
        }
        "report" => {
            Args::parse(name, args, &[])?.expect_count(0, 0, "report")?;
            ShellCommand::Report
        }
        "status" => {
            let args = Args::parse(name, args, &["--json"])?;
            args.expect_count(0, 0, "status [--json]")?;
            ShellCommand::Status {
                json: args.has("--json"),
            }
        }
        "help" | "?" => ShellCommand::Help,
        "exit" | "quit" => ShellCommand::Exit,
        other => bail!("Unknown command: {} (try 'help')", other),
    };

    Ok(Some(command))
}

/// Run a parsed command against the directory
pub fn execute(service: &mut UserService, command: ShellCommand) -> Result<Reply> {
    let reply = match command {
        ShellCommand::Create(input) => Reply::Created(service.create_user(input)?),
        ShellCommand::Get { id, json } => Reply::Found {
            user: service.get_user_by_id(&id).cloned(),
            json,
        },
        ShellCommand::Deactivate { id } => {
            let deactivated = service.deactivate_user(&id);
            Reply::Deactivated { id, deactivated }
        }
        ShellCommand::Report => Reply::Report(service.generate_report()),
        ShellCommand::Status { json } => Reply::Summary {
            summary: service.summary(),
            json,
        },
        ShellCommand::Help => Reply::Help,
        ShellCommand::Exit => Reply::Exit,
    };
    Ok(reply)
}

fn render(reply: &Reply) -> Result<()> {
    match reply {
        Reply::Created(user) => {
            output::success(&format!("Created user {}", user.id));
        }
        Reply::Found { user, json: true } => {
            let result = match user {
                Some(user) => OperationResult::ok(user),
                None => OperationResult::fail("User not found"),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Reply::Found { user: Some(user), .. } => output::print_user(user),
        Reply::Found { user: None, .. } => output::warning("User not found"),
        Reply::Deactivated { id, deactivated: true } => {
            output::success(&format!("Deactivated user {}", id));
        }
        Reply::Deactivated { id, deactivated: false } => {
            output::warning(&format!("User {} was not deactivated (unknown id or admin)", id));
        }
        Reply::Report(report) => {
            print!("{}", report);
            if !report.ends_with('\n') {
                println!();
            }
        }
        Reply::Summary { summary, json: true } => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        Reply::Summary { summary, .. } => output::print_summary(summary),
        Reply::Help => println!("{}", HELP),
        Reply::Exit => {}
    }
    Ok(())
}

pub fn run(ctx: &mut DirectoryContext) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        output::info("userdir shell - type 'help' for commands");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("ud> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        let reply = parse_command(&line)
            .and_then(|command| match command {
                Some(command) => execute(&mut ctx.user_service, command).map(Some),
                None => Ok(None),
            });

        match reply {
            Ok(Some(Reply::Exit)) => break,
            Ok(Some(reply)) => render(&reply)?,
            Ok(None) => {}
            Err(e) => output::error(&format!("{:#}", e)),
        }
    }

    Ok(())
}
