//! File operations: see, name-it, clean.

use std::path::Path;

use easy_platform::EntryKind;
use easy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, Environment, Verb};

// ---------------------------------------------------------------------------
// see
// ---------------------------------------------------------------------------

struct SeeCmd;
impl Command for SeeCmd {
    fn verb(&self) -> Verb {
        Verb::See
    }
    fn description(&self) -> &str {
        "List files in a directory"
    }
    fn usage(&self) -> &str {
        "see [path]"
    }
    fn category(&self) -> &str {
        "File Operations"
    }
    fn arity(&self) -> Arity {
        Arity::AtMost(1)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let path = args.first().copied().unwrap_or(".");
        let entries = env.fs.list_dir(Path::new(path))?;
        if entries.is_empty() {
            return Ok(CommandOutput::Text("(empty)".to_string()));
        }
        let lines: Vec<String> = entries
            .iter()
            .map(|e| {
                let suffix = if e.kind == EntryKind::Directory {
                    "/"
                } else {
                    ""
                };
                format!("{}{suffix}", e.name)
            })
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// name-it
// ---------------------------------------------------------------------------

struct NameItCmd;
impl Command for NameItCmd {
    fn verb(&self) -> Verb {
        Verb::NameIt
    }
    fn description(&self) -> &str {
        "Rename a file"
    }
    fn usage(&self) -> &str {
        "name-it [old] [new]"
    }
    fn category(&self) -> &str {
        "File Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let (old, new) = (args[0], args[1]);
        env.fs.rename(Path::new(old), Path::new(new))?;
        Ok(CommandOutput::Text(format!("Renamed '{old}' to '{new}'.")))
    }
}

// ---------------------------------------------------------------------------
// clean
// ---------------------------------------------------------------------------

struct CleanCmd;
impl Command for CleanCmd {
    fn verb(&self) -> Verb {
        Verb::Clean
    }
    fn description(&self) -> &str {
        "Delete a file"
    }
    fn usage(&self) -> &str {
        "clean [file]"
    }
    fn category(&self) -> &str {
        "File Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        env.fs.remove_file(Path::new(args[0]))?;
        Ok(CommandOutput::Text(format!("Deleted file '{}'.", args[0])))
    }
}

/// Register file commands.
pub fn register_file_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(SeeCmd));
    reg.register(Box::new(NameItCmd));
    reg.register(Box::new(CleanCmd));
}
