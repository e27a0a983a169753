//! Command trait, verb table, registry, and dispatch logic.
//!
//! A line is trimmed, split on whitespace, and its first token lower-cased
//! into a [`Verb`]. The registry resolves the verb to a handler, checks the
//! handler's [`Arity`] and argument validity, and runs it. Every outcome is
//! returned as data; nothing escapes the registry as a panic.

use std::collections::HashMap;

use easy_platform::{
    FileService, NetworkService, PackageService, ProcessService, ScreenService, SystemService,
};
use easy_types::config::ShellConfig;
use easy_types::error::{EasyError, Result};

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

/// Every verb the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    See,
    NameIt,
    Clean,
    Watch,
    Apps,
    Check,
    FindIp,
    SecureMe,
    GetIt,
    UpdateIt,
    DropIt,
    AddIt,
    UpgradeIt,
    RmIt,
    Clear,
    Help,
    Quit,
}

impl Verb {
    /// All verbs, in help-listing order.
    pub const ALL: [Verb; 17] = [
        Verb::See,
        Verb::NameIt,
        Verb::Clean,
        Verb::Watch,
        Verb::Apps,
        Verb::Check,
        Verb::FindIp,
        Verb::SecureMe,
        Verb::GetIt,
        Verb::UpdateIt,
        Verb::DropIt,
        Verb::AddIt,
        Verb::UpgradeIt,
        Verb::RmIt,
        Verb::Clear,
        Verb::Help,
        Verb::Quit,
    ];

    /// The name typed at the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::See => "see",
            Self::NameIt => "name-it",
            Self::Clean => "clean",
            Self::Watch => "watch",
            Self::Apps => "apps",
            Self::Check => "check",
            Self::FindIp => "find-ip",
            Self::SecureMe => "secure-me",
            Self::GetIt => "get-it",
            Self::UpdateIt => "update-it",
            Self::DropIt => "drop-it",
            Self::AddIt => "add-it",
            Self::UpgradeIt => "upgrade-it",
            Self::RmIt => "rm-it",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Look up a verb by name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|v| v.as_str() == lower)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of positional arguments a handler accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// Anywhere from zero up to this many.
    AtMost(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::AtMost(n) => count <= n,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsed input
// ---------------------------------------------------------------------------

/// One parsed input line: a lower-cased verb and its arguments in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub verb: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Parse a line. Returns `None` for blank input.
    ///
    /// There is no quoting: arguments are whitespace-separated tokens.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?.to_lowercase();
        Some(Self {
            verb,
            args: tokens.map(str::to_string).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// The screen was cleared; nothing further to print.
    Clear,
}

impl CommandOutput {
    /// Text to print for this output, or `None` when nothing is printed.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Table { headers, rows } => Some(render_table(headers, rows)),
            Self::Clear => None,
        }
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c:<width$}", width = widths[i]))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut lines = vec![format_row(headers)];
    if rows.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(rows.iter().map(|r| format_row(r)));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Environment and command trait
// ---------------------------------------------------------------------------

/// Capabilities and configuration passed to every command.
pub struct Environment<'a> {
    pub config: &'a ShellConfig,
    pub fs: &'a dyn FileService,
    pub system: &'a dyn SystemService,
    pub processes: &'a dyn ProcessService,
    pub network: &'a dyn NetworkService,
    pub packages: &'a dyn PackageService,
    pub screen: &'a dyn ScreenService,
}

impl<'a> Environment<'a> {
    /// Environment whose capabilities are all served by one platform.
    pub fn new<P>(config: &'a ShellConfig, platform: &'a P) -> Self
    where
        P: FileService
            + SystemService
            + ProcessService
            + NetworkService
            + PackageService
            + ScreenService,
    {
        Self {
            config,
            fs: platform,
            system: platform,
            processes: platform,
            network: platform,
            packages: platform,
            screen: platform,
        }
    }
}

/// A single executable command.
pub trait Command {
    /// The verb this command handles.
    fn verb(&self) -> Verb;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "name-it \[old\] \[new\]").
    fn usage(&self) -> &str;

    /// Heading the command is listed under in `help`.
    fn category(&self) -> &str {
        "Miscellaneous"
    }

    /// Accepted argument count.
    fn arity(&self) -> Arity;

    /// Reject malformed arguments before `execute` runs.
    fn validate(&self, _args: &[&str], _env: &Environment<'_>) -> Result<()> {
        Ok(())
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Result of dispatching one input line.
#[derive(Debug)]
pub enum Dispatch {
    /// The line was blank.
    Empty,
    /// The quit verb was entered.
    Quit,
    /// A command ran (or was rejected) and produced this result.
    Completed(Result<CommandOutput>),
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<Verb, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in command.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command for the same verb.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.verb(), cmd);
    }

    /// Whether a handler is registered for `verb`.
    pub fn contains(&self, verb: Verb) -> bool {
        self.commands.contains_key(&verb)
    }

    /// Parse and dispatch a single input line.
    pub fn dispatch(&self, line: &str, env: &Environment<'_>) -> Dispatch {
        let Some(parsed) = CommandLine::parse(line) else {
            return Dispatch::Empty;
        };
        let Some(verb) = Verb::from_name(&parsed.verb) else {
            log::debug!("unknown verb: {}", parsed.verb);
            return Dispatch::Completed(Err(EasyError::UnknownVerb(parsed.verb)));
        };
        let args: Vec<&str> = parsed.args.iter().map(String::as_str).collect();
        log::debug!("dispatch {verb} ({} args)", args.len());

        match verb {
            Verb::Quit => Dispatch::Quit,
            Verb::Help => Dispatch::Completed(self.execute_help(&args)),
            _ => Dispatch::Completed(self.execute(verb, &args, env)),
        }
    }

    /// Run the handler for `verb` after arity and argument checks.
    pub fn execute(
        &self,
        verb: Verb,
        args: &[&str],
        env: &Environment<'_>,
    ) -> Result<CommandOutput> {
        let cmd = self
            .commands
            .get(&verb)
            .ok_or_else(|| EasyError::UnknownVerb(verb.as_str().to_string()))?;
        if !cmd.arity().accepts(args.len()) {
            return Err(EasyError::Usage(cmd.usage().to_string()));
        }
        cmd.validate(args, env)?;
        cmd.execute(args, env)
    }

    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if !args.is_empty() {
            return Err(EasyError::Usage("help".to_string()));
        }
        Ok(CommandOutput::Text(self.help_text()))
    }

    /// Help listing grouped by category, in verb order.
    pub fn help_text(&self) -> String {
        let mut groups: Vec<(&str, Vec<(&str, &str)>)> = Vec::new();
        for verb in Verb::ALL {
            let (category, usage, description) = match verb {
                Verb::Help => ("Miscellaneous", "help", "Show this list of commands"),
                Verb::Quit => ("Miscellaneous", "quit", "Exit the terminal"),
                _ => match self.commands.get(&verb) {
                    Some(cmd) => (cmd.category(), cmd.usage(), cmd.description()),
                    None => continue,
                },
            };
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, entries)) => entries.push((usage, description)),
                None => groups.push((category, vec![(usage, description)])),
            }
        }

        let mut out =
            String::from("Welcome to your custom terminal! Here are the commands you can use:\n");
        for (category, entries) in &groups {
            out.push_str(&format!("\n{category}:\n"));
            for (usage, description) in entries {
                out.push_str(&format!("- {usage:<21}: {description}\n"));
            }
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
