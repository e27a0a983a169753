//! Command router for Easy CLI.
//!
//! The router is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered under a `Verb`. The registry parses
//! input lines, resolves the verb, checks arity, and dispatches `execute()`.
//! `Session` wraps the registry in a read-eval-print loop.

mod commands;
pub mod file_commands;
mod interpreter;
pub mod network_commands;
pub mod package_commands;
pub mod security_commands;
mod session;
pub mod system_commands;

#[cfg(test)]
mod test_utils;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Register file commands (see, name-it, clean).
pub use file_commands::register_file_commands;
/// Verb arity declaration.
pub use interpreter::Arity;
/// A single executable command trait.
pub use interpreter::Command;
/// A parsed input line.
pub use interpreter::CommandLine;
/// Output produced by a command (text, table, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Result of dispatching one line.
pub use interpreter::Dispatch;
/// Capabilities and configuration passed to every command.
pub use interpreter::Environment;
/// Every verb the shell understands.
pub use interpreter::Verb;
/// Register network commands (check, find-ip).
pub use network_commands::register_network_commands;
/// Register Python and Node package commands.
pub use package_commands::register_package_commands;
/// Register password commands (secure-me).
pub use security_commands::{generate_password, register_security_commands};
/// Interactive session and router state.
pub use session::{RouterState, Session};
/// Register system commands (watch, apps).
pub use system_commands::register_system_commands;
