//! Built-in command registration and miscellaneous commands.

use easy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, CommandRegistry, Environment, Verb};

/// Register all built-in commands into a registry.
///
/// `help` and `quit` are handled by the registry itself and need no entry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    crate::register_file_commands(reg);
    crate::register_system_commands(reg);
    crate::register_network_commands(reg);
    crate::register_security_commands(reg);
    crate::register_package_commands(reg);
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn verb(&self) -> Verb {
        Verb::Clear
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        env.screen.clear()?;
        Ok(CommandOutput::Clear)
    }
}
