//! Network commands: check (ping), find-ip (DNS resolve).

use easy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, Environment, Verb};

/// Register network commands.
pub fn register_network_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(CheckCmd));
    reg.register(Box::new(FindIpCmd));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

struct CheckCmd;
impl Command for CheckCmd {
    fn verb(&self) -> Verb {
        Verb::Check
    }
    fn description(&self) -> &str {
        "Ping a host"
    }
    fn usage(&self) -> &str {
        "check [host]"
    }
    fn category(&self) -> &str {
        "Network Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let report = env.network.ping(args[0], env.config.ping_count)?;
        let report = report.trim_end();
        if report.is_empty() {
            return Ok(CommandOutput::Text(format!("check: no output from ping {}", args[0])));
        }
        Ok(CommandOutput::Text(report.to_string()))
    }
}

// ---------------------------------------------------------------------------
// find-ip
// ---------------------------------------------------------------------------

struct FindIpCmd;
impl Command for FindIpCmd {
    fn verb(&self) -> Verb {
        Verb::FindIp
    }
    fn description(&self) -> &str {
        "Resolve a domain to IP"
    }
    fn usage(&self) -> &str {
        "find-ip [domain]"
    }
    fn category(&self) -> &str {
        "Network Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let ip = env.network.resolve(args[0])?;
        Ok(CommandOutput::Text(ip.to_string()))
    }
}
