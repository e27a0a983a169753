//! System commands: watch, apps.
//!
//! Both sample the host on every invocation; nothing is cached between calls.

use std::path::Path;
use std::time::Duration;

use easy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, Environment, Verb};

// ---------------------------------------------------------------------------
// watch
// ---------------------------------------------------------------------------

struct WatchCmd;
impl Command for WatchCmd {
    fn verb(&self) -> Verb {
        Verb::Watch
    }
    fn description(&self) -> &str {
        "Show system stats"
    }
    fn usage(&self) -> &str {
        "watch"
    }
    fn category(&self) -> &str {
        "System Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let window = Duration::from_millis(env.config.cpu_sample_ms);
        let stats = env.system.stats(window, Path::new(&env.config.disk_mount))?;
        let rows = [
            ("CPU Usage (%)", stats.cpu_percent),
            ("Memory Usage (%)", stats.memory_percent),
            ("Disk Usage (%)", stats.disk_percent),
        ]
        .into_iter()
        .map(|(metric, value)| vec![metric.to_string(), format!("{value:.1}")])
        .collect();
        Ok(CommandOutput::Table {
            headers: vec!["Metric".to_string(), "Value".to_string()],
            rows,
        })
    }
}

// ---------------------------------------------------------------------------
// apps
// ---------------------------------------------------------------------------

struct AppsCmd;
impl Command for AppsCmd {
    fn verb(&self) -> Verb {
        Verb::Apps
    }
    fn description(&self) -> &str {
        "List running processes"
    }
    fn usage(&self) -> &str {
        "apps"
    }
    fn category(&self) -> &str {
        "System Operations"
    }
    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let procs = env.processes.processes(env.config.process_limit)?;
        let rows = procs
            .into_iter()
            .map(|p| vec![p.pid.to_string(), p.name])
            .collect();
        Ok(CommandOutput::Table {
            headers: vec!["PID".to_string(), "NAME".to_string()],
            rows,
        })
    }
}

/// Register system commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(WatchCmd));
    reg.register(Box::new(AppsCmd));
}
