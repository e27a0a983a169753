//! Easy CLI entry point.
//!
//! Reads commands from stdin, one per line, and prints each result to
//! stdout until `quit`. An optional first argument names a TOML config
//! file; `EASY_CLI_CONFIG` is consulted otherwise.

use anyhow::{Context, Result};

use easy_platform::DesktopPlatform;
use easy_terminal::{CommandRegistry, Environment, Session};
use easy_types::config::ShellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli_path = std::env::args().nth(1);
    let config = ShellConfig::resolve(cli_path.as_deref()).context("loading configuration")?;
    log::info!(
        "Starting Easy CLI (pip={}, npm={})",
        config.python_package_manager,
        config.node_package_manager,
    );

    let platform = DesktopPlatform::from_config(&config);
    let registry = CommandRegistry::with_builtins();
    let env = Environment::new(&config, &platform);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&registry);
    session
        .run(stdin.lock(), stdout.lock(), &env)
        .context("terminal I/O failed")?;

    log::info!("Session ended ({:?})", session.state());
    Ok(())
}
