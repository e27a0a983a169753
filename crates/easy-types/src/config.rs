//! Shell configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{EasyError, Result};

/// Environment variable naming a config file when none is given on the CLI.
pub const CONFIG_ENV_VAR: &str = "EASY_CLI_CONFIG";

/// Runtime configuration for the shell.
///
/// Every field is optional in the TOML source; missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Prompt written before each input line.
    pub prompt: String,
    /// Line printed once when the session starts.
    pub banner: String,
    /// Line printed when `quit` is entered.
    pub farewell: String,
    /// Length used by `secure-me` when no argument is given.
    pub password_length: usize,
    /// Optional upper bound accepted by `secure-me`; unbounded when unset.
    pub max_password_length: Option<usize>,
    /// Number of processes listed by `apps`.
    pub process_limit: usize,
    /// CPU sampling window for `watch`, in milliseconds.
    pub cpu_sample_ms: u64,
    /// Echo requests sent by `check`.
    pub ping_count: u32,
    /// Mount point whose usage `watch` reports.
    pub disk_mount: String,
    /// Executable used for Python package verbs.
    pub python_package_manager: String,
    /// Executable used for Node package verbs.
    pub node_package_manager: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            banner: "Starting Custom Terminal (type 'help' for commands)...".to_string(),
            farewell: "Exiting Custom Terminal. Goodbye!".to_string(),
            password_length: 12,
            max_password_length: None,
            process_limit: 10,
            cpu_sample_ms: 1000,
            ping_count: 4,
            disk_mount: "/".to_string(),
            python_package_manager: "pip".to_string(),
            node_package_manager: "npm".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EasyError::Config(format!("easy-cli.toml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| EasyError::Config(format!("{}: {e}", path.display())))?;
        log::info!("Loaded config from {}", path.display());
        Self::from_toml(&source)
    }

    /// Resolve the config from an explicit path, then `EASY_CLI_CONFIG`,
    /// falling back to defaults when neither is set.
    pub fn resolve(cli_path: Option<&str>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        match cli_path.map(str::to_string).or(env_path) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.password_length == 0 {
            return Err(EasyError::Config("password_length must be at least 1".to_string()));
        }
        if let Some(max) = self.max_password_length
            && self.password_length > max
        {
            return Err(EasyError::Config(format!(
                "password_length {} exceeds max_password_length {max}",
                self.password_length
            )));
        }
        if self.python_package_manager.trim().is_empty()
            || self.node_package_manager.trim().is_empty()
        {
            return Err(EasyError::Config(
                "package manager executables must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_match_shell_behaviour() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.password_length, 12);
        assert_eq!(config.max_password_length, None);
        assert_eq!(config.process_limit, 10);
        assert_eq!(config.cpu_sample_ms, 1000);
        assert_eq!(config.ping_count, 4);
        assert_eq!(config.python_package_manager, "pip");
        assert_eq!(config.node_package_manager, "npm");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(ShellConfig::from_toml("").unwrap(), ShellConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = ShellConfig::from_toml("prompt = \"$ \"\nprocess_limit = 3\n").unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.process_limit, 3);
        assert_eq!(config.password_length, 12);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ShellConfig::from_toml("colour = \"red\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(format!("{err}").contains("colour"));
    }

    #[test]
    fn default_length_above_max_is_rejected() {
        let err =
            ShellConfig::from_toml("password_length = 50\nmax_password_length = 10").unwrap_err();
        assert!(format!("{err}").contains("max_password_length"));
    }

    #[test]
    fn max_password_length_is_opt_in() {
        let config = ShellConfig::from_toml("max_password_length = 64").unwrap();
        assert_eq!(config.max_password_length, Some(64));
    }

    #[test]
    fn zero_default_length_is_rejected() {
        assert!(ShellConfig::from_toml("password_length = 0").is_err());
    }

    #[test]
    fn blank_package_manager_is_rejected() {
        assert!(ShellConfig::from_toml("node_package_manager = \"  \"").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("easy-cli.toml");
        std::fs::write(&path, "ping_count = 2\n").unwrap();
        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.ping_count, 2);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn resolve_prefers_cli_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli.toml");
        std::fs::write(&path, "farewell = \"bye\"\n").unwrap();
        let config = ShellConfig::resolve(path.to_str()).unwrap();
        assert_eq!(config.farewell, "bye");
    }
}
