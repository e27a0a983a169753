//! Error types for Easy CLI.

/// Errors produced by commands, capabilities, and configuration loading.
///
/// Every variant renders as the line printed to the user, so the session
/// can forward `Display` output without further formatting.
#[derive(Debug, thiserror::Error)]
pub enum EasyError {
    /// Wrong number of arguments; holds the command's usage string.
    #[error("Usage: {0}")]
    Usage(String),

    /// An argument was present but malformed.
    #[error("Error: {0}")]
    InvalidArgument(String),

    #[error("Unknown command: {0}. Type 'help' for a list of commands.")]
    UnknownVerb(String),

    #[error("Error: {0}")]
    FileSystem(String),

    #[error("Error: {0}")]
    System(String),

    #[error("Error: {0}")]
    Process(String),

    #[error("Error: {0}")]
    Network(String),

    #[error("Error: {0}")]
    Subprocess(String),

    /// A package manager could not be spawned or exited unsuccessfully.
    #[error("Error {action} {ecosystem} package '{package}': {reason}")]
    Package {
        /// Progressive form of the action ("installing", "updating", "removing").
        action: &'static str,
        /// Ecosystem label ("Python", "Node").
        ecosystem: &'static str,
        package: String,
        reason: String,
    },

    #[error("config error: {0}")]
    Config(String),
}

/// Coarse classification of an [`EasyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Arity mismatch or malformed argument, caught before the handler runs.
    Usage,
    /// No handler is registered for the verb.
    UnknownVerb,
    /// A capability (filesystem, process table, network, subprocess) failed.
    Collaborator,
    /// Configuration could not be loaded.
    Config,
}

impl EasyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) | Self::InvalidArgument(_) => ErrorKind::Usage,
            Self::UnknownVerb(_) => ErrorKind::UnknownVerb,
            Self::Config(_) => ErrorKind::Config,
            Self::FileSystem(_)
            | Self::System(_)
            | Self::Process(_)
            | Self::Network(_)
            | Self::Subprocess(_)
            | Self::Package { .. } => ErrorKind::Collaborator,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EasyError>;
