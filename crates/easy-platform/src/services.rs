//! Platform service traits and the data they exchange.

use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use easy_types::error::Result;

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

/// Type of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// A single entry returned by [`FileService::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Abstraction over the host filesystem.
pub trait FileService {
    /// Entries of `path`, sorted by name.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Rename `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> Result<()>;
}

// ---------------------------------------------------------------------------
// System resources
// ---------------------------------------------------------------------------

/// Snapshot of host resource usage, all values in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemStats {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub disk_percent: f32,
}

/// Abstraction over host resource counters.
pub trait SystemService {
    /// Sample resource usage. CPU usage is averaged over `cpu_window`;
    /// disk usage is reported for the filesystem mounted at `mount`.
    fn stats(&self, cpu_window: Duration, mount: &Path) -> Result<SystemStats>;
}

// ---------------------------------------------------------------------------
// Process table
// ---------------------------------------------------------------------------

/// One row of the process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
}

/// Abstraction over the OS process table.
pub trait ProcessService {
    /// At most `limit` processes, in ascending pid order.
    fn processes(&self, limit: usize) -> Result<Vec<ProcessInfo>>;
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Abstraction over ICMP reachability and name resolution.
pub trait NetworkService {
    /// Send `count` echo requests to `host` and return the raw report.
    fn ping(&self, host: &str, count: u32) -> Result<String>;

    /// Resolve `domain` through the system resolver.
    fn resolve(&self, domain: &str) -> Result<IpAddr>;
}

// ---------------------------------------------------------------------------
// Package managers
// ---------------------------------------------------------------------------

/// A package ecosystem with its own command-line manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Python,
    Node,
}

impl Ecosystem {
    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Node => "Node",
        }
    }

    /// Arguments passed to the ecosystem's manager for `action`.
    pub fn args(self, action: PackageAction, package: &str) -> Vec<String> {
        let head: &[&str] = match (self, action) {
            (Self::Python, PackageAction::Install) => &["install"],
            (Self::Python, PackageAction::Update) => &["install", "--upgrade"],
            (Self::Python, PackageAction::Remove) => &["uninstall", "-y"],
            (Self::Node, PackageAction::Install) => &["install"],
            (Self::Node, PackageAction::Update) => &["update"],
            (Self::Node, PackageAction::Remove) => &["uninstall"],
        };
        head.iter()
            .map(|s| s.to_string())
            .chain(std::iter::once(package.to_string()))
            .collect()
    }
}

/// Operation requested from a package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageAction {
    Install,
    Update,
    Remove,
}

impl PackageAction {
    /// "installing", "updating", "removing".
    pub fn progressive(self) -> &'static str {
        match self {
            Self::Install => "installing",
            Self::Update => "updating",
            Self::Remove => "removing",
        }
    }

    /// "installed", "updated", "removed".
    pub fn past(self) -> &'static str {
        match self {
            Self::Install => "installed",
            Self::Update => "updated",
            Self::Remove => "removed",
        }
    }
}

/// Abstraction over external package managers.
pub trait PackageService {
    /// Run the manager for `ecosystem` and block until it exits.
    fn run(&self, ecosystem: Ecosystem, action: PackageAction, package: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Abstraction over the controlling terminal.
pub trait ScreenService {
    /// Clear the terminal screen.
    fn clear(&self) -> Result<()>;
}
