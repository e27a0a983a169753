//! Desktop implementation of the platform services.
//!
//! Filesystem calls go through `std::fs`, resource and process queries
//! through `sysinfo`, name resolution through the system resolver, and
//! ping, package managers, and screen clearing through spawned executables.

use std::net::{IpAddr, ToSocketAddrs};
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use sysinfo::{Disks, System};

use easy_types::config::ShellConfig;
use easy_types::error::{EasyError, Result};

use crate::services::{
    DirEntry, Ecosystem, EntryKind, FileService, NetworkService, PackageAction, PackageService,
    ProcessInfo, ProcessService, ScreenService, SystemService, SystemStats,
};

/// Desktop platform backed by the host operating system.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    python_package_manager: String,
    node_package_manager: String,
}

impl DesktopPlatform {
    /// Platform using `pip` and `npm` from `PATH`.
    pub fn new() -> Self {
        Self::with_package_managers("pip", "npm")
    }

    /// Platform using explicit package-manager executables.
    pub fn with_package_managers(python: &str, node: &str) -> Self {
        Self {
            python_package_manager: python.to_string(),
            node_package_manager: node.to_string(),
        }
    }

    /// Platform configured from the shell config.
    pub fn from_config(config: &ShellConfig) -> Self {
        Self::with_package_managers(&config.python_package_manager, &config.node_package_manager)
    }

    fn package_manager(&self, ecosystem: Ecosystem) -> &str {
        match ecosystem {
            Ecosystem::Python => &self.python_package_manager,
            Ecosystem::Node => &self.node_package_manager,
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// `used / total` as a percentage, 0 when `total` is 0.
fn percent(used: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0) as f32
}

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

impl FileService for DesktopPlatform {
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let read = std::fs::read_dir(path)
            .map_err(|e| EasyError::FileSystem(format!("{}: {e}", path.display())))?;
        let mut entries = Vec::new();
        for entry in read {
            let entry =
                entry.map_err(|e| EasyError::FileSystem(format!("{}: {e}", path.display())))?;
            let kind = match entry.file_type() {
                Ok(t) if t.is_dir() => EntryKind::Directory,
                Ok(t) if t.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::rename(from, to).map_err(|e| {
            EasyError::FileSystem(format!(
                "cannot rename '{}' to '{}': {e}",
                from.display(),
                to.display()
            ))
        })
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path)
            .map_err(|e| EasyError::FileSystem(format!("cannot delete '{}': {e}", path.display())))
    }
}

// ---------------------------------------------------------------------------
// System resources and process table
// ---------------------------------------------------------------------------

impl SystemService for DesktopPlatform {
    fn stats(&self, cpu_window: Duration, mount: &Path) -> Result<SystemStats> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(EasyError::System(
                "resource counters are not supported on this platform".to_string(),
            ));
        }

        // CPU usage is the delta between two refreshes.
        let mut sys = System::new();
        sys.refresh_cpu();
        std::thread::sleep(cpu_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu();
        let cpu_percent = sys.global_cpu_info().cpu_usage();

        sys.refresh_memory();
        let total = sys.total_memory();
        let memory_percent = percent(total.saturating_sub(sys.available_memory()), total);

        let disks = Disks::new_with_refreshed_list();
        // Longest mount point that contains the requested path.
        let disk = disks
            .list()
            .iter()
            .filter(|d| mount.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| {
                EasyError::System(format!("no filesystem mounted at {}", mount.display()))
            })?;
        let disk_percent = percent(
            disk.total_space().saturating_sub(disk.available_space()),
            disk.total_space(),
        );

        log::debug!("stats: cpu={cpu_percent:.1} mem={memory_percent:.1} disk={disk_percent:.1}");
        Ok(SystemStats {
            cpu_percent,
            memory_percent,
            disk_percent,
        })
    }
}

impl ProcessService for DesktopPlatform {
    fn processes(&self, limit: usize) -> Result<Vec<ProcessInfo>> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(EasyError::Process(
                "process table is not supported on this platform".to_string(),
            ));
        }
        let mut sys = System::new();
        sys.refresh_processes();
        let mut procs: Vec<ProcessInfo> = sys
            .processes()
            .iter()
            .map(|(pid, p)| ProcessInfo {
                pid: pid.as_u32(),
                name: p.name().to_string(),
            })
            .collect();
        procs.sort_by_key(|p| p.pid);
        procs.truncate(limit);
        Ok(procs)
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

impl NetworkService for DesktopPlatform {
    fn ping(&self, host: &str, count: u32) -> Result<String> {
        if host.starts_with('-') {
            return Err(EasyError::Subprocess(format!("ping: invalid host '{host}'")));
        }
        let count_flag = if cfg!(windows) { "-n" } else { "-c" };
        log::debug!("spawning ping {count_flag} {count} {host}");
        let output = Command::new("ping")
            .args([count_flag, &count.to_string(), host])
            .output()
            .map_err(|e| EasyError::Subprocess(format!("ping: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.trim().is_empty() && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.trim();
            let reason = if reason.is_empty() {
                output.status.to_string()
            } else {
                reason.to_string()
            };
            return Err(EasyError::Subprocess(format!("ping: {reason}")));
        }
        Ok(stdout)
    }

    fn resolve(&self, domain: &str) -> Result<IpAddr> {
        let addrs: Vec<IpAddr> = (domain, 0)
            .to_socket_addrs()
            .map_err(|e| EasyError::Network(format!("{domain}: {e}")))?
            .map(|a| a.ip())
            .collect();
        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| EasyError::Network(format!("{domain}: no addresses found")))
    }
}

// ---------------------------------------------------------------------------
// Package managers
// ---------------------------------------------------------------------------

impl PackageService for DesktopPlatform {
    fn run(&self, ecosystem: Ecosystem, action: PackageAction, package: &str) -> Result<()> {
        let program = self.package_manager(ecosystem);
        let args = ecosystem.args(action, package);
        let failure = |reason: String| EasyError::Package {
            action: action.progressive(),
            ecosystem: ecosystem.label(),
            package: package.to_string(),
            reason,
        };
        if package.starts_with('-') {
            return Err(failure(format!("invalid package name '{package}'")));
        }

        log::debug!("spawning {program} {}", args.join(" "));
        let status = Command::new(program)
            .args(&args)
            .status()
            .map_err(|e| failure(format!("{program}: {e}")))?;
        if !status.success() {
            return Err(failure(format!("`{program} {}` {status}", args.join(" "))));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

impl ScreenService for DesktopPlatform {
    fn clear(&self) -> Result<()> {
        let status = if cfg!(windows) {
            Command::new("cmd").args(["/C", "cls"]).status()
        } else {
            Command::new("clear").status()
        };
        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => Err(EasyError::Subprocess(format!("clear: {s}"))),
            Err(e) => Err(EasyError::Subprocess(format!("clear: {e}"))),
        }
    }
}
