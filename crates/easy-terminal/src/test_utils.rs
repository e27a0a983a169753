//! Shared test utilities for command tests.
//!
//! Provides a [`FakePlatform`] that implements every capability, records
//! each call for assertion, and returns scripted results.

use std::cell::{Cell, RefCell};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use easy_platform::{
    DirEntry, Ecosystem, FileService, NetworkService, PackageAction, PackageService, ProcessInfo,
    ProcessService, ScreenService, SystemService, SystemStats,
};
use easy_types::error::{EasyError, Result};

/// A recorded capability call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListDir(PathBuf),
    Rename(PathBuf, PathBuf),
    RemoveFile(PathBuf),
    Stats { window: Duration, mount: PathBuf },
    Processes(usize),
    Ping(String, u32),
    Resolve(String),
    Package(Ecosystem, PackageAction, String),
    Clear,
}

/// A fake platform that records calls and replays scripted responses.
pub struct FakePlatform {
    calls: RefCell<Vec<Call>>,
    samples: Cell<u32>,
    pub entries: Vec<DirEntry>,
    pub fs_error: Option<String>,
    pub processes: Vec<ProcessInfo>,
    pub ping_output: String,
    pub address: Option<IpAddr>,
    pub package_error: Option<String>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            samples: Cell::new(0),
            entries: Vec::new(),
            fs_error: None,
            processes: Vec::new(),
            ping_output: String::new(),
            address: None,
            package_error: None,
        }
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn fs_result(&self, path: &Path) -> Result<()> {
        match &self.fs_error {
            Some(msg) => Err(EasyError::FileSystem(format!("{}: {msg}", path.display()))),
            None => Ok(()),
        }
    }
}

impl FileService for FakePlatform {
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        self.record(Call::ListDir(path.to_path_buf()));
        self.fs_result(path)?;
        Ok(self.entries.clone())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.record(Call::Rename(from.to_path_buf(), to.to_path_buf()));
        self.fs_result(from)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.record(Call::RemoveFile(path.to_path_buf()));
        self.fs_result(path)
    }
}

impl SystemService for FakePlatform {
    /// Each call returns a distinct CPU reading (1.0, 2.0, ...).
    fn stats(&self, cpu_window: Duration, mount: &Path) -> Result<SystemStats> {
        self.record(Call::Stats {
            window: cpu_window,
            mount: mount.to_path_buf(),
        });
        let n = self.samples.get() + 1;
        self.samples.set(n);
        Ok(SystemStats {
            cpu_percent: n as f32,
            memory_percent: 42.5,
            disk_percent: 73.4,
        })
    }
}

impl ProcessService for FakePlatform {
    fn processes(&self, limit: usize) -> Result<Vec<ProcessInfo>> {
        self.record(Call::Processes(limit));
        Ok(self.processes.iter().take(limit).cloned().collect())
    }
}

impl NetworkService for FakePlatform {
    fn ping(&self, host: &str, count: u32) -> Result<String> {
        self.record(Call::Ping(host.to_string(), count));
        Ok(self.ping_output.clone())
    }

    fn resolve(&self, domain: &str) -> Result<IpAddr> {
        self.record(Call::Resolve(domain.to_string()));
        self.address
            .ok_or_else(|| EasyError::Network(format!("{domain}: failed to lookup address")))
    }
}

impl PackageService for FakePlatform {
    fn run(&self, ecosystem: Ecosystem, action: PackageAction, package: &str) -> Result<()> {
        self.record(Call::Package(ecosystem, action, package.to_string()));
        match &self.package_error {
            Some(reason) => Err(EasyError::Package {
                action: action.progressive(),
                ecosystem: ecosystem.label(),
                package: package.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl ScreenService for FakePlatform {
    fn clear(&self) -> Result<()> {
        self.record(Call::Clear);
        Ok(())
    }
}
