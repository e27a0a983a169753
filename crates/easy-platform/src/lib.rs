//! Platform capabilities for Easy CLI.
//!
//! Every operation the shell performs against the host goes through one of
//! the service traits in [`services`]. [`DesktopPlatform`] implements them
//! against the real operating system; tests substitute fakes.

mod desktop;
pub mod services;

pub use desktop::DesktopPlatform;
pub use services::{
    DirEntry, Ecosystem, EntryKind, FileService, NetworkService, PackageAction, PackageService,
    ProcessInfo, ProcessService, ScreenService, SystemService, SystemStats,
};
