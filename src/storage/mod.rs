//! # Storage Layer
//!
//! Everything that reads or writes the file system.
//!
//! | Concern | Type | Notes |
//! |---------|------|-------|
//! | Configuration | [`Config`] | `custom-view.toml`, then the global config dir |
//! | View files | [`ViewFiles`] / [`FsViewFiles`] | writes are atomic (temp file + rename) |
//! | Permissions | [`PermissionApplier`] / [`SystemPermissions`] | every failure is non-fatal |

mod config;
mod files;
mod permissions;

pub use config::{Config, ConfigError, ViewConfig};
pub use files::{FsViewFiles, ViewFiles};
pub use permissions::{apply as apply_permissions, parse_mode, PermissionApplier, PermissionError, SystemPermissions};
