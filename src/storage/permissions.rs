//! File permissions for generated views
//!
//! Mode, owner and group are applied independently. A failure in one step is
//! reported and the remaining steps still run.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use thiserror::Error;

use crate::domain::PermissionSpec;

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum PermissionError {
    #[error("Invalid mode '{mode}': expected an octal value such as 644")]
    InvalidMode { mode: String },

    #[error("Failed to {op} {}: {message}", .path.display())]
    Failed {
        op: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("{op} is not supported on this platform")]
    Unsupported { op: &'static str },
}

impl PermissionError {
    fn failed(op: &'static str, path: &Path, message: impl Into<String>) -> Self {
        PermissionError::Failed {
            op,
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Applies mode, owner and group to a path
pub trait PermissionApplier {
    fn chmod(&self, path: &Path, mode: u32) -> Result<(), PermissionError>;

    fn chown(&self, path: &Path, owner: &str) -> Result<(), PermissionError>;

    fn chgrp(&self, path: &Path, group: &str) -> Result<(), PermissionError>;
}

/// Parses an octal mode string such as `644` or `0755`
pub fn parse_mode(mode: &str) -> Result<u32, PermissionError> {
    let trimmed = mode.trim().trim_start_matches("0o");
    match u32::from_str_radix(trimmed, 8) {
        Ok(value) if !trimmed.is_empty() && value <= 0o7777 => Ok(value),
        _ => Err(PermissionError::InvalidMode {
            mode: mode.to_string(),
        }),
    }
}

/// Applies every part of `spec`, collecting failures instead of stopping
pub fn apply(applier: &dyn PermissionApplier, path: &Path, spec: &PermissionSpec) -> Vec<PermissionError> {
    let mut warnings = Vec::new();

    match parse_mode(&spec.mode) {
        Ok(mode) => {
            if let Err(e) = applier.chmod(path, mode) {
                warnings.push(e);
            }
        }
        Err(e) => warnings.push(e),
    }

    if let Some(owner) = &spec.owner {
        if let Err(e) = applier.chown(path, owner) {
            warnings.push(e);
        }
    }

    if let Some(group) = &spec.group {
        if let Err(e) = applier.chgrp(path, group) {
            warnings.push(e);
        }
    }

    warnings
}

/// [`PermissionApplier`] using the OS: `chmod` through std, ownership
/// through the system `chown`/`chgrp` commands
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPermissions;

impl SystemPermissions {
    /// `program -- <arg> <path>`; the `--` keeps a leading `-` in `arg` from
    /// being read as an option
    fn command(program: &str, arg: &str, path: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.arg("--").arg(arg).arg(path);
        cmd
    }

    fn run(op: &'static str, program: &str, arg: &str, path: &Path) -> Result<(), PermissionError> {
        let output = Self::command(program, arg, path)
            .output()
            .map_err(|e| PermissionError::failed(op, path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PermissionError::failed(op, path, stderr.trim()));
        }

        Ok(())
    }
}

impl PermissionApplier for SystemPermissions {
    #[cfg(unix)]
    fn chmod(&self, path: &Path, mode: u32) -> Result<(), PermissionError> {
        use std::os::unix::fs::PermissionsExt;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .map_err(|e| PermissionError::failed("chmod", path, e.to_string()))
    }

    #[cfg(not(unix))]
    fn chmod(&self, _path: &Path, _mode: u32) -> Result<(), PermissionError> {
        Err(PermissionError::Unsupported { op: "chmod" })
    }

    fn chown(&self, path: &Path, owner: &str) -> Result<(), PermissionError> {
        if cfg!(unix) {
            Self::run("chown", "chown", owner, path)
        } else {
            Err(PermissionError::Unsupported { op: "chown" })
        }
    }

    fn chgrp(&self, path: &Path, group: &str) -> Result<(), PermissionError> {
        if cfg!(unix) {
            Self::run("chgrp", "chgrp", group, path)
        } else {
            Err(PermissionError::Unsupported { op: "chgrp" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingApplier {
        calls: RefCell<Vec<String>>,
        fail_owner: bool,
    }

    impl PermissionApplier for RecordingApplier {
        fn chmod(&self, _path: &Path, mode: u32) -> Result<(), PermissionError> {
            self.calls.borrow_mut().push(format!("chmod {:o}", mode));
            Ok(())
        }

        fn chown(&self, path: &Path, owner: &str) -> Result<(), PermissionError> {
            self.calls.borrow_mut().push(format!("chown {}", owner));
            if self.fail_owner {
                return Err(PermissionError::failed("chown", path, "not permitted"));
            }
            Ok(())
        }

        fn chgrp(&self, _path: &Path, group: &str) -> Result<(), PermissionError> {
            self.calls.borrow_mut().push(format!("chgrp {}", group));
            Ok(())
        }
    }

    fn spec(mode: &str, owner: Option<&str>, group: Option<&str>) -> PermissionSpec {
        PermissionSpec {
            mode: mode.to_string(),
            owner: owner.map(String::from),
            group: group.map(String::from),
        }
    }

    #[test]
    fn parse_octal_modes() {
        assert_eq!(parse_mode("644").unwrap(), 0o644);
        assert_eq!(parse_mode("0755").unwrap(), 0o755);
        assert_eq!(parse_mode("0o600").unwrap(), 0o600);
        assert!(parse_mode("").is_err());
        assert!(parse_mode("rw-r--r--").is_err());
        assert!(parse_mode("999").is_err());
        assert!(parse_mode("17777").is_err());
    }

    #[test]
    fn apply_runs_every_step() {
        let applier = RecordingApplier::default();
        let warnings = apply(&applier, Path::new("x"), &spec("640", Some("www-data"), Some("staff")));

        assert!(warnings.is_empty());
        assert_eq!(
            *applier.calls.borrow(),
            vec!["chmod 640", "chown www-data", "chgrp staff"]
        );
    }

    #[test]
    fn apply_skips_unset_owner_and_group() {
        let applier = RecordingApplier::default();
        let warnings = apply(&applier, Path::new("x"), &spec("644", None, None));

        assert!(warnings.is_empty());
        assert_eq!(*applier.calls.borrow(), vec!["chmod 644"]);
    }

    #[test]
    fn failures_do_not_stop_later_steps() {
        let applier = RecordingApplier {
            fail_owner: true,
            ..Default::default()
        };
        let warnings = apply(&applier, Path::new("x"), &spec("bogus", Some("root"), Some("wheel")));

        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], PermissionError::InvalidMode { .. }));
        assert!(matches!(warnings[1], PermissionError::Failed { op: "chown", .. }));
        assert_eq!(*applier.calls.borrow(), vec!["chown root", "chgrp wheel"]);
    }

    #[cfg(unix)]
    #[test]
    fn system_chmod_sets_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("view.blade.php");
        std::fs::write(&path, "").unwrap();

        SystemPermissions.chmod(&path, 0o600).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn system_chmod_missing_file_fails() {
        let err = SystemPermissions
            .chmod(Path::new("/nonexistent/custom-view/x"), 0o644)
            .unwrap_err();
        assert!(matches!(err, PermissionError::Failed { op: "chmod", .. }));
    }

    #[test]
    fn ownership_command_ends_options_before_user_values() {
        let cmd = SystemPermissions::command("chown", "-R", Path::new("views/x.blade.php"));
        let args: Vec<&str> = cmd.get_args().filter_map(|a| a.to_str()).collect();
        assert_eq!(cmd.get_program().to_str(), Some("chown"));
        assert_eq!(args, ["--", "-R", "views/x.blade.php"]);
    }
}
