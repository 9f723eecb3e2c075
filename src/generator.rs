//! View generation, deletion and moves
//!
//! [`ViewGenerator`] joins the pure core (names, content, presets) to the
//! file system. Every name and option is validated before the first call
//! into [`ViewFiles`], so a rejected request never touches the disk.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    ContentGenerator, GenerationOptions, PermissionSpec, ViewError, ViewName, ViewType,
    RESOURCE_ACTIONS,
};
use crate::storage::{apply_permissions, Config, PermissionApplier, PermissionError, ViewFiles};

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error("View [{name}] already exists at {}", .path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("View [{name}] does not exist at {}", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl GenError {
    fn io(action: &'static str, path: &std::path::Path, source: io::Error) -> Self {
        GenError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Per-call switches for [`ViewGenerator::create_view`]
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    /// Overwrite an existing file instead of failing
    pub force: bool,

    /// Permissions to apply after writing
    pub permissions: Option<PermissionSpec>,
}

/// Content computed for a view without writing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub name: ViewName,
    pub path: PathBuf,
    pub content: String,
}

/// A view that was written
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub name: ViewName,
    pub path: PathBuf,

    /// True when an existing file was replaced
    pub overwritten: bool,

    /// Permission steps that failed; the file itself was written
    pub warnings: Vec<PermissionError>,
}

/// A view that was moved
#[derive(Debug, Clone, Serialize)]
pub struct Moved {
    pub from: ViewName,
    pub to: ViewName,
    pub from_path: PathBuf,
    pub to_path: PathBuf,
}

/// Creates, deletes and moves views under the configured root
pub struct ViewGenerator<'a> {
    config: &'a Config,
    files: &'a dyn ViewFiles,
    permissions: &'a dyn PermissionApplier,
}

impl<'a> ViewGenerator<'a> {
    pub fn new(
        config: &'a Config,
        files: &'a dyn ViewFiles,
        permissions: &'a dyn PermissionApplier,
    ) -> Self {
        Self {
            config,
            files,
            permissions,
        }
    }

    /// Returns the file path for a view name
    pub fn path_for(&self, name: &ViewName) -> PathBuf {
        name.resolve(&self.config.view_root(), self.config.extension())
    }

    fn content_generator(&self) -> ContentGenerator<'a> {
        let config: &'a Config = self.config;
        ContentGenerator::new(&config.settings.presets, config.settings.resource_style)
    }

    /// Validates and renders a view without touching the file system
    pub fn render(
        &self,
        name: &str,
        view_type: ViewType,
        opts: &GenerationOptions,
    ) -> Result<Rendered, GenError> {
        let name: ViewName = name.parse()?;
        let path = self.path_for(&name);
        let content = self.content_generator().generate(&name, view_type, opts)?;

        Ok(Rendered {
            name,
            path,
            content,
        })
    }

    /// Writes a single view
    pub fn create_view(
        &self,
        name: &str,
        view_type: ViewType,
        opts: &GenerationOptions,
        request: &CreateRequest,
    ) -> Result<Created, GenError> {
        let Rendered {
            name,
            path,
            content,
        } = self.render(name, view_type, opts)?;

        let existed = self.files.exists(&path);
        if existed && !request.force {
            return Err(GenError::AlreadyExists {
                name: name.to_string(),
                path,
            });
        }

        self.files
            .create_parent_dirs(&path)
            .map_err(|e| GenError::io("create directory for", &path, e))?;
        self.files
            .write(&path, &content)
            .map_err(|e| GenError::io("write", &path, e))?;

        let warnings = match &request.permissions {
            Some(spec) => apply_permissions(self.permissions, &path, spec),
            None => Vec::new(),
        };

        Ok(Created {
            name,
            path,
            overwritten: existed,
            warnings,
        })
    }

    /// Writes `{base}.index`, `{base}.show`, `{base}.create` and `{base}.edit`.
    ///
    /// Each file is attempted on its own; one failure does not stop the rest.
    pub fn create_resource(
        &self,
        base: &str,
        opts: &GenerationOptions,
        request: &CreateRequest,
    ) -> Result<Vec<(ViewName, Result<Created, GenError>)>, GenError> {
        let names = self.resource_names(base)?;

        Ok(names
            .into_iter()
            .map(|name| {
                let result = self.create_view(name.as_str(), ViewType::Resource, opts, request);
                (name, result)
            })
            .collect())
    }

    /// Names of the views making up a resource, e.g. `admin.tax.index`
    pub fn resource_names(&self, base: &str) -> Result<Vec<ViewName>, GenError> {
        let base: ViewName = base.parse()?;

        let names = RESOURCE_ACTIONS
            .iter()
            .map(|action| base.child(action))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(names)
    }

    /// Resolves a name to its existing file
    pub fn find_view(&self, name: &str) -> Result<(ViewName, PathBuf), GenError> {
        let name: ViewName = name.parse()?;
        let path = self.path_for(&name);

        if !self.files.exists(&path) {
            return Err(GenError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        Ok((name, path))
    }

    /// Deletes a view; fails with `NotFound` when it is already gone
    pub fn delete_view(&self, name: &str) -> Result<PathBuf, GenError> {
        let (_, path) = self.find_view(name)?;

        self.files
            .delete(&path)
            .map_err(|e| GenError::io("delete", &path, e))?;

        Ok(path)
    }

    /// Moves a view to a new name, creating the target's directories
    pub fn move_view(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        force: bool,
    ) -> Result<Moved, GenError> {
        let from = from.ok_or(GenError::MissingArgument("--from"))?;
        let to = to.ok_or(GenError::MissingArgument("--to"))?;

        let from: ViewName = from.parse()?;
        let to: ViewName = to.parse()?;
        let from_path = self.path_for(&from);
        let to_path = self.path_for(&to);

        if !self.files.exists(&from_path) {
            return Err(GenError::NotFound {
                name: from.to_string(),
                path: from_path,
            });
        }

        if !force && self.files.exists(&to_path) {
            return Err(GenError::AlreadyExists {
                name: to.to_string(),
                path: to_path,
            });
        }

        self.files
            .create_parent_dirs(&to_path)
            .map_err(|e| GenError::io("create directory for", &to_path, e))?;
        self.files
            .rename(&from_path, &to_path)
            .map_err(|e| GenError::io("move", &from_path, e))?;

        Ok(Moved {
            from,
            to,
            from_path,
            to_path,
        })
    }
}
