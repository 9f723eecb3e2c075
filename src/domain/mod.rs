//! Domain models for custom-view
//!
//! Pure name handling and content generation, without any I/O concerns.

mod content;
mod error;
mod name;
mod options;
mod preset;
mod view_type;

pub use content::{ContentGenerator, ResourceStyle, RESOURCE_ACTIONS};
pub use error::{NameKind, ViewError};
pub use name::{validate, Charset, ViewName, DEFAULT_EXTENSION};
pub use options::{GenerationOptions, PermissionDefaults, PermissionSpec};
pub use preset::{builtin_presets, resolve as resolve_preset, Preset, PresetTable};
pub use view_type::ViewType;
