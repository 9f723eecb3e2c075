//! Errors raised by the pure generation core

use std::fmt;

use thiserror::Error;

/// What a validated name is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    View,
    Layout,
    Section,
    Component,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NameKind::View => "View",
            NameKind::Layout => "Layout",
            NameKind::Section => "Section",
            NameKind::Component => "Component",
        };
        write!(f, "{}", s)
    }
}

/// Validation failures. None of these are raised after a file-system call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("{kind} name contains invalid characters: '{name}'")]
    InvalidName { kind: NameKind, name: String },

    #[error("{kind} name has no segments: '{name}'")]
    EmptyName { kind: NameKind, name: String },

    #[error("Invalid view type [{0}]. Expected one of: simple, blank, resource")]
    InvalidViewType(String),

    #[error("Preset [{0}] not found")]
    PresetNotFound(String),
}

impl ViewError {
    pub(crate) fn invalid_name(kind: NameKind, name: &str) -> Self {
        ViewError::InvalidName {
            kind,
            name: name.to_string(),
        }
    }
}
