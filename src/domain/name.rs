//! Logical view names and their mapping to files
//!
//! A view name is a dotted identifier such as `blog.index`. Each `.` marks a
//! directory boundary, so `blog.index` resolves to `<root>/blog/index.blade.php`.
//! A literal `/` is accepted as a separator too.
//!
//! Allowed characters:
//! - view and layout names: `[A-Za-z0-9_./-]`
//! - section and component names: `[A-Za-z0-9_-]`

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{NameKind, ViewError};

/// Extension used when the configuration does not name one
pub const DEFAULT_EXTENSION: &str = ".blade.php";

/// Character set a name is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// `[A-Za-z0-9_-]`
    Identifier,
    /// `[A-Za-z0-9_./-]`
    ViewPath,
}

impl Charset {
    fn allows(self, c: char) -> bool {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            return true;
        }
        self == Charset::ViewPath && (c == '.' || c == '/')
    }

    /// Charset that applies to a given kind of name
    pub fn for_kind(kind: NameKind) -> Self {
        match kind {
            NameKind::View | NameKind::Layout => Charset::ViewPath,
            NameKind::Section | NameKind::Component => Charset::Identifier,
        }
    }
}

/// Checks a name against its charset. The empty string never passes.
pub fn validate(name: &str, kind: NameKind) -> Result<(), ViewError> {
    let charset = Charset::for_kind(kind);
    if name.is_empty() || !name.chars().all(|c| charset.allows(c)) {
        return Err(ViewError::invalid_name(kind, name));
    }
    Ok(())
}

/// Splits a view name into its non-empty segments
fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(['.', '/']).filter(|s| !s.is_empty())
}

/// A validated logical view name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ViewName(String);

impl ViewName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name segments, in order
    pub fn segments(&self) -> Vec<&str> {
        segments(&self.0).collect()
    }

    /// Final segment, e.g. `index` for `blog.index`
    pub fn last_segment(&self) -> &str {
        segments(&self.0).last().unwrap_or(self.0.as_str())
    }

    /// Appends a segment, e.g. `admin.tax` + `index` -> `admin.tax.index`
    pub fn child(&self, segment: &str) -> Result<Self, ViewError> {
        format!("{}.{}", self.0, segment).parse()
    }

    /// Human-readable title: `blog.user_posts` -> `Blog User Posts`
    pub fn title(&self) -> String {
        self.0
            .split(['.', '/', '_', '-'])
            .filter(|w| !w.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Relative file path for this name with the given extension
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let parts = self.segments();
        let mut path = PathBuf::new();
        if let Some((last, dirs)) = parts.split_last() {
            for dir in dirs {
                path.push(dir);
            }
            path.push(format!("{}{}", last, extension));
        }
        path
    }

    /// Absolute (root-prefixed) file path for this name
    pub fn resolve(&self, root: &Path, extension: &str) -> PathBuf {
        root.join(self.relative_path(extension))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ViewName {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s, NameKind::View)?;
        if segments(s).next().is_none() {
            return Err(ViewError::EmptyName {
                kind: NameKind::View,
                name: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ViewName {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewName> for String {
    fn from(name: ViewName) -> Self {
        name.0
    }
}
