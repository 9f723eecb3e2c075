//! View types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ViewError;

/// Controls which boilerplate block closes the generated view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ViewType {
    /// Wrapper `<div>` with a title comment
    #[default]
    Simple,
    /// No type-specific boilerplate
    Blank,
    /// CRUD view with a default `content` section
    Resource,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Simple => "simple",
            ViewType::Blank => "blank",
            ViewType::Resource => "resource",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ViewType::Simple),
            "blank" => Ok(ViewType::Blank),
            "resource" => Ok(ViewType::Resource),
            _ => Err(ViewError::InvalidViewType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ViewType {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ViewType> for String {
    fn from(view_type: ViewType) -> Self {
        view_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_types() {
        assert_eq!("simple".parse::<ViewType>().unwrap(), ViewType::Simple);
        assert_eq!("Blank".parse::<ViewType>().unwrap(), ViewType::Blank);
        assert_eq!(" resource ".parse::<ViewType>().unwrap(), ViewType::Resource);
    }

    #[test]
    fn parse_unknown_type_fails() {
        let err = "partial".parse::<ViewType>().unwrap_err();
        assert_eq!(err, ViewError::InvalidViewType("partial".to_string()));
    }

    #[test]
    fn serde_uses_lowercase_strings() {
        let json = serde_json::to_string(&ViewType::Resource).unwrap();
        assert_eq!(json, "\"resource\"");

        let parsed: Result<ViewType, _> = serde_json::from_str("\"nope\"");
        assert!(parsed.is_err());
    }
}
