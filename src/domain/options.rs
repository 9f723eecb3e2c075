//! Generation options

use serde::{Deserialize, Serialize};

/// Options that shape the boilerplate of a generated view.
///
/// `None` for `sections`/`components` means "not given", which lets
/// [`GenerationOptions::with_defaults`] fill them; `Some(vec![])` is an
/// explicit empty list and is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Layout to extend, e.g. `layouts.app`
    pub extend: Option<String>,

    /// Section names, in output order
    pub sections: Option<Vec<String>>,

    /// Component names, in output order
    pub components: Option<Vec<String>>,

    /// Preset name. When set, the preset replaces every other option.
    pub preset: Option<String>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(mut self, layout: impl Into<String>) -> Self {
        self.extend = Some(layout.into());
        self
    }

    pub fn sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = Some(sections.into_iter().map(Into::into).collect());
        self
    }

    pub fn components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.preset = Some(name.into());
        self
    }

    /// Section names, empty when absent
    pub fn section_names(&self) -> &[String] {
        self.sections.as_deref().unwrap_or(&[])
    }

    /// Component names, empty when absent
    pub fn component_names(&self) -> &[String] {
        self.components.as_deref().unwrap_or(&[])
    }

    /// Fills absent sections and components from the given defaults
    pub fn with_defaults(mut self, sections: &[String], components: &[String]) -> Self {
        if self.sections.is_none() {
            self.sections = Some(sections.to_vec());
        }
        if self.components.is_none() {
            self.components = Some(components.to_vec());
        }
        self
    }
}

/// Permissions to apply to a freshly written view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSpec {
    /// Octal mode string, e.g. `644`
    pub mode: String,
    pub owner: Option<String>,
    pub group: Option<String>,
}

impl PermissionSpec {
    /// Mode used when neither the caller nor the configuration sets one
    pub const FALLBACK_MODE: &'static str = "644";

    /// Merges caller-supplied values over configured defaults
    pub fn resolve(
        mode: Option<&str>,
        owner: Option<&str>,
        group: Option<&str>,
        defaults: &PermissionDefaults,
    ) -> Self {
        Self {
            mode: mode
                .map(str::to_string)
                .or_else(|| defaults.mode.clone())
                .unwrap_or_else(|| Self::FALLBACK_MODE.to_string()),
            owner: owner.map(str::to_string).or_else(|| defaults.owner.clone()),
            group: group.map(str::to_string).or_else(|| defaults.group.clone()),
        }
    }
}

/// Configured permission defaults; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionDefaults {
    #[serde(alias = "chmod")]
    pub mode: Option<String>,
    pub owner: Option<String>,
    pub group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lists_take_defaults() {
        let defaults = vec!["content".to_string()];
        let opts = GenerationOptions::new().with_defaults(&defaults, &defaults);
        assert_eq!(opts.section_names(), ["content"]);
        assert_eq!(opts.component_names(), ["content"]);
    }

    #[test]
    fn explicit_empty_lists_are_kept() {
        let defaults = vec!["content".to_string()];
        let opts = GenerationOptions::new()
            .sections(Vec::<String>::new())
            .with_defaults(&defaults, &defaults);
        assert!(opts.section_names().is_empty());
        assert_eq!(opts.component_names(), ["content"]);
    }

    #[test]
    fn permission_spec_prefers_caller_values() {
        let defaults = PermissionDefaults {
            mode: Some("640".to_string()),
            owner: Some("www-data".to_string()),
            group: None,
        };

        let spec = PermissionSpec::resolve(Some("600"), None, Some("staff"), &defaults);
        assert_eq!(spec.mode, "600");
        assert_eq!(spec.owner.as_deref(), Some("www-data"));
        assert_eq!(spec.group.as_deref(), Some("staff"));
    }

    #[test]
    fn permission_spec_falls_back_to_644() {
        let spec = PermissionSpec::resolve(None, None, None, &PermissionDefaults::default());
        assert_eq!(spec.mode, "644");
        assert!(spec.owner.is_none());
        assert!(spec.group.is_none());
    }
}
