//! Named presets
//!
//! A preset bundles a view type, layout, sections and components under a
//! name. Using a preset replaces every option the caller passed; nothing is
//! merged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ViewError;
use super::options::GenerationOptions;
use super::view_type::ViewType;

/// A statically configured bundle of generation options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub extend: Option<String>,
    pub sections: Vec<String>,
    pub components: Vec<String>,
}

/// Presets keyed by name
pub type PresetTable = BTreeMap<String, Preset>;

/// Looks up a preset and returns its type and options verbatim
pub fn resolve(name: &str, table: &PresetTable) -> Result<(ViewType, GenerationOptions), ViewError> {
    let preset = table
        .get(name)
        .ok_or_else(|| ViewError::PresetNotFound(name.to_string()))?;

    let options = GenerationOptions {
        extend: preset.extend.clone(),
        sections: Some(preset.sections.clone()),
        components: Some(preset.components.clone()),
        preset: None,
    };

    Ok((preset.view_type, options))
}

/// Presets shipped when no configuration defines any
pub fn builtin_presets() -> PresetTable {
    let mut table = PresetTable::new();
    table.insert(
        "admin".to_string(),
        Preset {
            view_type: ViewType::Resource,
            extend: Some("layouts.admin".to_string()),
            sections: vec!["content".into(), "sidebar".into(), "scripts".into()],
            components: vec!["admin-nav".into(), "admin-footer".into()],
        },
    );
    table.insert(
        "blog".to_string(),
        Preset {
            view_type: ViewType::Resource,
            extend: Some("layouts.blog".to_string()),
            sections: vec!["content".into(), "meta".into(), "sidebar".into()],
            components: vec![
                "blog-header".into(),
                "blog-footer".into(),
                "share-buttons".into(),
            ],
        },
    );
    table
}
