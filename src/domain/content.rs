//! Boilerplate generation for Blade views
//!
//! Output is assembled in a fixed order:
//!
//! 1. preset marker comment (only when a preset was used)
//! 2. `@extends('layout')`
//! 3. one `@section('name')` / `@endsection` block per section
//! 4. one `<x-name />` include per component
//! 5. the block for the view type
//!
//! Identical inputs always produce byte-identical output.

use serde::{Deserialize, Serialize};

use super::error::{NameKind, ViewError};
use super::name::{validate, ViewName};
use super::options::GenerationOptions;
use super::preset::{self, PresetTable};
use super::view_type::ViewType;

/// How `resource` views are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStyle {
    /// Default `content` section when no section was requested
    #[default]
    Section,
    /// Same as `Section`, preceded by markup for the CRUD action named by
    /// the last segment (`index`, `show`, `create`, `edit`)
    Actions,
}

/// CRUD actions generated for resource views
pub const RESOURCE_ACTIONS: [&str; 4] = ["index", "show", "create", "edit"];

/// Builds view content from options and the configured presets
#[derive(Debug, Clone, Copy)]
pub struct ContentGenerator<'a> {
    presets: &'a PresetTable,
    resource_style: ResourceStyle,
}

impl<'a> ContentGenerator<'a> {
    pub fn new(presets: &'a PresetTable, resource_style: ResourceStyle) -> Self {
        Self {
            presets,
            resource_style,
        }
    }

    /// Generates the content for a view
    pub fn generate(
        &self,
        name: &ViewName,
        view_type: ViewType,
        opts: &GenerationOptions,
    ) -> Result<String, ViewError> {
        if let Some(preset_name) = &opts.preset {
            let (preset_type, preset_opts) = preset::resolve(preset_name, self.presets)?;
            let mut content = format!("<!-- Using preset: '{}' -->\n", preset_name);
            content.push_str(&self.render(name, preset_type, &preset_opts)?);
            return Ok(content);
        }

        self.render(name, view_type, opts)
    }

    fn render(
        &self,
        name: &ViewName,
        view_type: ViewType,
        opts: &GenerationOptions,
    ) -> Result<String, ViewError> {
        let mut content = String::new();

        if let Some(layout) = &opts.extend {
            validate(layout, NameKind::Layout)?;
            content.push_str(&format!("@extends('{}')\n\n", layout));
        }

        let sections = opts.section_names();
        for section in sections {
            validate(section, NameKind::Section)?;
            content.push_str(&section_block(section));
            content.push('\n');
        }

        for component in opts.component_names() {
            validate(component, NameKind::Component)?;
            content.push_str(&format!("<x-{} />\n", component));
        }

        match view_type {
            ViewType::Simple => {
                content.push_str(&format!("<div>\n    <!-- {} -->\n</div>", name.title()));
            }
            ViewType::Blank => {}
            ViewType::Resource => {
                if self.resource_style == ResourceStyle::Actions {
                    content.push_str(&action_block(name));
                }
                if sections.is_empty() {
                    content.push_str(&section_block("content"));
                }
            }
        }

        Ok(content)
    }
}

fn section_block(name: &str) -> String {
    format!("@section('{}')\n\n@endsection\n", name)
}

fn action_block(name: &ViewName) -> String {
    let action = name.last_segment().to_lowercase();
    let title = name.title();
    let mut block = format!("<!-- Resource View ({}) for: {} -->\n", action, name);

    match action.as_str() {
        "index" => block.push_str(&format!("<h1>{} List</h1>\n", title)),
        "create" => block.push_str(&format!(
            "<h1>Create {}</h1>\n<form><!-- form fields here --></form>\n",
            title
        )),
        "edit" => block.push_str(&format!(
            "<h1>Edit {}</h1>\n<form><!-- form fields here --></form>\n",
            title
        )),
        "show" => block.push_str("<h1>Show Details</h1>\n<div><!-- details here --></div>\n"),
        _ => {}
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preset::builtin_presets;

    fn name(s: &str) -> ViewName {
        s.parse().unwrap()
    }

    fn generate(view: &str, view_type: ViewType, opts: &GenerationOptions) -> Result<String, ViewError> {
        let presets = builtin_presets();
        ContentGenerator::new(&presets, ResourceStyle::Section).generate(&name(view), view_type, opts)
    }

    #[test]
    fn simple_view_has_title_and_nothing_else() {
        let content = generate("blog.index", ViewType::Simple, &GenerationOptions::new()).unwrap();
        assert_eq!(content, "<div>\n    <!-- Blog Index -->\n</div>");
        assert!(!content.contains("@section"));
        assert!(!content.contains("<x-"));
    }

    #[test]
    fn blank_view_is_empty() {
        let content = generate("x", ViewType::Blank, &GenerationOptions::new()).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn directives_are_emitted_in_order() {
        let opts = GenerationOptions::new()
            .extend("layouts.app")
            .sections(["content", "scripts"])
            .components(["navbar", "footer"]);

        let content = generate("blog.show", ViewType::Blank, &opts).unwrap();
        let expected = "@extends('layouts.app')\n\n\
@section('content')\n\n@endsection\n\n\
@section('scripts')\n\n@endsection\n\n\
<x-navbar />\n\
<x-footer />\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn duplicate_sections_are_preserved() {
        let opts = GenerationOptions::new().sections(["content", "content"]);
        let content = generate("x", ViewType::Blank, &opts).unwrap();
        assert_eq!(content.matches("@section('content')").count(), 2);
    }

    #[test]
    fn resource_without_sections_gets_default_content() {
        let opts = GenerationOptions::new().sections(Vec::<String>::new());
        let content = generate("x", ViewType::Resource, &opts).unwrap();
        assert_eq!(content, "@section('content')\n\n@endsection\n");
    }

    #[test]
    fn resource_with_sections_skips_default_content() {
        let opts = GenerationOptions::new().sections(["custom"]);
        let content = generate("x", ViewType::Resource, &opts).unwrap();
        assert_eq!(content.matches("@section(").count(), 1);
        assert!(content.contains("@section('custom')"));
        assert!(!content.contains("@section('content')"));
    }

    #[test]
    fn invalid_section_name_fails() {
        let opts = GenerationOptions::new().sections(["ok", "bad name"]);
        let err = generate("x", ViewType::Simple, &opts).unwrap_err();
        assert_eq!(
            err,
            ViewError::InvalidName {
                kind: NameKind::Section,
                name: "bad name".to_string()
            }
        );
    }

    #[test]
    fn invalid_component_name_fails() {
        let opts = GenerationOptions::new().components(["nav.bar"]);
        let err = generate("x", ViewType::Simple, &opts).unwrap_err();
        assert!(matches!(err, ViewError::InvalidName { kind: NameKind::Component, .. }));
    }

    #[test]
    fn invalid_layout_name_fails() {
        let opts = GenerationOptions::new().extend("layouts.app'); @php");
        let err = generate("x", ViewType::Simple, &opts).unwrap_err();
        assert!(matches!(err, ViewError::InvalidName { kind: NameKind::Layout, .. }));
    }

    #[test]
    fn preset_overrides_explicit_options() {
        let opts = GenerationOptions::new()
            .extend("layouts.app")
            .sections(["ignored"])
            .components(["ignored"])
            .preset("admin");

        let content = generate("admin.users", ViewType::Simple, &opts).unwrap();
        let expected = "<!-- Using preset: 'admin' -->\n\
@extends('layouts.admin')\n\n\
@section('content')\n\n@endsection\n\n\
@section('sidebar')\n\n@endsection\n\n\
@section('scripts')\n\n@endsection\n\n\
<x-admin-nav />\n\
<x-admin-footer />\n";
        assert_eq!(content, expected);
        assert!(!content.contains("ignored"));
    }

    #[test]
    fn unknown_preset_fails() {
        let opts = GenerationOptions::new().preset("nonexistent");
        let err = generate("x", ViewType::Simple, &opts).unwrap_err();
        assert_eq!(err, ViewError::PresetNotFound("nonexistent".to_string()));
    }

    #[test]
    fn generation_is_deterministic() {
        let opts = GenerationOptions::new().extend("layouts.app").sections(["a", "b"]);
        let first = generate("blog.index", ViewType::Resource, &opts).unwrap();
        let second = generate("blog.index", ViewType::Resource, &opts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn action_style_adds_crud_markup() {
        let presets = PresetTable::new();
        let generator = ContentGenerator::new(&presets, ResourceStyle::Actions);
        let opts = GenerationOptions::new();

        let index = generator.generate(&name("admin.tax.index"), ViewType::Resource, &opts).unwrap();
        assert_eq!(
            index,
            "<!-- Resource View (index) for: admin.tax.index -->\n\
<h1>Admin Tax Index List</h1>\n\
@section('content')\n\n@endsection\n"
        );

        let edit = generator.generate(&name("admin.tax.edit"), ViewType::Resource, &opts).unwrap();
        assert!(edit.contains("<h1>Edit Admin Tax Edit</h1>\n<form><!-- form fields here --></form>\n"));

        let show = generator.generate(&name("admin.tax.show"), ViewType::Resource, &opts).unwrap();
        assert!(show.contains("<h1>Show Details</h1>"));

        let other = generator.generate(&name("admin.tax.archive"), ViewType::Resource, &opts).unwrap();
        assert_eq!(
            other,
            "<!-- Resource View (archive) for: admin.tax.archive -->\n@section('content')\n\n@endsection\n"
        );
    }

    #[test]
    fn action_style_does_not_touch_simple_views() {
        let presets = PresetTable::new();
        let generator = ContentGenerator::new(&presets, ResourceStyle::Actions);
        let content = generator
            .generate(&name("blog.index"), ViewType::Simple, &GenerationOptions::new())
            .unwrap();
        assert!(!content.contains("Resource View"));
    }
}
