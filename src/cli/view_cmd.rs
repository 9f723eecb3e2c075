//! View CLI commands: make, delete, move, presets

use anyhow::{bail, Result};
use clap::Args;

use super::output::Output;
use super::prompt;
use crate::domain::{resolve_preset, GenerationOptions, PermissionSpec, ViewType};
use crate::generator::{CreateRequest, Created, GenError, ViewGenerator};
use crate::storage::Config;

#[derive(Args, Debug)]
pub struct MakeArgs {
    /// View name, e.g. "blog.index"
    pub name: String,

    /// View type: simple, blank or resource (default from config)
    #[arg(long = "type", short = 't')]
    pub view_type: Option<String>,

    /// Layout to extend, e.g. layouts.app
    #[arg(long, short = 'E')]
    pub extend: Option<String>,

    /// Section to include (repeatable)
    #[arg(long = "section", short = 'S')]
    pub sections: Vec<String>,

    /// Component to include (repeatable)
    #[arg(long = "component", short = 'C')]
    pub components: Vec<String>,

    /// Preset from the configuration; replaces type, layout, sections and components
    #[arg(long = "template", short = 'T')]
    pub preset: Option<String>,

    /// Fill missing sections and components from the configured defaults
    #[arg(long, short = 'D')]
    pub defaults: bool,

    /// For resource views, create only the named view instead of index/show/create/edit
    #[arg(long)]
    pub single: bool,

    /// Print the generated content without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Apply file permissions after writing
    #[arg(long, short = 'P')]
    pub permission: bool,

    /// Octal mode, e.g. 644 (implies --permission)
    #[arg(long)]
    pub chmod: Option<String>,

    /// File owner, e.g. www-data (implies --permission)
    #[arg(long)]
    pub owner: Option<String>,

    /// File group, e.g. www-data (implies --permission)
    #[arg(long)]
    pub group: Option<String>,

    /// Overwrite existing views without asking
    #[arg(long)]
    pub force: bool,
}

impl MakeArgs {
    fn options(&self, config: &Config) -> GenerationOptions {
        let opts = GenerationOptions {
            extend: self.extend.clone(),
            sections: (!self.sections.is_empty()).then(|| self.sections.clone()),
            components: (!self.components.is_empty()).then(|| self.components.clone()),
            preset: self.preset.clone(),
        };

        if self.defaults {
            opts.with_defaults(
                &config.settings.default_sections,
                &config.settings.default_components,
            )
        } else {
            opts
        }
    }

    fn permissions(&self, config: &Config) -> Option<PermissionSpec> {
        let requested =
            self.permission || self.chmod.is_some() || self.owner.is_some() || self.group.is_some();

        requested.then(|| {
            PermissionSpec::resolve(
                self.chmod.as_deref(),
                self.owner.as_deref(),
                self.group.as_deref(),
                &config.settings.default_permissions,
            )
        })
    }
}

pub fn make(args: &MakeArgs, generator: &ViewGenerator, config: &Config, output: &Output) -> Result<()> {
    let opts = args.options(config);

    let requested_type = match &args.view_type {
        Some(t) => t.parse::<ViewType>()?,
        None => config.settings.default_type,
    };

    // A preset decides the type, and with it whether a resource batch is made
    let effective_type = match &opts.preset {
        Some(preset) => resolve_preset(preset, &config.settings.presets)?.0,
        None => requested_type,
    };
    let batch = effective_type == ViewType::Resource && !args.single;

    output.verbose_ctx(
        "make",
        &format!(
            "name={}, type={}, batch={}, options={:?}",
            args.name, effective_type, batch, opts
        ),
    );

    if args.dry_run {
        return preview(args, generator, effective_type, &opts, batch, output);
    }

    let request = CreateRequest {
        force: args.force,
        permissions: args.permissions(config),
    };

    if !batch {
        let result = generator.create_view(&args.name, requested_type, &opts, &request);
        let report = settle(generator, &args.name, requested_type, &opts, &request, result, output)?;
        if output.is_json() {
            output.data(&report);
        }
        return Ok(());
    }

    let results = generator.create_resource(&args.name, &opts, &request)?;
    let total = results.len();
    let mut reports = Vec::with_capacity(total);
    let mut failed = 0;

    for (name, result) in results {
        match settle(generator, name.as_str(), ViewType::Resource, &opts, &request, result, output) {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                output.error(&format!("{:#}", e));
                reports.push(serde_json::json!({
                    "name": name.as_str(),
                    "error": format!("{:#}", e),
                }));
            }
        }
    }

    if output.is_json() {
        output.data(&reports);
    }

    if failed > 0 {
        bail!("{} of {} views could not be created", failed, total);
    }

    Ok(())
}

/// Turns one create result into a report, asking before overwriting
fn settle(
    generator: &ViewGenerator,
    name: &str,
    view_type: ViewType,
    opts: &GenerationOptions,
    request: &CreateRequest,
    result: Result<Created, GenError>,
    output: &Output,
) -> Result<serde_json::Value> {
    let created = match result {
        Err(GenError::AlreadyExists { name: existing, path }) => {
            let question = format!("The view '{}' already exists. Overwrite?", existing);
            if !prompt::confirm(&question)? {
                output.success(&format!("Skipping '{}'.", existing));
                return Ok(serde_json::json!({
                    "name": existing,
                    "path": path.display().to_string(),
                    "skipped": true,
                }));
            }

            output.verbose_ctx("make", &format!("Overwriting {}", path.display()));
            let forced = CreateRequest {
                force: true,
                ..request.clone()
            };
            generator.create_view(name, view_type, opts, &forced)?
        }
        other => other?,
    };

    report_created(&created, request, output);

    Ok(serde_json::json!({
        "name": created.name.as_str(),
        "path": created.path.display().to_string(),
        "overwritten": created.overwritten,
        "warnings": created.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    }))
}

fn report_created(created: &Created, request: &CreateRequest, output: &Output) {
    output.success(&format!(
        "View '{}' created successfully at {}.",
        created.name,
        created.path.display()
    ));

    for warning in &created.warnings {
        output.warning(&warning.to_string());
    }

    if request.permissions.is_some() && created.warnings.is_empty() {
        output.verbose_ctx("make", &format!("Permissions updated for: {}", created.path.display()));
    }
}

fn preview(
    args: &MakeArgs,
    generator: &ViewGenerator,
    view_type: ViewType,
    opts: &GenerationOptions,
    batch: bool,
    output: &Output,
) -> Result<()> {
    let names: Vec<String> = if batch {
        generator
            .resource_names(&args.name)?
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        vec![args.name.clone()]
    };

    let mut rendered = Vec::with_capacity(names.len());
    for name in &names {
        rendered.push(generator.render(name, view_type, opts)?);
    }

    if output.is_json() {
        output.data(&rendered);
        return Ok(());
    }

    for (i, view) in rendered.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("==> {} ({})", view.name, view.path.display());
        println!("{}", view.content);
    }

    Ok(())
}

pub fn delete(name: &str, force: bool, generator: &ViewGenerator, output: &Output) -> Result<()> {
    let (name, path) = generator.find_view(name)?;
    output.verbose_ctx("delete", &format!("Found {}", path.display()));

    if !force {
        if !prompt::is_interactive() {
            bail!(
                "Refusing to delete view '{}' without confirmation (use --force)",
                name
            );
        }
        if !prompt::confirm(&format!("Delete view '{}' permanently?", name))? {
            output.success("Deletion canceled.");
            return Ok(());
        }
    }

    let path = generator.delete_view(name.as_str())?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": name.as_str(),
            "path": path.display().to_string(),
            "deleted": true,
        }));
    } else {
        output.success(&format!("View '{}' deleted.", name));
    }

    Ok(())
}

pub fn move_view(
    from: Option<&str>,
    to: Option<&str>,
    force: bool,
    generator: &ViewGenerator,
    output: &Output,
) -> Result<()> {
    let moved = generator.move_view(from, to, force)?;

    if output.is_json() {
        output.data(&moved);
    } else {
        output.success(&format!("Moved view from '{}' to '{}'.", moved.from, moved.to));
    }

    Ok(())
}

pub fn presets(config: &Config, output: &Output) -> Result<()> {
    let presets = &config.settings.presets;

    if output.is_json() {
        output.data(presets);
    } else if presets.is_empty() {
        println!("No presets configured.");
    } else {
        println!("{:<12} {:<10} {:<18} SECTIONS / COMPONENTS", "NAME", "TYPE", "EXTENDS");
        println!("{}", "-".repeat(70));
        for (name, preset) in presets {
            println!(
                "{:<12} {:<10} {:<18} {} / {}",
                name,
                preset.view_type,
                preset.extend.as_deref().unwrap_or("-"),
                preset.sections.join(","),
                preset.components.join(","),
            );
        }
    }

    Ok(())
}
