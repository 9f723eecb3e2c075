//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Write a sample `custom-view.toml` |
//! | `make` | Generate a view, or the four views of a resource |
//! | `delete` | Delete a view (asks first unless `--force`) |
//! | `move` | Rename a view, creating directories as needed |
//! | `presets` | List configured presets |
//!
//! ## Output Formats
//!
//! All commands support `--format text|json`. `--verbose` prints
//! `[verbose:context]` diagnostics to stderr:
//! ```bash
//! custom-view --verbose make blog.index --extend layouts.app
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod prompt;
mod view_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
