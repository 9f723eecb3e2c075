//! custom-view - scaffolding for Blade template views
//!
//! Maps dotted view names such as `blog.index` to files under a view root
//! and fills them with layout, section and component boilerplate, either
//! from flags or from named presets. Views can also be deleted and moved.

pub mod cli;
pub mod domain;
pub mod generator;
pub mod storage;

pub use domain::{ContentGenerator, GenerationOptions, ViewError, ViewName, ViewType};
pub use generator::{CreateRequest, GenError, ViewGenerator};
