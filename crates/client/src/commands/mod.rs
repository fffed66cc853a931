//! Subcommands of the `gridmdp` binary.

mod check;
mod plan;

pub use check::Check;
pub use plan::Plan;

use std::path::Path;

use anyhow::{Context, Result};
use planner_content::{Layout, LayoutLoader};

/// Loads `source` as a file when it exists, otherwise as a built-in layout name.
fn resolve_layout(source: &str) -> Result<Layout> {
    let path = Path::new(source);
    if path.exists() {
        return LayoutLoader::load(path);
    }
    LayoutLoader::builtin(source).with_context(|| {
        format!(
            "'{}' is neither a layout file nor a built-in layout ({})",
            source,
            LayoutLoader::BUILTIN.join(", ")
        )
    })
}
