//! Loading parsed documents

use crate::Template;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a parser JSON dump (`{"template": [...]}`) from disk
pub fn load_template(path: &Path) -> Result<Template> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parsed template: {}", path.display()))?;

    let template = Template::from_json(&json)
        .with_context(|| format!("Failed to decode parsed template: {}", path.display()))?;

    log::debug!(
        "loaded {} top-level segment(s) from {}",
        template.segments().len(),
        path.display()
    );
    Ok(template)
}
