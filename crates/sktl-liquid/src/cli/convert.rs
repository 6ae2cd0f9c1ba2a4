//! Convert command implementation

use super::{input, output};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Configuration for convert command
pub struct ConvertConfig {
    pub file: PathBuf,
    pub output_file: Option<PathBuf>,
}

/// Convert one parsed template and write the Liquid result
pub fn convert(config: ConvertConfig) -> Result<()> {
    let liquid = convert_file(&config.file)?;
    output::write_output(&liquid, config.output_file.as_deref())
}

/// Load and convert a parsed template file
pub fn convert_file(file: &Path) -> Result<String> {
    let template = input::load_template(file)?;

    crate::convert_document(&template)
        .with_context(|| format!("Failed to convert {}", file.display()))
}
