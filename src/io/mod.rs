pub mod loader;
pub mod output;

pub use loader::{load_records, parse_records};
pub use output::{create_file_writer, create_writer, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
