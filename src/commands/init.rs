use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".salescope.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Salescope Configuration

[search]
# Fields the free-text term matches: description, sku, customer
term_fields = ["description", "sku"]

[output]
# terminal, markdown, or json
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .salescope.toml configuration file");

    Ok(())
}
