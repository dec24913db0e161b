use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use img2latex_core::config::ServiceConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default ServiceConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = ServiceConfig::default().to_toml_string()?;

    if let Some(ref path) = args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
