use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: PathBuf) -> Result<()> {
    write_template(&path)?;

    println!("✔ Wrote starter config to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  edit the source paths to point at your firewall logs");
    println!("  netlog config check {}", path.display());
    println!("  netlog run --config {}", path.display());

    Ok(())
}

/// Writes the embedded starter config to `path`, refusing to overwrite.
pub fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, template("netlog.hcl")?)
        .with_context(|| format!("failed to create {}", path.display()))
}

/// Fetch an embedded config template as UTF-8 text
fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}
