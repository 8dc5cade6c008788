use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use kiswitch_footprint::{kicad, Footprint};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// KiCad `.kicad_mod` module text
    #[default]
    Kicad,
    /// The footprint tree as JSON
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Kicad => "kicad_mod",
            Format::Json => "json",
        }
    }

    pub fn render(self, fp: &Footprint) -> Result<String> {
        match self {
            Format::Kicad => Ok(kicad::to_kicad_mod(fp)),
            Format::Json => {
                serde_json::to_string_pretty(fp).context("Failed to serialize footprint")
            }
        }
    }
}

/// Write each footprint to `<dir>/<name>.<ext>`, creating `dir` if needed.
pub fn write_footprints(dir: &Path, footprints: &[Footprint], format: Format) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let mut written = Vec::with_capacity(footprints.len());
    for fp in footprints {
        let path = dir.join(format!("{}.{}", fp.name, format.extension()));
        let text = format.render(fp)?;
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote footprint");
        written.push(path);
    }
    Ok(written)
}
