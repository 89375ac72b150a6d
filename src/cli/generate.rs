//! Generate command implementation.
//!
//! Renders an avatar at all six sizes and either stores it or writes the PNGs
//! to a directory. The avatar id is printed to stdout.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::engine::{self, GeneratedAvatar};
use crate::error::{AvatarError, Result};
use crate::output::{display_path, Printer};
use crate::render::{CancelToken, RenderOptions};
use crate::storage::METADATA_FILENAME;
use crate::types::GenerationParams;

/// Generate an avatar at all six sizes
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Generator type: pixelize, wave, or gradient
    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,

    /// Primary colour (#rrggbb or a named colour)
    #[arg(long)]
    pub primary: Option<String>,

    /// Foreign colour (#rrggbb or a named colour)
    #[arg(long)]
    pub foreign: Option<String>,

    /// Colour scheme; overrides --primary and --foreign
    #[arg(long)]
    pub scheme: Option<String>,

    /// Seed for reproducible patterns (at most 32 UTF-16 code units)
    #[arg(long)]
    pub seed: Option<String>,

    /// Gradient angle in degrees (0-360)
    #[arg(long)]
    pub angle: Option<f64>,

    /// Write PNGs to this directory instead of the avatar store
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Render sizes one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

impl GenerateArgs {
    fn params(&self) -> GenerationParams {
        GenerationParams {
            primary_color: self.primary.clone(),
            foreign_color: self.foreign.clone(),
            color_scheme: self.scheme.clone(),
            seed: self.seed.clone(),
            kind: self.kind.clone(),
            angle: self.angle,
        }
    }
}

pub fn run(args: GenerateArgs, config: &Config, printer: &Printer) -> Result<()> {
    let params = config.apply_defaults(args.params());
    let parallel = config.parallel && !args.sequential;

    let avatar = match &args.out {
        Some(dir) => {
            let options = RenderOptions {
                parallel,
                cancel: config.timeout().map(CancelToken::with_timeout).unwrap_or_default(),
            };
            let avatar = engine::generate(&params, &options)?;
            write_images(dir, &avatar)?;
            printer.status("Wrote", &format!("6 sizes to {}", display_path(dir)));
            avatar
        }
        None => {
            let service = super::open_service(config).with_parallel(parallel);
            let avatar = service.generate(&params)?;
            printer.status("Stored", &display_path(&config.storage.join(avatar.id())));
            avatar
        }
    };

    printer.success(
        "Generated",
        &format!("{} avatar {}", avatar.metadata.kind, printer.dim(avatar.id())),
    );
    println!("{}", avatar.id());

    Ok(())
}

/// Write `<size>.png` for each size plus the metadata JSON into `dir`.
fn write_images(dir: &Path, avatar: &GeneratedAvatar) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| AvatarError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    for (size, bytes) in &avatar.images {
        let path = dir.join(format!("{}.png", size));
        fs::write(&path, bytes).map_err(|e| AvatarError::Io {
            path: path.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;
    }

    let path = dir.join(METADATA_FILENAME);
    let json = serde_json::to_string_pretty(&avatar.metadata).map_err(|e| AvatarError::Parse {
        message: format!("Failed to serialize metadata: {}", e),
        help: None,
    })?;
    fs::write(&path, json).map_err(|e| AvatarError::Io {
        path,
        message: format!("Failed to write metadata: {}", e),
    })?;

    Ok(())
}
