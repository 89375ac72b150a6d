//! Show command implementation.
//!
//! Exports one size of a stored avatar, optionally through a filter. Without
//! `--output` the avatar's metadata is printed as JSON.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{AvatarError, Result};
use crate::output::{display_path, Printer};
use crate::render::FilterKind;
use crate::types::Resolution;

/// Export one size of a stored avatar
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Avatar id
    pub id: String,

    /// Size exponent: 4 (16px) to 9 (512px)
    #[arg(long, short, default_value_t = Resolution::MAX_EXPONENT)]
    pub size: u8,

    /// Filter to apply: grayscale, sepia, or negative
    #[arg(long, short)]
    pub filter: Option<String>,

    /// Write the PNG to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ShowArgs, config: &Config, printer: &Printer) -> Result<()> {
    let service = super::open_service(config);

    let Some(output) = args.output else {
        let metadata = service.metadata(&args.id)?;
        let json = serde_json::to_string_pretty(&metadata).map_err(|e| AvatarError::Parse {
            message: format!("Failed to serialize metadata: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    };

    if let Some(name) = args.filter.as_deref() {
        if FilterKind::from_name(name).is_none() {
            printer.warning("Ignoring", &format!("unknown filter '{}'", name));
        }
    }

    let bytes = service.fetch(&args.id, args.size, args.filter.as_deref())?;
    fs::write(&output, &bytes).map_err(|e| AvatarError::Io {
        path: output.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    let resolution = Resolution::from_exponent(args.size)?;
    printer.success(
        "Exported",
        &format!("{} {}", display_path(&output), printer.dim(&format!("({})", resolution))),
    );

    Ok(())
}
