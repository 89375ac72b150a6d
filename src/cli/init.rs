//! Init command implementation.
//!
//! Writes a `pxavatar.yaml` with every setting present and commented.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::CONFIG_FILENAME;
use crate::error::{AvatarError, Result};
use crate::output::{display_path, Printer};

const DEFAULT_CONFIG: &str = "\
# pxavatar configuration. Every setting is optional.

# Directory holding stored avatars.
storage: avatars

# Defaults applied when a request leaves a field unset.
# default_type: pixelize
# default_primary: \"#3b82f6\"
# default_foreign: \"#ffffff\"
# default_scheme: ocean
# default_angle: 90

# Render the six sizes in parallel.
parallel: true

# Abandon renders that take longer than this many milliseconds.
# timeout_ms: 2000
";

/// Write a default pxavatar.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing pxavatar.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(AvatarError::Validation {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| AvatarError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}
