pub mod completions;
pub mod delete;
pub mod generate;
pub mod init;
pub mod list;
pub mod schemes;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::Result;
use crate::logging::LOG_LEVELS;
use crate::service::AvatarService;
use crate::storage::LocalStorage;

/// pxavatar - Identicon-style avatar generator
#[derive(Parser, Debug)]
#[command(name = "pxavatar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn", value_parser = LOG_LEVELS)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an avatar at all six sizes
    Generate(generate::GenerateArgs),

    /// Export one size of a stored avatar, optionally filtered
    Show(show::ShowArgs),

    /// Delete stored avatars
    Delete(delete::DeleteArgs),

    /// List stored avatars
    List(list::ListArgs),

    /// List colour schemes per generator type
    Schemes(schemes::SchemesArgs),

    /// List named colours
    Colors,

    /// Write a default pxavatar.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Build a service over the configured storage directory.
pub(crate) fn open_service(config: &Config) -> AvatarService<LocalStorage> {
    AvatarService::new(LocalStorage::new(&config.storage))
        .with_parallel(config.parallel)
        .with_timeout(config.timeout())
}

/// Load the config named on the command line, or defaults if it is absent.
pub fn load_config(path: &std::path::Path) -> Result<Config> {
    Config::load_or_default(path)
}
