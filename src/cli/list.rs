//! List command implementation.
//!
//! Prints stored avatar ids, one per line on stdout.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};

/// List stored avatars
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show type and creation time for each avatar
    #[arg(long, short)]
    pub long: bool,
}

pub fn run(args: ListArgs, config: &Config, printer: &Printer) -> Result<()> {
    let service = super::open_service(config);
    let ids = service.list()?;

    for id in &ids {
        if args.long {
            let metadata = service.metadata(id)?;
            println!(
                "{}  {:<8}  {}",
                id,
                metadata.kind,
                metadata.created_at.to_rfc3339()
            );
        } else {
            println!("{}", id);
        }
    }

    printer.info("Found", &plural(ids.len(), "avatar", "avatars"));
    Ok(())
}
