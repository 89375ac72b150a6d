//! Delete command implementation.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};

/// Delete stored avatars
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Avatar ids
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub fn run(args: DeleteArgs, config: &Config, printer: &Printer) -> Result<()> {
    let service = super::open_service(config);

    for id in &args.ids {
        service.remove(id)?;
        printer.status("Deleted", id);
    }

    printer.success("Finished", &plural(args.ids.len(), "avatar removed", "avatars removed"));
    Ok(())
}
