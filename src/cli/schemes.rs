//! Scheme and colour listings.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::synth::GeneratorKind;
use crate::types::{ColourScheme, NAMED_COLOURS};

/// List colour schemes per generator type
#[derive(Args, Debug)]
pub struct SchemesArgs {
    /// Only show schemes for this generator type
    #[arg(long = "type", short = 't')]
    pub kind: Option<String>,
}

pub fn run(args: SchemesArgs, printer: &Printer) -> Result<()> {
    let kinds = match args.kind.as_deref() {
        Some(name) => vec![GeneratorKind::select(Some(name))?],
        None => GeneratorKind::ALL.to_vec(),
    };

    for kind in kinds {
        let schemes: Vec<&ColourScheme> = ColourScheme::for_kind(kind).collect();
        printer.info(kind.name(), &plural(schemes.len(), "scheme", "schemes"));
        for scheme in schemes {
            println!(
                "{:<12} {} {}",
                scheme.name,
                scheme.primary,
                scheme.foreign
            );
        }
    }

    Ok(())
}

/// Print every named colour with its hex value.
pub fn run_colours(printer: &Printer) -> Result<()> {
    for (name, hex) in NAMED_COLOURS {
        println!("{:<8} {}", name, hex);
    }
    printer.info("Found", &plural(NAMED_COLOURS.len(), "colour", "colours"));
    Ok(())
}
