use clap::Parser;
use miette::Result;
use pxavatar::cli::{self, Cli, Commands};
use pxavatar::logging;
use pxavatar::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => {
            let config = cli::load_config(&cli.config)?;
            cli::generate::run(args, &config, &printer)?
        }
        Commands::Show(args) => {
            let config = cli::load_config(&cli.config)?;
            cli::show::run(args, &config, &printer)?
        }
        Commands::Delete(args) => {
            let config = cli::load_config(&cli.config)?;
            cli::delete::run(args, &config, &printer)?
        }
        Commands::List(args) => {
            let config = cli::load_config(&cli.config)?;
            cli::list::run(args, &config, &printer)?
        }
        Commands::Schemes(args) => cli::schemes::run(args, &printer)?,
        Commands::Colors => cli::schemes::run_colours(&printer)?,
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
