use clap::Parser;
use miette::Result;
use odyc::cli::{Cli, Commands};
use odyc::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Some(Commands::Sprites(args)) => odyc::cli::sprites::run(args, &printer)?,
        Some(Commands::Init(args)) => odyc::cli::init::run(args, &printer)?,
        Some(Commands::Completions(args)) => odyc::cli::completions::run(args)?,
        None => {
            printer.banner("ODYC", "Welcome to Odyc.js CLI!");
            printer.info("Info", "Add --help to learn how to use this command");
        }
    }

    Ok(())
}
