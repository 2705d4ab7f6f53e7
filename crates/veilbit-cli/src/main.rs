use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

fn main() -> veilbit_core::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("invoked with {args:?}");

    match args.command {
        Commands::Hide(cmd) => cmd.run(),
        Commands::Extract(cmd) => cmd.run(),
        Commands::Analyse(cmd) => cmd.run(),
    }
}
