use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = pixelveil_core::Result<T>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Conceal(cmd) => cmd.run(),
        Commands::Reveal(cmd) => cmd.run(),
        Commands::Interactive(cmd) => cmd.run(),
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
