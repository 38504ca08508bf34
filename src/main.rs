use anyhow::Result;
use clap::Parser;
use practica::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
