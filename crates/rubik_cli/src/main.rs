//! Command-line scrambler, simulator, and validator for NxNxN Rubik's cubes.

mod cli;
mod config;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
