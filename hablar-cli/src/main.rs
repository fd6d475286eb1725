use clap::Parser;
use hablar_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
