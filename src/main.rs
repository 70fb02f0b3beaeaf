use clap::Parser;

mod cli;
mod runner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runner::run_from_cli(cli::Cli::parse()).await
}
