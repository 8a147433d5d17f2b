use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();
    cli::run(cli)
}
