use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod draft;
mod generator;
mod i18n;
mod ideas;
mod llm;
mod publisher;
mod wp;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Generate(opts) => {
            let config = opts.into_config();
            generator::launch(&config).await
        }
        cli::Command::Publish(opts) => {
            let config = opts.into_config();
            publisher::launch(&config).await
        }
    }
}
