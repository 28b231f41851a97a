use clap::Parser;
use codex::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    codex::commands::run(cli).await
}
