use anyhow::Result;
use clap::Parser;
use invite_cli::{logging, App, Cli};
use invite_core::InviteConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let config = InviteConfig::load(cli.config.as_deref())?;
    tracing::debug!("Using API at {}", config.api_base_url);

    let app = App::open(config)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    app.run(cli.command, &mut input, &mut output).await
}
