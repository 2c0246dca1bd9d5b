use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use imagegen::cli::Cli;
use imagegen::client::OpenAiImageClient;
use imagegen::logging;
use imagegen::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let log_path =
        logging::init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(log = %log_path.display(), "starting imagegen");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let generator = Arc::new(OpenAiImageClient::new(config.api.clone())?);

    ui::runtime::run(&config, generator, runtime.handle().clone())?;
    Ok(())
}
