use clap::Parser;
use pipeline_images::ImageSet;
use pipeline_images::cli::Cli;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();
    info!("Starting pipeline-images {}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let images = cli.images()?;

    if let Err(e) = images.validate() {
        error!("Refusing to start with incomplete image configuration: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    for (name, reference) in images.iter() {
        info!("Using {} {}", name, reference);
    }
    info!("All {} images are configured", ImageSet::IDENTIFIERS.len());

    Ok(ExitCode::SUCCESS)
}
