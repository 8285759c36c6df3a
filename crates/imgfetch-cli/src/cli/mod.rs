//! CLI for the imgfetch image downloader.

mod commands;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, ImgfetchConfig};
use std::io;

use commands::run_session;

/// Interactive image fetcher: reads comma-separated URLs from one prompt line
/// and saves each image into the configured folder.
#[derive(Debug, Parser)]
#[command(name = "imgfetch", version)]
#[command(about = "Ubuntu Image Fetcher: mindfully collect images from the web", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let _cli = Cli::parse();

        let cfg = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            ImgfetchConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let summary = run_session(stdin.lock(), &mut stdout.lock(), &cfg)?;
        tracing::info!(
            saved = summary.saved.len(),
            failed = summary.failed,
            "session finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
