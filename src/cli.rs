//! CLI and top-level run orchestration.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::download::{self, DownloadOutcome};
use crate::extract;
use crate::session::Session;
use crate::site;

/// Download the product images from the Darkins "Experiences" listing.
#[derive(Debug, Parser)]
#[command(name = "darkgrab")]
#[command(about = "Download Darkins experience-listing images", long_about = None)]
pub struct Cli {
    /// Directory the images are written to.
    #[arg(long, default_value = site::DEFAULT_OUT_DIR, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Run Chrome headless (default is a visible window).
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        run(&cli)
    }
}

/// One full scrape: navigate, sort, extract, download, report.
///
/// Per-image failures are reported and skipped past; anything that escapes
/// here (browser launch, navigation, output dir creation) is fatal and ends
/// the run. The browser is closed when the session drops, error or not.
pub fn run(cli: &Cli) -> Result<()> {
    let session = Session::launch(cli.headless)?;

    session.goto(site::HOME_URL)?;
    session.goto(site::LISTING_URL)?;
    session.settle(Duration::from_millis(2000));
    tracing::info!("navigated to the filtered 'Experiences' listing");

    session.wait_for(site::SORT_SELECTOR)?;
    session.select_by_label(site::SORT_SELECTOR, site::SORT_LABEL)?;
    tracing::info!("sorted by: {}", site::SORT_LABEL);
    session.settle(Duration::from_millis(1000));

    let elements = session.image_attrs(site::IMAGE_SELECTOR)?;
    let refs = extract::extract(&elements);
    let results = download::download_all(&refs, &cli.out_dir)?;

    let failed = results
        .iter()
        .filter(|r| matches!(r, DownloadOutcome::Failed { .. }))
        .count();
    if failed > 0 {
        tracing::warn!("{} of {} images were not saved", failed, results.len());
    }
    tracing::info!("image download complete");
    Ok(())
}
