//! # OLX Terrenos
//!
//! A land-lot listing scraper for OLX Brazil: walks the paginated search
//! results of one region, fetches every advertised listing, keeps only the
//! `"Terreno"` (land lot) records, appends them to a flat CSV file, and
//! prints aggregate statistics at the end of the run.
//!
//! ## Usage
//!
//! ```sh
//! olx_terrenos                  # one page of the Florianópolis search
//! olx_terrenos -p 5 -o lots.csv # five pages, custom output file
//! ```
//!
//! ## Architecture
//!
//! The application is a single forward pass:
//! 1. **Indexing**: collect detail-page URLs from the search results
//! 2. **Fetching**: download each listing sequentially and extract its fields
//! 3. **Writing**: append accepted records to the output file as they arrive
//! 4. **Reporting**: print region counts and size/price statistics
//!
//! Requests are strictly sequential, one page at a time, with no retries.
//! The output file is append-only across runs and is never deduplicated.

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod extract;
mod models;
mod outputs;
mod scrapers;

use cli::Cli;
use models::RunTotals;
use outputs::csv::ListingWriter;
use outputs::report;
use scrapers::olx;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("olx_terrenos starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // One session for the whole run; every request carries the same agent.
    let client = Client::builder().user_agent(olx::USER_AGENT).build()?;

    // Early check: the output file must be writable before any fetching.
    let mut writer = ListingWriter::open(&args.output)?;

    // ---- Index the search results ----
    let links = olx::index_listings(&client, &args).await?;
    info!(count = links.len(), pages = args.pages, "Collected listing links");
    println!("{}", links.len());

    // ---- Fetch, filter, extract, write ----
    let mut totals = RunTotals::default();
    let mut accepted = 0usize;
    let mut skipped = 0usize;

    for link in &links {
        match olx::scrape_listing(&client, link).await? {
            Some(record) => {
                totals.observe(&record)?;
                writer.append(&record)?;
                accepted += 1;
            }
            None => skipped += 1,
        }
    }

    // The session is done before any reporting happens.
    drop(client);
    info!(accepted, skipped, "Finished scraping listings");

    // ---- Summary blocks ----
    print!("{}", report::regions_report(&totals.regions));
    if let Some(block) = report::area_report(&totals.areas) {
        print!("{block}");
    }
    if let Some(block) = report::price_report(&totals.prices) {
        print!("{block}");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        accepted,
        skipped,
        "Execution complete"
    );

    Ok(())
}
