//! Command-line interface definitions for the OLX terrenos scraper.
//!
//! This module defines the CLI arguments using the `clap` crate. Every flag
//! defaults to the constants the scraper was originally written around, so
//! running the binary with no arguments walks one page of the Florianópolis
//! land-lot search and appends to `terrenos.csv`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the OLX terrenos scraper.
///
/// The search URL is assembled from the `prefix`, `site`, `region`,
/// `category`, and `subcategory` segments; `pages` bounds the walk over the
/// paginated results.
///
/// # Examples
///
/// ```sh
/// # Default search: one page of land lots around Florianópolis
/// olx_terrenos
///
/// # Walk five pages of a different region
/// olx_terrenos --prefix rj --region rio-de-janeiro-e-regiao -p 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Subdomain prefix of the regional portal (the state code)
    #[arg(long, default_value = "sc")]
    pub prefix: String,

    /// Host of the classifieds site
    #[arg(long, default_value = "olx.com.br")]
    pub site: String,

    /// Region path segment of the search URL
    #[arg(long, default_value = "florianopolis-e-regiao")]
    pub region: String,

    /// Category path segment of the search URL
    #[arg(long, default_value = "imoveis")]
    pub category: String,

    /// Subcategory path segment of the search URL
    #[arg(long, default_value = "terrenos")]
    pub subcategory: String,

    /// Number of search-result pages to walk
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// CSV file accepted listings are appended to
    #[arg(short, long, default_value = "terrenos.csv")]
    pub output: PathBuf,
}

impl Cli {
    /// Build the search-results URL for one page number.
    pub fn search_url(&self, page: u32) -> String {
        format!(
            "https://{}.{}/{}/{}/{}?o={}",
            self.prefix, self.site, self.region, self.category, self.subcategory, page
        )
    }
}
