//! OLX listing scraper.
//!
//! Scrapes the paginated land-lot search of a regional OLX portal. Follows
//! the usual two-phase pattern:
//!
//! 1. [`index_listings`] walks the configured search-result pages and
//!    collects every item's detail-page URL.
//! 2. [`scrape_listing`] fetches one detail page and extracts a
//!    [`ListingRecord`], or `None` when the page advertises something other
//!    than a land lot.
//!
//! All selectors live in the [`selectors`] table; this module only decides
//! how the matched nodes combine into a record.

use crate::cli::Cli;
use crate::error::ScrapeError;
use crate::extract;
use crate::models::ListingRecord;
use crate::scrapers::selectors;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// User agent sent with every request, index and detail alike.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_5) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.102 Safari/537.36";

/// The listing type accepted by the pipeline; everything else is discarded.
pub const LAND_LOT_KIND: &str = "Terreno";

/// Walk the search-result pages and collect detail-page URLs.
///
/// Issues one GET per page number in `1..=pages` and harvests the anchor of
/// every result item. Stops when the configured page count is exhausted;
/// there is no end-of-results detection.
///
/// # Errors
///
/// Fails on the first unreachable page or on a page without the result-list
/// container. Items without an anchor are skipped, not an error.
#[instrument(level = "info", skip_all, fields(pages = cli.pages))]
pub async fn index_listings(client: &Client, cli: &Cli) -> Result<Vec<String>, ScrapeError> {
    let mut links = Vec::new();

    for page in 1..=cli.pages {
        let page_url = cli.search_url(page);
        let base = Url::parse(&page_url)?;

        let html = client.get(&page_url).send().await?.text().await?;
        let document = Html::parse_document(&html);
        collect_links(&document, &base, &mut links)?;

        info!(page, total = links.len(), "Indexed search-results page");
    }

    Ok(links)
}

/// Pull every item anchor out of one parsed search-results page.
fn collect_links(
    document: &Html,
    base: &Url,
    links: &mut Vec<String>,
) -> Result<(), ScrapeError> {
    let list = document
        .select(&selectors::RESULT_LIST)
        .next()
        .ok_or(ScrapeError::MissingNode {
            field: "lista de anúncios",
            selector: selectors::RESULT_LIST_CSS,
        })?;

    for item in list.select(&selectors::RESULT_ITEM) {
        // Placeholder items carry no anchor; skip them.
        let anchor = match item.select(&selectors::RESULT_ANCHOR).next() {
            Some(anchor) => anchor,
            None => continue,
        };
        if let Some(href) = anchor.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                links.push(resolved.to_string());
            }
        }
    }

    Ok(())
}

/// Fetch one detail page and extract its record.
///
/// Returns `Ok(None)` when the page advertises something other than a land
/// lot; the caller drops such listings before writing anything.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn scrape_listing(
    client: &Client,
    url: &str,
) -> Result<Option<ListingRecord>, ScrapeError> {
    info!(%url, "Fetching listing");
    let body = client.get(url).send().await?.text().await?;
    let document = Html::parse_document(&body);
    extract_record(&document)
}

/// Extract a [`ListingRecord`] from a parsed detail page.
///
/// The listing type gates everything else: pages of another kind return
/// `None` without touching the remaining fields.
pub fn extract_record(document: &Html) -> Result<Option<ListingRecord>, ScrapeError> {
    let kind = listing_kind(document)?;
    if kind != LAND_LOT_KIND {
        debug!(%kind, "Skipping listing of another kind");
        return Ok(None);
    }

    let title = listing_title(document)?;
    let price = extract::parse_price(&price_text(document)?)?;
    let description = listing_description(document)?;
    let seller = listing_seller(document);
    let area = extract::parse_area(&area_text(document)?)?;
    let location = listing_location(document)?;

    Ok(Some(ListingRecord {
        kind,
        title,
        price,
        seller,
        area,
        location,
        description,
    }))
}

/// The listing type: details panel → second attribute row → value node.
fn listing_kind(document: &Html) -> Result<String, ScrapeError> {
    let panel = select_doc(document, &selectors::DETAILS_PANEL, "tipo", selectors::DETAILS_PANEL_CSS)?;
    let row = panel
        .select(&selectors::DETAILS_ROW)
        .nth(1)
        .ok_or(ScrapeError::MissingNode {
            field: "tipo",
            selector: selectors::DETAILS_ROW_CSS,
        })?;
    let value = select_in(row, &selectors::DETAILS_VALUE, "tipo", selectors::DETAILS_VALUE_CSS)?;
    Ok(extract::trim_kind(&text_of(value)))
}

fn listing_title(document: &Html) -> Result<String, ScrapeError> {
    let card = select_doc(document, &selectors::TITLE_CARD, "título", selectors::TITLE_CARD_CSS)?;
    let node = select_in(card, &selectors::TITLE_TEXT, "título", selectors::TITLE_TEXT_CSS)?;
    Ok(text_of(node))
}

/// Raw price card text, before any numeric stripping.
fn price_text(document: &Html) -> Result<String, ScrapeError> {
    let card = select_doc(document, &selectors::PRICE_CARD, "preço", selectors::PRICE_CARD_CSS)?;
    let value = select_in(card, &selectors::PRICE_VALUE, "preço", selectors::PRICE_VALUE_CSS)?;
    Ok(text_of(value))
}

fn listing_description(document: &Html) -> Result<String, ScrapeError> {
    let card = select_doc(
        document,
        &selectors::DESCRIPTION_CARD,
        "descrição",
        selectors::DESCRIPTION_CARD_CSS,
    )?;
    let node = select_in(
        card,
        &selectors::DESCRIPTION_TEXT,
        "descrição",
        selectors::DESCRIPTION_TEXT_CSS,
    )?;
    Ok(extract::clean_description(&text_of(node)))
}

/// Raw area attribute text: details panel → last attribute row → value node.
fn area_text(document: &Html) -> Result<String, ScrapeError> {
    let panel = select_doc(document, &selectors::DETAILS_PANEL, "tamanho", selectors::DETAILS_PANEL_CSS)?;
    let row = panel
        .select(&selectors::DETAILS_ROW)
        .last()
        .ok_or(ScrapeError::MissingNode {
            field: "tamanho",
            selector: selectors::DETAILS_ROW_CSS,
        })?;
    let value = select_in(row, &selectors::DETAILS_VALUE, "tamanho", selectors::DETAILS_VALUE_CSS)?;
    Ok(text_of(value))
}

/// Location attributes in page order, label → value.
fn listing_location(document: &Html) -> Result<Vec<(String, String)>, ScrapeError> {
    let card = select_doc(
        document,
        &selectors::LOCATION_CARD,
        "localização",
        selectors::LOCATION_CARD_CSS,
    )?;

    let mut pairs = Vec::new();
    for block in card.select(&selectors::LOCATION_ROW) {
        let label = select_in(block, &selectors::LOCATION_LABEL, "localização", selectors::LOCATION_LABEL_CSS)?;
        let value = select_in(block, &selectors::LOCATION_VALUE, "localização", selectors::LOCATION_VALUE_CSS)?;
        pairs.push((text_of(label), text_of(value)));
    }

    Ok(pairs)
}

/// Seller name from the embedded script payload, with lenient fallback.
///
/// The payload occasionally fails to parse even after the quote substitution;
/// the record then carries an empty seller instead of aborting the run.
fn listing_seller(document: &Html) -> String {
    let payload = document
        .select(&selectors::SELLER_SCRIPT)
        .next()
        .and_then(|node| node.value().attr("data-json"));

    match payload.and_then(extract::embedded_seller_name) {
        Some(name) => name,
        None => {
            warn!("Seller payload missing or malformed; recording empty seller");
            String::new()
        }
    }
}

fn select_doc<'a>(
    document: &'a Html,
    selector: &Selector,
    field: &'static str,
    css: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    document
        .select(selector)
        .next()
        .ok_or(ScrapeError::MissingNode { field, selector: css })
}

fn select_in<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
    field: &'static str,
    css: &'static str,
) -> Result<ElementRef<'a>, ScrapeError> {
    element
        .select(selector)
        .next()
        .ok_or(ScrapeError::MissingNode { field, selector: css })
}

/// Concatenated text of an element's descendants.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
