//! Pure text-to-value parsers for the listing fields.
//!
//! Everything in this module operates on text already pulled out of the page,
//! so the functions stay trivially testable without any network or DOM
//! machinery. The stripping rules mirror the markup of the source site:
//! prices arrive as `"R$ 150.000"`, areas as `"500m²"`, and the seller hides
//! in a JSON payload embedded in a script-tag attribute.

use crate::error::ScrapeError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// Matches an area value carrying the `m²` unit suffix.
static AREA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*m²\s*$").unwrap());

/// Parse a price card text into an integer amount.
///
/// Strips the `"R$ "` currency prefix, drops `.` thousands separators, and
/// turns the decimal `,` into `.` before converting. The decimal part is
/// truncated: `"R$ 150.000,00"` becomes `150000`.
///
/// # Returns
///
/// `Ok(None)` when the text is empty after stripping (unpriced listing),
/// `Ok(Some(amount))` for a numeric value, and an error when a non-empty
/// remainder fails to parse.
pub fn parse_price(raw: &str) -> Result<Option<i64>, ScrapeError> {
    let cleaned = raw.replace("R$ ", "").replace('.', "").replace(',', ".");
    if cleaned.is_empty() {
        return Ok(None);
    }
    let amount: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| ScrapeError::InvalidNumber {
            field: "preço",
            raw: raw.to_string(),
        })?;
    Ok(Some(amount.trunc() as i64))
}

/// Parse an area attribute text into square meters.
///
/// Only texts carrying the `m²` suffix are numeric; anything else (a dash,
/// a different unit) yields `None` and stays out of the size accumulator.
pub fn parse_area(raw: &str) -> Result<Option<u32>, ScrapeError> {
    if !raw.contains("m²") {
        return Ok(None);
    }
    let caps = AREA_RE.captures(raw).ok_or_else(|| ScrapeError::InvalidNumber {
        field: "tamanho",
        raw: raw.to_string(),
    })?;
    let value = caps[1].parse().map_err(|_| ScrapeError::InvalidNumber {
        field: "tamanho",
        raw: raw.to_string(),
    })?;
    Ok(Some(value))
}

/// Drop the trailing character of the type attribute text.
///
/// The source markup appends one stray character to the value, so the page
/// shows `"Terrenos"` where the record type is `"Terreno"`.
pub fn trim_kind(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next_back();
    chars.as_str().to_string()
}

/// Flatten a description card text onto a single line.
pub fn clean_description(raw: &str) -> String {
    raw.replace('\n', "")
}

#[derive(Deserialize)]
struct EmbeddedPayload {
    ad: EmbeddedAd,
}

#[derive(Deserialize)]
struct EmbeddedAd {
    user: EmbeddedUser,
}

#[derive(Deserialize)]
struct EmbeddedUser {
    name: String,
}

/// Lenient extraction of the seller name from the embedded script payload.
///
/// The payload is JSON embedded in a `data-json` attribute, occasionally
/// broken by unescaped single quotes; those are substituted with `/` before
/// parsing, as the page's own scripts do. Any failure (absent keys, parse
/// error) yields `None` so the caller can fall back to an empty seller.
pub fn embedded_seller_name(payload: &str) -> Option<String> {
    let sanitized = payload.replace('\'', "/");
    match serde_json::from_str::<EmbeddedPayload>(&sanitized) {
        Ok(embedded) => Some(embedded.ad.user.name),
        Err(e) => {
            debug!(error = %e, "Embedded seller payload did not parse");
            None
        }
    }
}
