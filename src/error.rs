//! Error type shared across the scraping pipeline.
//!
//! Every fatal condition funnels into [`ScrapeError`] and propagates out of
//! `main` via `?`. The only recoverable conditions (index items without an
//! anchor, unpriced listings, listings without an area unit, malformed seller
//! payloads) never surface here; they are handled at the extraction site.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the scraping pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP request failed or the response body could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A selector that the extraction depends on matched nothing.
    #[error("no node matched `{selector}` while extracting {field}")]
    MissingNode {
        /// The listing field being extracted when the lookup failed.
        field: &'static str,
        /// The CSS selector that matched nothing.
        selector: &'static str,
    },

    /// The location panel carries no attribute with the required label.
    #[error("listing has no \"{0}\" location attribute")]
    MissingLocationAttr(&'static str),

    /// A numeric field survived stripping but did not parse.
    #[error("could not parse {field} from {raw:?}")]
    InvalidNumber {
        /// The listing field the text came from.
        field: &'static str,
        /// The raw text as found on the page.
        raw: String,
    },

    /// Writing a row to the output file failed.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Opening or flushing the output file failed.
    #[error("file operation on {path} failed: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A page or anchor URL could not be parsed.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_node_names_field_and_selector() {
        let err = ScrapeError::MissingNode {
            field: "preço",
            selector: "div.h3us20-6.iYWWXj",
        };
        let msg = err.to_string();
        assert!(msg.contains("preço"));
        assert!(msg.contains("div.h3us20-6.iYWWXj"));
    }

    #[test]
    fn invalid_number_keeps_raw_text() {
        let err = ScrapeError::InvalidNumber {
            field: "tamanho",
            raw: "muitom²".to_string(),
        };
        assert!(err.to_string().contains("muitom²"));
    }
}
