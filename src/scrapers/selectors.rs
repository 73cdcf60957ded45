//! CSS selector tables for the OLX listing markup.
//!
//! The site ships generated class names, so every selector here is a direct
//! coupling to one markup version. They are collected in this one table, each
//! a `*_CSS` string constant paired with a lazily parsed [`Selector`], so a
//! markup change only ever touches this file, never the extraction logic.
//! The string constants double as the selector shown in missing-node errors.

use once_cell::sync::Lazy;
use scraper::Selector;

/// Result-list container on a search-results page.
pub const RESULT_LIST_CSS: &str = "div.h3us20-6.dQYDAH";
/// One result item inside the list.
pub const RESULT_ITEM_CSS: &str = "li";
/// The detail-page anchor inside a result item.
pub const RESULT_ANCHOR_CSS: &str = "a";

/// Details panel holding the attribute rows (type, area, ...).
pub const DETAILS_PANEL_CSS: &str = "div.h3us20-6.bcHOOp";
/// One attribute row of the details panel.
pub const DETAILS_ROW_CSS: &str = "div.duvuxf-0.h3us20-0.jyICCp";
/// The value node of an attribute row.
pub const DETAILS_VALUE_CSS: &str = "dd.sc-1f2ug0x-1.ljYeKO.sc-ifAKCX.kaNiaQ";

/// Card wrapping the advertisement title.
pub const TITLE_CARD_CSS: &str = ".h3us20-6.gFNxVM";
/// The title text node inside the card.
pub const TITLE_TEXT_CSS: &str = ".sc-45jt43-0.eCghYu.sc-ifAKCX.cmFKIN";

/// Card wrapping the price.
pub const PRICE_CARD_CSS: &str = "div.h3us20-6.iYWWXj";
/// The price value inside the card.
pub const PRICE_VALUE_CSS: &str = "h2";

/// Card wrapping the free-text description.
pub const DESCRIPTION_CARD_CSS: &str = "div.h3us20-6.jtENip";
/// The description text node inside the card.
pub const DESCRIPTION_TEXT_CSS: &str = ".sc-1sj3nln-1.eOSweo.sc-ifAKCX.cmFKIN";

/// Card wrapping the location attributes.
pub const LOCATION_CARD_CSS: &str = "div.h3us20-6.fiikIi";
/// One label/value block inside the location card.
pub const LOCATION_ROW_CSS: &str = ".sc-hmzhuo.sc-1f2ug0x-3.ONRJp.sc-jTzLTM.iwtnNi";
/// The label node of a location block.
pub const LOCATION_LABEL_CSS: &str = ".sc-1f2ug0x-0.cLGFbW.sc-ifAKCX.cmFKIN";
/// The value node of a location block.
pub const LOCATION_VALUE_CSS: &str = ".sc-1f2ug0x-1.ljYeKO.sc-ifAKCX.kaNiaQ";

/// Script tag carrying the embedded JSON payload with the seller data.
pub const SELLER_SCRIPT_CSS: &str = "script[data-json]";

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

pub static RESULT_LIST: Lazy<Selector> = Lazy::new(|| sel(RESULT_LIST_CSS));
pub static RESULT_ITEM: Lazy<Selector> = Lazy::new(|| sel(RESULT_ITEM_CSS));
pub static RESULT_ANCHOR: Lazy<Selector> = Lazy::new(|| sel(RESULT_ANCHOR_CSS));
pub static DETAILS_PANEL: Lazy<Selector> = Lazy::new(|| sel(DETAILS_PANEL_CSS));
pub static DETAILS_ROW: Lazy<Selector> = Lazy::new(|| sel(DETAILS_ROW_CSS));
pub static DETAILS_VALUE: Lazy<Selector> = Lazy::new(|| sel(DETAILS_VALUE_CSS));
pub static TITLE_CARD: Lazy<Selector> = Lazy::new(|| sel(TITLE_CARD_CSS));
pub static TITLE_TEXT: Lazy<Selector> = Lazy::new(|| sel(TITLE_TEXT_CSS));
pub static PRICE_CARD: Lazy<Selector> = Lazy::new(|| sel(PRICE_CARD_CSS));
pub static PRICE_VALUE: Lazy<Selector> = Lazy::new(|| sel(PRICE_VALUE_CSS));
pub static DESCRIPTION_CARD: Lazy<Selector> = Lazy::new(|| sel(DESCRIPTION_CARD_CSS));
pub static DESCRIPTION_TEXT: Lazy<Selector> = Lazy::new(|| sel(DESCRIPTION_TEXT_CSS));
pub static LOCATION_CARD: Lazy<Selector> = Lazy::new(|| sel(LOCATION_CARD_CSS));
pub static LOCATION_ROW: Lazy<Selector> = Lazy::new(|| sel(LOCATION_ROW_CSS));
pub static LOCATION_LABEL: Lazy<Selector> = Lazy::new(|| sel(LOCATION_LABEL_CSS));
pub static LOCATION_VALUE: Lazy<Selector> = Lazy::new(|| sel(LOCATION_VALUE_CSS));
pub static SELLER_SCRIPT: Lazy<Selector> = Lazy::new(|| sel(SELLER_SCRIPT_CSS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selector_parses() {
        // Forcing each Lazy catches a typo in any table entry.
        let selectors = [
            &RESULT_LIST,
            &RESULT_ITEM,
            &RESULT_ANCHOR,
            &DETAILS_PANEL,
            &DETAILS_ROW,
            &DETAILS_VALUE,
            &TITLE_CARD,
            &TITLE_TEXT,
            &PRICE_CARD,
            &PRICE_VALUE,
            &DESCRIPTION_CARD,
            &DESCRIPTION_TEXT,
            &LOCATION_CARD,
            &LOCATION_ROW,
            &LOCATION_LABEL,
            &LOCATION_VALUE,
            &SELLER_SCRIPT,
        ];
        for selector in selectors {
            let _ = Lazy::force(selector);
        }
    }
}
