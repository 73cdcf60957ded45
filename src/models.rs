//! Data models for scraped listings and run-wide aggregation.
//!
//! Two structures carry the whole pipeline:
//! - [`ListingRecord`]: one extracted detail page, written to the CSV file
//! - [`RunTotals`]: the accumulators behind the end-of-run summary blocks
//!
//! `RunTotals` is owned by the pipeline and passed explicitly between
//! stages; nothing else holds run-wide state.

use crate::error::ScrapeError;

/// The location attribute label whose value feeds the regions accumulator.
pub const MUNICIPALITY_LABEL: &str = "Município";

/// One extracted listing, ready to be appended to the output file.
///
/// `price` and `area` are `None` when the page carried no parseable value
/// (unpriced listing, area without the `m²` unit); those records are still
/// written, with empty cells, but do not feed the numeric accumulators.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    /// The listing type as shown on the details panel (e.g. `"Terreno"`).
    pub kind: String,
    /// The advertisement title.
    pub title: String,
    /// Asking price in whole currency units.
    pub price: Option<i64>,
    /// Seller or agency name; empty when the embedded payload is unusable.
    pub seller: String,
    /// Lot area in square meters.
    pub area: Option<u32>,
    /// Location attributes in page order, label → value.
    pub location: Vec<(String, String)>,
    /// Free-text description, flattened onto one line.
    pub description: String,
}

impl ListingRecord {
    /// The value of the required municipality location attribute.
    pub fn municipality(&self) -> Option<&str> {
        self.location
            .iter()
            .find(|(label, _)| label == MUNICIPALITY_LABEL)
            .map(|(_, value)| value.as_str())
    }
}

/// Run-scoped accumulators behind the summary reporter.
///
/// Append-only for the lifetime of the run and read only at the end. Zero
/// areas are kept here and filtered at reporting time.
#[derive(Debug, Default)]
pub struct RunTotals {
    /// Every parsed price, in listing order.
    pub prices: Vec<i64>,
    /// Every parsed area, in listing order, zeros included.
    pub areas: Vec<u32>,
    /// The municipality of every accepted listing, in listing order.
    pub regions: Vec<String>,
}

impl RunTotals {
    /// Fold one accepted record into the accumulators.
    ///
    /// # Errors
    ///
    /// A record without the municipality attribute is a fatal error: the
    /// regions accumulator requires it and the page is considered broken.
    pub fn observe(&mut self, record: &ListingRecord) -> Result<(), ScrapeError> {
        if let Some(price) = record.price {
            self.prices.push(price);
        }
        if let Some(area) = record.area {
            self.areas.push(area);
        }
        let region = record
            .municipality()
            .ok_or(ScrapeError::MissingLocationAttr(MUNICIPALITY_LABEL))?;
        self.regions.push(region.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ListingRecord {
        ListingRecord {
            kind: "Terreno".to_string(),
            title: "Terreno no Campeche".to_string(),
            price: Some(150_000),
            seller: "Imobiliária Sol".to_string(),
            area: Some(500),
            location: vec![
                ("CEP".to_string(), "88063-000".to_string()),
                ("Município".to_string(), "Florianópolis".to_string()),
                ("Bairro".to_string(), "Campeche".to_string()),
            ],
            description: "Terreno plano".to_string(),
        }
    }

    #[test]
    fn municipality_is_looked_up_by_label() {
        assert_eq!(record().municipality(), Some("Florianópolis"));
    }

    #[test]
    fn observe_feeds_all_three_accumulators() {
        let mut totals = RunTotals::default();
        totals.observe(&record()).unwrap();
        assert_eq!(totals.prices, vec![150_000]);
        assert_eq!(totals.areas, vec![500]);
        assert_eq!(totals.regions, vec!["Florianópolis".to_string()]);
    }

    #[test]
    fn observe_skips_absent_numeric_fields() {
        let mut totals = RunTotals::default();
        let mut rec = record();
        rec.price = None;
        rec.area = None;
        totals.observe(&rec).unwrap();
        assert!(totals.prices.is_empty());
        assert!(totals.areas.is_empty());
        assert_eq!(totals.regions.len(), 1);
    }

    #[test]
    fn observe_requires_municipality() {
        let mut totals = RunTotals::default();
        let mut rec = record();
        rec.location.retain(|(label, _)| label != MUNICIPALITY_LABEL);
        assert!(matches!(
            totals.observe(&rec),
            Err(ScrapeError::MissingLocationAttr(MUNICIPALITY_LABEL))
        ));
        assert!(totals.regions.is_empty());
    }
}
