//! CSV output for accepted listings.
//!
//! The output file is append-only across runs: the header row is written
//! once when the file is created, and every later run keeps appending rows.
//! Re-running the scraper over the same search therefore duplicates rows:
//! there is no deduplication and no truncation.
//!
//! The header carries seven column names while data rows carry six values:
//! the `tipo` column is never populated, since only `"Terreno"` records pass
//! the pipeline filter. The writer runs in flexible mode to allow this.

use crate::error::ScrapeError;
use crate::models::ListingRecord;
use csv::WriterBuilder;
use itertools::Itertools;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// The fixed header row written when the output file is created.
pub const HEADER: [&str; 7] = [
    "tipo",
    "título",
    "preço",
    "vendedor",
    "tamanho",
    "localização",
    "descrição",
];

/// Append-only writer for the listings file.
pub struct ListingWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl ListingWriter {
    /// Open the listings file for appending, creating it with the fixed
    /// header row when it does not exist yet.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self, ScrapeError> {
        let new_file = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ScrapeError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
        if new_file {
            writer.write_record(HEADER)?;
            writer.flush().map_err(|source| ScrapeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        info!(new_file, "Opened listings file");
        Ok(Self {
            writer,
            path: path.to_path_buf(),
        })
    }

    /// Append one accepted record as a row and flush it to disk.
    ///
    /// Absent price or area render as empty cells; the location mapping is
    /// rendered by [`format_location`].
    pub fn append(&mut self, record: &ListingRecord) -> Result<(), ScrapeError> {
        let price = record.price.map(|p| p.to_string()).unwrap_or_default();
        let area = record.area.map(|a| a.to_string()).unwrap_or_default();
        let location = format_location(&record.location);

        self.writer.write_record([
            record.title.as_str(),
            price.as_str(),
            record.seller.as_str(),
            area.as_str(),
            location.as_str(),
            record.description.as_str(),
        ])?;
        self.writer.flush().map_err(|source| ScrapeError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Render the location attribute mapping as one cell.
///
/// Pairs keep their page order: `{CEP: 88063-000, Município: Florianópolis}`.
pub fn format_location(pairs: &[(String, String)]) -> String {
    let inner = pairs
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .join(", ");
    format!("{{{inner}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "olx_terrenos_{}_{}.csv",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn record() -> ListingRecord {
        ListingRecord {
            kind: "Terreno".to_string(),
            title: "Terreno no Campeche".to_string(),
            price: Some(150_000),
            seller: "Imobiliária Sol".to_string(),
            area: Some(500),
            location: vec![
                ("Município".to_string(), "Florianópolis".to_string()),
                ("Bairro".to_string(), "Campeche".to_string()),
            ],
            description: "Terreno plano, pronto para construir".to_string(),
        }
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|row| row.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn header_is_written_on_create() {
        let path = scratch_path("header");
        let mut writer = ListingWriter::open(&path).unwrap();
        writer.append(&record()).unwrap();
        drop(writer);

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], HEADER.map(str::to_string).to_vec());
        // Data rows carry one fewer value than the header names.
        assert_eq!(rows[1].len(), 6);
        assert_eq!(rows[1][0], "Terreno no Campeche");
        assert_eq!(rows[1][1], "150000");
        assert_eq!(rows[1][4], "{Município: Florianópolis, Bairro: Campeche}");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rerun_appends_without_new_header() {
        // Duplicate rows on re-run are documented behavior, not a bug.
        let path = scratch_path("rerun");
        for _ in 0..2 {
            let mut writer = ListingWriter::open(&path).unwrap();
            writer.append(&record()).unwrap();
        }

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "tipo");
        assert_eq!(rows[1], rows[2]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn absent_numeric_fields_render_empty() {
        let path = scratch_path("empty_cells");
        let mut writer = ListingWriter::open(&path).unwrap();
        let mut rec = record();
        rec.price = None;
        rec.area = None;
        writer.append(&rec).unwrap();
        drop(writer);

        let rows = read_rows(&path);
        assert_eq!(rows[1][1], "");
        assert_eq!(rows[1][3], "");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn location_renders_in_page_order() {
        let pairs = vec![
            ("CEP".to_string(), "88063-000".to_string()),
            ("Município".to_string(), "Florianópolis".to_string()),
        ];
        assert_eq!(
            format_location(&pairs),
            "{CEP: 88063-000, Município: Florianópolis}"
        );
        assert_eq!(format_location(&[]), "{}");
    }
}
