//! End-of-run summary blocks over the accumulated totals.
//!
//! Three pure string-builders, printed to stdout after the last listing:
//! announcement counts per region, land-lot size statistics, and price
//! statistics. The numeric reporters return `None` on empty input (with
//! nothing accumulated there is no minimum or maximum to print) and the
//! caller simply skips the block.

use itertools::Itertools;
use std::fmt::Write;

/// Count announcements per region, distinct regions in first-seen order.
///
/// The header line is always present, even with nothing accumulated.
pub fn regions_report(regions: &[String]) -> String {
    let mut out = String::from("Número de anúncios por região:\n");
    for region in regions.iter().unique() {
        let count = regions.iter().filter(|r| *r == region).count();
        writeln!(out, "{region}: {count}").unwrap();
    }
    out
}

/// Min/max/mean of the accumulated lot sizes, zeros filtered out.
pub fn area_report(areas: &[u32]) -> Option<String> {
    let sizes: Vec<f64> = areas
        .iter()
        .filter(|&&area| area != 0)
        .map(|&area| f64::from(area))
        .collect();
    stats_block("Tamanho terreno:", &sizes)
}

/// Min/max/mean of the accumulated prices, unfiltered.
pub fn price_report(prices: &[i64]) -> Option<String> {
    let values: Vec<f64> = prices.iter().map(|&price| price as f64).collect();
    stats_block("Preço:", &values)
}

fn stats_block(header: &str, values: &[f64]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Some(format!(
        "{header}\n  Médio: {mean:.2}\n  Mínimo: {min:.2}\n  Máximo: {max:.2}\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn regions_count_in_first_seen_order() {
        let report = regions_report(&strings(&["A", "B", "A", "A"]));
        assert_eq!(report, "Número de anúncios por região:\nA: 3\nB: 1\n");
    }

    #[test]
    fn empty_regions_keep_the_header() {
        assert_eq!(regions_report(&[]), "Número de anúncios por região:\n");
    }

    #[test]
    fn area_stats_filter_zero_entries() {
        let report = area_report(&[0, 0, 200, 400]).unwrap();
        assert!(report.contains("Mínimo: 200.00"));
        assert!(report.contains("Máximo: 400.00"));
        assert!(report.contains("Médio: 300.00"));
    }

    #[test]
    fn all_zero_areas_yield_no_block() {
        assert_eq!(area_report(&[0, 0]), None);
        assert_eq!(area_report(&[]), None);
    }

    #[test]
    fn price_stats_are_unfiltered() {
        let report = price_report(&[100, 300, 200]).unwrap();
        assert!(report.contains("Mínimo: 100.00"));
        assert!(report.contains("Máximo: 300.00"));
        assert!(report.contains("Médio: 200.00"));
    }

    #[test]
    fn zero_prices_still_count() {
        let report = price_report(&[0, 200]).unwrap();
        assert!(report.contains("Mínimo: 0.00"));
        assert!(report.contains("Médio: 100.00"));
    }

    #[test]
    fn empty_prices_yield_no_block() {
        assert_eq!(price_report(&[]), None);
    }

    #[test]
    fn block_layout_is_header_then_indented_stats() {
        let report = price_report(&[100]).unwrap();
        assert_eq!(report, "Preço:\n  Médio: 100.00\n  Mínimo: 100.00\n  Máximo: 100.00\n");
    }
}
