//! Calculates gift aid for a batch of gifts read as CSV and outputs the
//! results as CSV string.

use crate::calculator::{calculate_gift_aid, GiftAid};
use crate::prelude::*;
use serde::Deserialize;
use std::io::{Read, Write};
use tracing::{debug, info};

const CSV_HEADERS: [&str; 6] = [
    "gross_gift",
    "tax_rate",
    "charity_claims",
    "giver_claims",
    "net_gift_given",
    "net_gift_received",
];

#[derive(Debug, Deserialize)]
struct GiftCsv {
    /// Gross gift in pounds, exactly as typed.
    gift: String,
    /// Tax band as typed. An empty cell or a missing column is the same as
    /// an unreadable rate and ends up at the basic rate.
    #[serde(default)]
    taxrate: Option<String>,
}

/// Given a CSV buffer (with header) of gifts, calculates gift aid for each
/// row in order.
///
/// Only blank rows are skipped. A row with more fields than the header, such
/// as an unquoted `1,000,40`, fails the whole batch rather than being
/// dropped. A row missing its tax rate is calculated at the basic rate.
pub fn read_gifts(handle: impl Read) -> Result<Vec<GiftAid>> {
    let mut gifts = vec![];

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(handle);
    let headers = rdr
        .headers()
        .with_context(|| "Invalid gift header format")?
        .clone();

    for result in rdr.records() {
        let record = result.with_context(|| "Invalid gift row format")?;
        let line = record.position().map_or(0, |position| position.line());

        if record.iter().all(str::is_empty) {
            // blank row, skip it
            continue;
        }

        if record.len() > headers.len() {
            return Err(anyhow!(
                "Invalid gift row format at line {}: expected at most {} \
                fields, found {}",
                line,
                headers.len(),
                record.len()
            ));
        }

        let gift: GiftCsv = record.deserialize(Some(&headers)).with_context(
            || format!("Invalid gift row format at line {}", line),
        )?;

        debug!(line, ?gift, "Read gift");
        let tax_rate = gift.taxrate.unwrap_or_default();
        gifts.push(calculate_gift_aid(
            &RawValue::Text(gift.gift),
            &RawValue::Text(tax_rate),
        ));
    }

    info!(count = gifts.len(), "Calculated gifts");

    Ok(gifts)
}

/// Writes calculated gifts into a buffer as CSV string, one row per gift in
/// the order given.
pub fn write_gifts(handle: impl Write, gifts: &[GiftAid]) -> Result<()> {
    // Enables the piped recipient to process the output as stream if they
    // wish so
    const FLUSH_EVERY_N_ROWS: usize = 100;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(handle);

    wtr.write_record(CSV_HEADERS)?;

    for (index, gift) in gifts.iter().enumerate() {
        wtr.serialize(gift)?;

        if index % FLUSH_EVERY_N_ROWS == 0 {
            wtr.flush()?;
        }
    }

    wtr.flush()?;

    Ok(())
}
