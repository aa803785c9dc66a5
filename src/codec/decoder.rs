//! Security list decoding
//!
//! Rows look like ` TICKER, TYPE, $PRICE`: each field carries one leading
//! space and the price a dollar sign. A stray trailing space on the ticker or
//! type is kept as-is; lookups and type matching tolerate it.

use crate::store::Record;
use crate::telemetry::{increment_counter, CounterMetric};
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;

/// Pulls records from any byte source, one row at a time
pub struct RecordDecoder<R: Read> {
    reader: csv::Reader<R>,
    raw: ByteRecord,
    skipped: usize,
}

impl<R: Read> RecordDecoder<R> {
    /// Create a decoder; the first line is treated as a header and ignored
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(source);

        Self {
            reader,
            raw: ByteRecord::new(),
            skipped: 0,
        }
    }

    /// Decode the next record, or `None` at end of input.
    ///
    /// Rows without a ticker or with fewer than three fields are skipped.
    /// Bytes that are not valid UTF-8 are replaced rather than failing the row.
    pub fn decode(&mut self) -> Result<Option<Record>, csv::Error> {
        while self.reader.read_byte_record(&mut self.raw)? {
            let row = text_row(std::mem::take(&mut self.raw));
            if let Some(record) = parse_record(&row) {
                return Ok(Some(record));
            }

            self.skipped += 1;
            increment_counter(CounterMetric::RowsSkipped, 1);
            tracing::warn!(
                line = row.position().map(|p| p.line()),
                fields = row.len(),
                "Skipping incomplete row"
            );
        }
        Ok(None)
    }

    /// Rows dropped so far because they could not form a record
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: Read> Iterator for RecordDecoder<R> {
    type Item = Result<Record, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode().transpose()
    }
}

/// Build a record from one row of raw fields
pub fn parse_record(row: &StringRecord) -> Option<Record> {
    if row.len() < 3 {
        return None;
    }

    let ticker = strip_lead(row.get(0)?);
    if ticker.trim().is_empty() {
        return None;
    }
    let security_type = strip_lead(row.get(1)?);
    let price = parse_price(row.get(2)?);

    Some(Record::new(ticker, security_type, price))
}

/// Parse ` $123.45` style text. Empty or non-numeric text yields zero.
pub fn parse_price(text: &str) -> Decimal {
    let digits = text.trim_start().trim_start_matches('$').trim();
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(digits)
        .or_else(|_| Decimal::from_scientific(digits))
        .unwrap_or_else(|_| {
            tracing::debug!(text, "Unparseable price, using zero");
            Decimal::ZERO
        })
}

fn text_row(raw: ByteRecord) -> StringRecord {
    StringRecord::from_byte_record(raw).unwrap_or_else(|e| {
        let raw = e.into_byte_record();
        tracing::warn!(
            line = raw.position().map(|p| p.line()),
            "Row is not valid UTF-8, replacing invalid bytes"
        );
        StringRecord::from_byte_record_lossy(raw)
    })
}

fn strip_lead(field: &str) -> &str {
    field.strip_prefix(' ').unwrap_or(field)
}
