//! Output file formatting

use crate::store::Record;
use std::io::{self, Write};

/// Header line of the edited list
pub const OUTPUT_HEADER: &str = " Ticker ,SecurityType , Price";

/// Render one record as an output line (without newline)
pub fn format_record(record: &Record) -> String {
    format!(
        " {}, {}, ${}",
        record.ticker(),
        record.security_type(),
        record.price()
    )
}

/// Write the header followed by every record in order.
/// Returns the number of records written.
pub fn write_records<'a, W, I>(out: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    writeln!(out, "{}", OUTPUT_HEADER)?;

    let mut written = 0;
    for record in records {
        writeln!(out, "{}", format_record(record))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_record() {
        let record = Record::new("AAPL", "Common Stock", dec!(150.25));
        assert_eq!(format_record(&record), " AAPL, Common Stock, $150.25");
    }

    #[test]
    fn test_format_record_keeps_scale() {
        let record = Record::new("MSFT", "Common Stock", dec!(250.00));
        assert_eq!(format_record(&record), " MSFT, Common Stock, $250.00");
    }

    #[test]
    fn test_write_records() {
        let records = vec![
            Record::new("AAPL", "Common Stock", dec!(150)),
            Record::new("MSFT", "Common Stock", dec!(250)),
        ];
        let mut out = Vec::new();
        let written = write_records(&mut out, &records).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            " Ticker ,SecurityType , Price\n AAPL, Common Stock, $150\n MSFT, Common Stock, $250\n"
        );
    }

    #[test]
    fn test_write_records_empty() {
        let mut out = Vec::new();
        let written = write_records(&mut out, std::iter::empty::<&Record>()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(out).unwrap(), " Ticker ,SecurityType , Price\n");
    }
}
