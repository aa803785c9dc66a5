//! Per-type average report

use crate::store::{Aggregate, OrderedRecordStore, SecurityKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{self, Write};

/// Average price of one type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeAverage {
    pub kind: SecurityKind,
    pub count: usize,
    pub sum: Decimal,
    /// `None` when no record matched
    pub average: Option<Decimal>,
}

impl TypeAverage {
    fn new(kind: SecurityKind, aggregate: Aggregate) -> Self {
        Self {
            kind,
            count: aggregate.count,
            sum: aggregate.sum,
            average: aggregate.average().map(|avg| avg.round_dp(2)),
        }
    }
}

/// Common stock and ADR averages, in that order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AverageReport {
    pub common_stock: TypeAverage,
    pub adr: TypeAverage,
}

impl AverageReport {
    /// Aggregate both recognized types over the store
    pub fn compute(store: &OrderedRecordStore) -> Self {
        let common_stock = store.aggregate(|r| r.is_kind(SecurityKind::CommonStock));
        let adr = store.aggregate(|r| r.is_kind(SecurityKind::Adr));

        Self {
            common_stock: TypeAverage::new(SecurityKind::CommonStock, common_stock),
            adr: TypeAverage::new(SecurityKind::Adr, adr),
        }
    }

    /// Write one `<Type> Average: <value>` line per type; `n/a` for an empty set
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in [&self.common_stock, &self.adr] {
            match entry.average {
                Some(avg) => writeln!(out, "{} Average: {}", entry.kind.label(), avg)?,
                None => writeln!(out, "{} Average: n/a", entry.kind.label())?,
            }
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}
