//! Ticker-ordered record store

use super::Record;
use rust_decimal::Decimal;

/// Count and price sum over the records matching a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    pub count: usize,
    pub sum: Decimal,
}

impl Aggregate {
    /// Mean price, `None` for an empty set
    pub fn average(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / Decimal::from(self.count))
    }
}

/// Records kept in non-decreasing ticker order
#[derive(Debug, Clone, Default)]
pub struct OrderedRecordStore {
    records: Vec<Record>,
}

impl OrderedRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at its ticker position.
    ///
    /// The record lands before the first stored record whose ticker is not
    /// strictly less than its own, so among equal tickers the newest comes first.
    /// That ordering among equal tickers is intentional.
    pub fn insert(&mut self, record: Record) {
        let at = self
            .records
            .partition_point(|r| r.ticker() < record.ticker());
        self.records.insert(at, record);
    }

    /// All records keyed by `ticker`, including stored tickers with one
    /// trailing space
    pub fn find<'a>(&'a self, ticker: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.ticker_matches(ticker))
    }

    /// Remove every record matching `predicate`, keeping the rest in order.
    /// Returns the number of records removed.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&Record) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        before - self.records.len()
    }

    /// Single pass count and price sum over matching records.
    ///
    /// A sum beyond the `Decimal` range saturates at `Decimal::MAX` (or
    /// `Decimal::MIN`) and logs a warning.
    pub fn aggregate<P>(&self, mut predicate: P) -> Aggregate
    where
        P: FnMut(&Record) -> bool,
    {
        let mut acc = Aggregate::default();
        let mut saturated = false;

        for record in self.records.iter().filter(|r| predicate(r)) {
            let price = record.price();
            acc.count += 1;
            acc.sum = acc.sum.checked_add(price).unwrap_or_else(|| {
                saturated = true;
                if price.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            });
        }

        if saturated {
            tracing::warn!(count = acc.count, sum = %acc.sum, "Price sum overflowed, saturating");
        }
        acc
    }

    /// In-order traversal of the current records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderedRecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Record> for OrderedRecordStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for OrderedRecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
