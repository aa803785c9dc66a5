//! Property-based tests for store invariants
//!
//! - Ticker order holds after every insert
//! - Size tracks inserts and removals
//! - Removal keeps exactly the non-matching records, in order
//! - Lookup returns exactly the records keyed by the ticker

use proptest::prelude::*;
use rust_decimal::Decimal;
use secstore::store::{OrderedRecordStore, Record, SecurityKind};

/// Short tickers over a small alphabet so collisions are common
fn arb_ticker() -> impl Strategy<Value = String> {
    ("[A-D]{1,3}", any::<bool>())
        .prop_map(|(t, pad)| if pad { format!("{} ", t) } else { t })
}

fn arb_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Common Stock"),
        Just("Common Stock "),
        Just("ADR"),
        Just("ADR "),
        Just("ETF"),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (arb_ticker(), arb_type(), 0u32..100_000)
        .prop_map(|(ticker, kind, cents)| Record::new(ticker, kind, Decimal::new(cents as i64, 2)))
}

fn is_sorted(store: &OrderedRecordStore) -> bool {
    let tickers: Vec<_> = store.iter().map(|r| r.ticker()).collect();
    tickers.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn prop_insert_keeps_order(records in prop::collection::vec(arb_record(), 0..64)) {
        let mut store = OrderedRecordStore::new();
        for (i, record) in records.into_iter().enumerate() {
            store.insert(record);
            prop_assert!(is_sorted(&store));
            prop_assert_eq!(store.len(), i + 1);
        }
    }

    #[test]
    fn prop_remove_where_keeps_survivors_in_order(
        records in prop::collection::vec(arb_record(), 0..64)
    ) {
        let mut store: OrderedRecordStore = records.into_iter().collect();
        let before = store.len();
        let expected: Vec<Record> = store
            .iter()
            .filter(|r| !r.is_kind(SecurityKind::Adr))
            .cloned()
            .collect();

        let removed = store.remove_where(|r| r.is_kind(SecurityKind::Adr));

        prop_assert_eq!(store.len(), before - removed);
        prop_assert!(store.iter().all(|r| !r.is_kind(SecurityKind::Adr)));
        let remaining: Vec<Record> = store.iter().cloned().collect();
        prop_assert_eq!(remaining, expected);
        prop_assert!(is_sorted(&store));
    }

    #[test]
    fn prop_find_is_complete(
        records in prop::collection::vec(arb_record(), 0..64),
        key in "[A-D]{1,3}",
    ) {
        let store: OrderedRecordStore = records.iter().cloned().collect();

        let found = store.find(&key).count();
        let expected = records
            .iter()
            .filter(|r| r.ticker() == key || r.ticker() == format!("{} ", key))
            .count();
        prop_assert_eq!(found, expected);
        prop_assert!(store.find(&key).all(|r| r.ticker().trim_end() == key));
    }

    #[test]
    fn prop_aggregate_matches_filter(records in prop::collection::vec(arb_record(), 0..64)) {
        let store: OrderedRecordStore = records.iter().cloned().collect();

        let common = store.aggregate(|r| r.is_kind(SecurityKind::CommonStock));
        let matching: Vec<_> = records
            .iter()
            .filter(|r| r.security_type().trim_end() == "Common Stock")
            .collect();

        prop_assert_eq!(common.count, matching.len());
        prop_assert_eq!(common.sum, matching.iter().map(|r| r.price()).sum::<Decimal>());
        prop_assert_eq!(common.average().is_none(), matching.is_empty());
    }
}
