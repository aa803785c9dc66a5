//! Store and pipeline metrics

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Records inserted during load
    RecordsLoaded,
    /// Rows dropped by the decoder
    RowsSkipped,
    /// Records removed by the ADR purge
    RecordsRemoved,
    /// Ticker lookups served
    Lookups,
    /// Records returned by lookups
    LookupMatches,
    /// Records written to the edited list
    RecordsEmitted,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Records currently held by the store
    StoreSize,
}

/// Add to a counter
pub fn increment_counter(metric: CounterMetric, value: u64) {
    let metric_name = match metric {
        CounterMetric::RecordsLoaded => "secstore_records_loaded_total",
        CounterMetric::RowsSkipped => "secstore_rows_skipped_total",
        CounterMetric::RecordsRemoved => "secstore_records_removed_total",
        CounterMetric::Lookups => "secstore_lookups_total",
        CounterMetric::LookupMatches => "secstore_lookup_matches_total",
        CounterMetric::RecordsEmitted => "secstore_records_emitted_total",
    };

    ::metrics::counter!(metric_name).increment(value);
    tracing::trace!(metric = metric_name, value, "Incrementing counter");
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::StoreSize => "secstore_store_size",
    };

    ::metrics::gauge!(metric_name).set(value);
    tracing::trace!(metric = metric_name, value, "Setting gauge");
}
