//! Load, report, purge, lookup and emit, in that order

use super::{AverageReport, PipelineError, RunSummary, TokenSource, QUIT_SENTINEL};
use crate::codec::{write_records, RecordDecoder};
use crate::config::ReportFormat;
use crate::store::{OrderedRecordStore, Record, SecurityKind};
use crate::telemetry::{increment_counter, set_gauge, CounterMetric, GaugeMetric};
use std::io::{self, Read, Write};

/// Drives one store through its lifecycle.
///
/// Averages, prompts and lookup results are written to `console`.
pub struct RecordPipeline<C: Write> {
    console: C,
    format: ReportFormat,
    prompt: bool,
}

impl<C: Write> RecordPipeline<C> {
    /// Create a pipeline writing text averages and prompts to `console`
    pub fn new(console: C) -> Self {
        Self {
            console,
            format: ReportFormat::Text,
            prompt: true,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the ticker prompt
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Give back the console, e.g. to inspect captured output
    pub fn into_console(self) -> C {
        self.console
    }

    /// Insert every decoded record, in arrival order, into a fresh store
    pub fn load<I, E>(&self, source: I) -> Result<OrderedRecordStore, PipelineError>
    where
        I: IntoIterator<Item = Result<Record, E>>,
        PipelineError: From<E>,
    {
        let mut store = OrderedRecordStore::new();
        for record in source {
            store.insert(record?);
        }

        increment_counter(CounterMetric::RecordsLoaded, store.len() as u64);
        set_gauge(GaugeMetric::StoreSize, store.len() as f64);
        tracing::info!(records = store.len(), "Loaded security list");
        Ok(store)
    }

    /// Write common stock then ADR averages to the console
    pub fn report_averages(
        &mut self,
        store: &OrderedRecordStore,
    ) -> Result<AverageReport, PipelineError> {
        let report = AverageReport::compute(store);
        match self.format {
            ReportFormat::Text => report.write_text(&mut self.console)?,
            ReportFormat::Json => report.write_json(&mut self.console)?,
        }

        tracing::info!(
            common_stock = report.common_stock.count,
            adr = report.adr.count,
            "Reported averages"
        );
        Ok(report)
    }

    /// Drop every ADR record. Returns the number removed.
    pub fn purge_adr(&self, store: &mut OrderedRecordStore) -> usize {
        let removed = store.remove_where(|r| r.is_kind(SecurityKind::Adr));

        increment_counter(CounterMetric::RecordsRemoved, removed as u64);
        set_gauge(GaugeMetric::StoreSize, store.len() as f64);
        tracing::info!(removed, remaining = store.len(), "Purged ADR records");
        removed
    }

    /// Print one `Stock: <ticker>  Price: $<price>` line per match
    pub fn lookup(&mut self, store: &OrderedRecordStore, ticker: &str) -> io::Result<usize> {
        let mut matches = 0;
        for record in store.find(ticker) {
            writeln!(self.console, "Stock: {}  Price: ${}", ticker, record.price())?;
            matches += 1;
        }

        increment_counter(CounterMetric::Lookups, 1);
        increment_counter(CounterMetric::LookupMatches, matches as u64);
        tracing::debug!(ticker, matches, "Lookup");
        Ok(matches)
    }

    /// Serve lookups until the sentinel is read.
    ///
    /// Each token is looked up before it is compared with the sentinel, so the
    /// sentinel itself is always looked up once. End of input also stops the
    /// loop. Returns the number of lookups served.
    pub fn interactive_lookup<T: TokenSource>(
        &mut self,
        store: &OrderedRecordStore,
        input: &mut T,
    ) -> Result<usize, PipelineError> {
        let mut lookups = 0;
        loop {
            self.write_prompt()?;
            let Some(token) = input.next_token()? else {
                tracing::info!(lookups, "Lookup input closed");
                break;
            };

            self.lookup(store, &token)?;
            lookups += 1;

            if token == QUIT_SENTINEL {
                break;
            }
        }
        Ok(lookups)
    }

    /// Write the header and every remaining record to `sink`
    pub fn emit<W: Write>(
        &self,
        store: &OrderedRecordStore,
        sink: &mut W,
    ) -> Result<usize, PipelineError> {
        let written = write_records(sink, store)?;

        increment_counter(CounterMetric::RecordsEmitted, written as u64);
        tracing::info!(records = written, "Wrote edited list");
        Ok(written)
    }

    /// Run load, averages, ADR purge, interactive lookup and emission
    pub fn run<R, T, W>(
        &mut self,
        mut source: RecordDecoder<R>,
        input: &mut T,
        sink: &mut W,
    ) -> Result<RunSummary, PipelineError>
    where
        R: Read,
        T: TokenSource,
        W: Write,
    {
        let mut store = self.load(&mut source)?;
        let loaded = store.len();
        let skipped = source.skipped();
        self.report_averages(&store)?;
        let removed = self.purge_adr(&mut store);
        let lookups = self.interactive_lookup(&store, input)?;
        let emitted = self.emit(&store, sink)?;

        writeln!(self.console, "\nCreated an updated list in csv format.")?;
        writeln!(self.console, "Have a nice day!")?;

        Ok(RunSummary {
            loaded,
            skipped,
            removed,
            lookups,
            emitted,
        })
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            writeln!(self.console, "\nPlease use capital letters only.")?;
            writeln!(self.console, "Enter a ticker ([!quit] to quit): ")?;
            self.console.flush()?;
        }
        Ok(())
    }
}
