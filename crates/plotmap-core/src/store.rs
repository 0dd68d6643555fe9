//! In-memory ordered plot sequence with progressive batch loading and a
//! prefix-tolerant search index.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{PlotMapError, Result};
use crate::plot::{Plot, PlotRecord};

/// Records delivered per progressive batch. The first batch is available
/// before the ready signal; the rest are appended during idle time.
pub const BATCH_SIZE: usize = 500;

/// Some source labels carry a literal "Plot " prefix and some do not; the
/// index tolerates both spellings of the same plot.
const LABEL_PREFIX: &str = "plot ";

/// Canonical lookup key for a label: lowercased, trimmed, prefix stripped.
/// Applied identically at index-build and query time.
pub fn canonical_key(label: &str) -> String {
    let normalized = label.trim().to_lowercase();
    match normalized.strip_prefix(LABEL_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

#[derive(Default)]
pub struct PlotStore {
    plots: Vec<Plot>,
    index: HashMap<String, usize>,
    next_id: u64,
}

impl PlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a full record list in one step (CLI path; the
    /// viewer appends per batch instead).
    pub fn from_records(records: Vec<PlotRecord>) -> Self {
        let mut store = Self::new();
        store.extend(&records);
        store
    }

    /// Split records into bounded-size batches for progressive delivery.
    pub fn into_batches(records: Vec<PlotRecord>) -> Vec<Vec<PlotRecord>> {
        let mut batches = Vec::with_capacity(records.len().div_ceil(BATCH_SIZE).max(1));
        let mut iter = records.into_iter();
        loop {
            let batch: Vec<PlotRecord> = iter.by_ref().take(BATCH_SIZE).collect();
            if batch.is_empty() {
                break;
            }
            batches.push(batch);
        }
        batches
    }

    /// Append a batch, assigning process-local ids, and rebuild the index.
    pub fn extend(&mut self, batch: &[PlotRecord]) {
        for record in batch {
            self.plots.push(Plot {
                id: self.next_id,
                number: record.number.clone(),
                size: record.size.clone(),
                color: record.color.clone(),
                x: record.x,
                y: record.y,
            });
            self.next_id += 1;
        }
        self.rebuild_index();
        debug!(total = self.plots.len(), appended = batch.len(), "plot batch appended");
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, plot) in self.plots.iter().enumerate() {
            let normalized = plot.number.trim().to_lowercase();
            self.index.insert(canonical_key(&plot.number), i);
            self.index.insert(normalized, i);
        }
    }

    /// Exact case-insensitive lookup first (prefix-tolerant both ways), then
    /// substring containment fallback. `None` is a search miss; the caller
    /// surfaces the notice and leaves any prior highlight untouched.
    pub fn search(&self, query: &str) -> Option<usize> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        if let Some(&i) = self.index.get(&normalized) {
            return Some(i);
        }
        if let Some(&i) = self.index.get(&canonical_key(query)) {
            return Some(i);
        }
        self.plots
            .iter()
            .position(|plot| plot.number.to_lowercase().contains(&normalized))
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn get(&self, index: usize) -> Option<&Plot> {
        self.plots.get(index)
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// View-local relabel of a single plot; the backing file is untouched.
    pub fn set_number(&mut self, index: usize, number: String) -> Result<()> {
        let total = self.plots.len();
        let plot = self
            .plots
            .get_mut(index)
            .ok_or(PlotMapError::PlotIndexOutOfRange { index, total })?;
        plot.number = number;
        self.rebuild_index();
        Ok(())
    }

    /// Snapshot of the current plots in on-disk shape, for export.
    pub fn to_records(&self) -> Vec<PlotRecord> {
        self.plots.iter().map(Plot::to_record).collect()
    }

    pub fn clear(&mut self) {
        self.plots.clear();
        self.index.clear();
    }
}
