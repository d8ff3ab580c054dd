//! Per-category count and time summary

use core::cell::RefCell;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use super::{View, watch_graphs, watch_store};
use crate::config::TrackerConfig;
use crate::model::{ActivityRecord, ActivityStore, GraphKind, GraphModel, StoreEvent};
use crate::stats::{Aggregator, CategoryTotals};

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub count: u32,
    pub total_minutes: f64,
    /// Two decimal places; 0 for an empty category
    pub average_minutes: f64,
}

impl SummaryRow {
    fn new(category: &str, totals: &CategoryTotals) -> Self {
        Self {
            category: String::from(category),
            count: totals.count(),
            total_minutes: totals.duration_sum(),
            average_minutes: totals.average_duration(),
        }
    }
}

/// Table with a row for every configured activity type.
///
/// Shown only while [`GraphKind::TableSummary`] is the selected graph.
pub struct TableSummary {
    aggregator: Aggregator,
    shown: bool,
}

impl TableSummary {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            aggregator: Aggregator::from_config(config),
            shown: false,
        }
    }

    /// Follow `store` and `graphs` from now on.
    ///
    /// Records already in the store are not counted.
    pub fn attach(
        config: &TrackerConfig,
        store: &ActivityStore,
        graphs: &GraphModel,
    ) -> Rc<RefCell<Self>> {
        let mut table = Self::new(config);
        table.shown = graphs.current() == GraphKind::TableSummary;
        let table = Rc::new(RefCell::new(table));
        watch_store(&table, store);
        watch_graphs(&table, graphs);
        table
    }

    /// Rows in configured order
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.aggregator
            .iter()
            .map(|(name, totals)| SummaryRow::new(name, totals))
            .collect()
    }

    pub fn row(&self, category: &str) -> Option<SummaryRow> {
        self.aggregator
            .totals(category)
            .map(|totals| SummaryRow::new(category, totals))
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

impl View for TableSummary {
    fn on_activity(&mut self, event: StoreEvent, _at_ms: u64, record: &ActivityRecord) -> bool {
        self.aggregator.apply(event, record).is_some()
    }

    fn on_graph_selected(&mut self, _at_ms: u64, graph: GraphKind) -> bool {
        let shown = graph == GraphKind::TableSummary;
        let changed = shown != self.shown;
        self.shown = shown;
        changed
    }
}
