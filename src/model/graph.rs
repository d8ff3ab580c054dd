//! Graph selection model.

use core::fmt;

use super::listeners::ListenerId;
use super::selection::SelectionModel;
use crate::clock::Clock;

/// Number of selectable graphs
pub const GRAPH_COUNT: usize = 2;

/// Kind of event delivered to graph listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    Selected,
}

/// The summaries the analysis page can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    TableSummary,
    BarGraph,
}

impl GraphKind {
    pub const ALL: [GraphKind; GRAPH_COUNT] = [GraphKind::TableSummary, GraphKind::BarGraph];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TableSummary => "table_summary",
            Self::BarGraph => "bar_graph",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tracks which graph is showing. There is always exactly one.
pub struct GraphModel {
    selection: SelectionModel<GraphKind, GRAPH_COUNT>,
}

impl GraphModel {
    /// Start on the table summary with every graph available.
    pub fn new(clock: impl Clock + 'static) -> Self {
        let selection = SelectionModel::new(GraphKind::TableSummary, clock);
        let _ = selection.add_available(GraphKind::BarGraph);
        Self { selection }
    }

    pub fn subscribe(
        &self,
        mut listener: impl FnMut(GraphEvent, u64, GraphKind) + 'static,
    ) -> ListenerId {
        self.selection
            .subscribe(move |at, graph| listener(GraphEvent::Selected, at, *graph))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.selection.unsubscribe(id)
    }

    pub fn current(&self) -> GraphKind {
        self.selection.current()
    }

    pub fn available(&self) -> heapless::Vec<GraphKind, GRAPH_COUNT> {
        self.selection.available()
    }

    /// Show `graph`. No-op if it is already showing.
    pub fn select(&self, graph: GraphKind) -> bool {
        self.selection.select(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[test]
    fn test_select_bar_graph_once() {
        let model = GraphModel::new(|| 500u64);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            model.subscribe(move |event, at, graph| seen.borrow_mut().push((event, at, graph)));
        }

        assert_eq!(model.current(), GraphKind::TableSummary);
        assert!(model.select(GraphKind::BarGraph));
        assert!(!model.select(GraphKind::BarGraph));

        assert_eq!(model.current(), GraphKind::BarGraph);
        assert_eq!(
            *seen.borrow(),
            [(GraphEvent::Selected, 500, GraphKind::BarGraph)]
        );
    }

    #[test]
    fn test_second_listener_counts_from_registration() {
        let model = GraphModel::new(|| 0u64);
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        {
            let first = Rc::clone(&first);
            model.subscribe(move |_, _, _| first.set(first.get() + 1));
        }
        model.select(GraphKind::BarGraph);
        {
            let second = Rc::clone(&second);
            model.subscribe(move |_, _, _| second.set(second.get() + 1));
        }
        model.select(GraphKind::TableSummary);

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_removed_listener_and_current_name() {
        let model = GraphModel::new(|| 0u64);
        let calls = Rc::new(Cell::new(0));
        let id = {
            let calls = Rc::clone(&calls);
            model.subscribe(move |_, _, _| calls.set(calls.get() + 1))
        };

        model.select(GraphKind::BarGraph);
        assert!(model.unsubscribe(id));
        model.select(GraphKind::TableSummary);

        assert_eq!(calls.get(), 1);
        assert_eq!(model.current(), GraphKind::TableSummary);
        model.select(GraphKind::BarGraph);
        assert_eq!(model.current().name(), "bar_graph");
        assert!(!model.available().is_empty());
    }

    #[test]
    fn test_models_are_independent() {
        let first = GraphModel::new(|| 0u64);
        let second = GraphModel::new(|| 0u64);
        let first_calls = Rc::new(Cell::new(0));
        let second_calls = Rc::new(Cell::new(0));
        {
            let c = Rc::clone(&first_calls);
            first.subscribe(move |_, _, _| c.set(c.get() + 1));
        }
        {
            let c = Rc::clone(&second_calls);
            second.subscribe(move |_, _, _| c.set(c.get() + 1));
        }

        first.select(GraphKind::BarGraph);
        assert_eq!((first_calls.get(), second_calls.get()), (1, 0));

        second.select(GraphKind::BarGraph);
        assert_eq!((first_calls.get(), second_calls.get()), (1, 1));
    }
}
