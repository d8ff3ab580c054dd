//! Bar graph view
//!
//! Owns its own running totals, the per-category visibility switches and
//! the canvas the chart is painted on. Every change that affects the chart
//! (a counted store event or a visibility toggle) repaints it in full.

use core::cell::RefCell;

use alloc::rc::Rc;
use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, trace};

use super::{View, watch_graphs, watch_store};
use crate::config::TrackerConfig;
use crate::model::{ActivityRecord, ActivityStore, GraphKind, GraphModel, StoreEvent};
use crate::stats::Aggregator;
use crate::ui::canvas::Canvas;
use crate::ui::components::chart::{BarChart, ChartError, ChartPlan, ChartResult, Visibility};
use crate::ui::core::Drawable;
use crate::ui::styling::CHART_BACKGROUND;

pub struct BarGraph {
    aggregator: Aggregator,
    visibility: Visibility,
    chart: BarChart,
    canvas: Canvas,
    shown: bool,
    repaints: u32,
}

impl BarGraph {
    /// Build the view and paint the empty chart once.
    pub fn new(config: &TrackerConfig) -> Self {
        let aggregator = Aggregator::from_config(config);
        let layout = config.chart;
        let mut graph = Self {
            visibility: Visibility::all(aggregator.len()),
            aggregator,
            chart: BarChart::new(layout),
            canvas: Canvas::new(Size::new(layout.width, layout.height), CHART_BACKGROUND),
            shown: false,
            repaints: 0,
        };
        graph.repaint();
        graph
    }

    /// Follow `store` and `graphs` from now on.
    ///
    /// Records already in the store are not counted.
    pub fn attach(
        config: &TrackerConfig,
        store: &ActivityStore,
        graphs: &GraphModel,
    ) -> Rc<RefCell<Self>> {
        let mut graph = Self::new(config);
        graph.shown = graphs.current() == GraphKind::BarGraph;
        let graph = Rc::new(RefCell::new(graph));
        watch_store(&graph, store);
        watch_graphs(&graph, graphs);
        graph
    }

    /// Show or hide one category, repainting if that changes anything.
    pub fn set_visible(&mut self, category: &str, visible: bool) -> ChartResult<bool> {
        let index = self.index_of(category)?;
        if !self.visibility.set(index, visible) {
            return Ok(false);
        }
        debug!(
            "Bar graph {} {}",
            if visible { "shows" } else { "hides" },
            category
        );
        self.repaint();
        Ok(true)
    }

    /// Flip one category's visibility. Returns the new state.
    pub fn toggle(&mut self, category: &str) -> ChartResult<bool> {
        let visible = !self.visibility.is_visible(self.index_of(category)?);
        self.set_visible(category, visible)?;
        Ok(visible)
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.aggregator
            .index_of(category)
            .is_some_and(|index| self.visibility.is_visible(index))
    }

    /// Number of full repaints so far, including the initial one
    pub fn repaint_count(&self) -> u32 {
        self.repaints
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Layout of the latest repaint
    pub fn plan(&self) -> &ChartPlan {
        self.chart.current_plan()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Copy what changed since the last flush onto `display`.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.canvas.flush(display)
    }

    fn index_of(&self, category: &str) -> ChartResult<usize> {
        self.aggregator
            .index_of(category)
            .ok_or_else(|| ChartError::UnknownCategory {
                name: String::from(category),
            })
    }

    fn repaint(&mut self) {
        self.chart.update(&self.aggregator, &self.visibility);
        let Ok(()) = self.chart.draw(&mut self.canvas);
        self.chart.mark_clean();
        self.repaints += 1;
        trace!("Bar graph repaint #{}", self.repaints);
    }
}

impl View for BarGraph {
    fn on_activity(&mut self, event: StoreEvent, _at_ms: u64, record: &ActivityRecord) -> bool {
        if self.aggregator.apply(event, record).is_none() {
            return false;
        }
        self.repaint();
        true
    }

    fn on_graph_selected(&mut self, _at_ms: u64, graph: GraphKind) -> bool {
        let shown = graph == GraphKind::BarGraph;
        let changed = shown != self.shown;
        self.shown = shown;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HealthMetrics, Metric};
    use crate::ui::styling::Gradient;

    fn wired() -> (ActivityStore, GraphModel, Rc<RefCell<BarGraph>>) {
        let store = ActivityStore::new(|| 0u64);
        let graphs = GraphModel::new(|| 0u64);
        let graph = BarGraph::attach(&TrackerConfig::default(), &store, &graphs);
        (store, graphs, graph)
    }

    #[test]
    fn test_paints_once_on_construction() {
        let (_, _, graph) = wired();
        let graph = graph.borrow();
        assert_eq!(graph.repaint_count(), 1);
        assert!(!graph.is_shown());
        assert_eq!(graph.plan().groups.len(), 5);
        assert!(graph.canvas().dirty_area().is_some());
    }

    #[test]
    fn test_repaints_on_every_counted_event() {
        let (store, _, graph) = wired();
        let record = store.new_record("Coding", HealthMetrics::new(3, 2, 4), 30.0);

        store.add(record.clone());
        assert_eq!(graph.borrow().repaint_count(), 2);
        let energy = graph.borrow().plan().group(2).unwrap().bars[0];
        assert_eq!(energy.average, 3.0);
        assert_eq!(energy.area.size.height, 144);

        store.remove(&record);
        assert_eq!(graph.borrow().repaint_count(), 3);
        let energy = graph.borrow().plan().group(2).unwrap().bars[0];
        assert_eq!(energy.area.size.height, 0);

        // Not stored, so no event and no repaint
        store.remove(&record);
        // Unknown category: stored but not charted
        store.add(store.new_record("ABC", HealthMetrics::new(1, 1, 1), 1.0));
        assert_eq!(graph.borrow().repaint_count(), 3);
    }

    #[test]
    fn test_toggle_hides_and_repaints() {
        let (store, _, graph) = wired();
        store.add(store.new_record("Coding", HealthMetrics::new(3, 2, 4), 30.0));
        let mut graph = graph.borrow_mut();
        let before = graph.repaint_count();

        assert!(!graph.toggle("Studying").unwrap());
        assert!(!graph.toggle("Eating").unwrap());
        assert_eq!(graph.repaint_count(), before + 2);
        assert!(!graph.is_visible("Studying"));
        assert_eq!(graph.plan().groups.len(), 3);

        let energy = Gradient::for_metric(Metric::Energy);
        assert_eq!(graph.canvas().pixel(Point::new(65, 275)), Some(energy.bottom));

        // Setting the current state again is not a change
        assert!(!graph.set_visible("Coding", true).unwrap());
        assert_eq!(graph.repaint_count(), before + 2);

        assert!(matches!(
            graph.toggle("ABC"),
            Err(ChartError::UnknownCategory { name }) if name == "ABC"
        ));
    }

    #[test]
    fn test_shown_only_for_bar_graph() {
        let (_, graphs, graph) = wired();
        graphs.select(GraphKind::BarGraph);
        assert!(graph.borrow().is_shown());
        graphs.select(GraphKind::TableSummary);
        assert!(!graph.borrow().is_shown());
        // Selection does not repaint
        assert_eq!(graph.borrow().repaint_count(), 1);
    }

    #[test]
    fn test_flush_copies_chart() {
        let (store, _, graph) = wired();
        store.add(store.new_record("Gaming", HealthMetrics::new(5, 5, 5), 60.0));

        let mut display = Canvas::new(Size::new(640, 320), Rgb565::BLACK);
        graph.borrow_mut().flush(&mut display).unwrap();

        let happiness = Gradient::for_metric(Metric::Happiness);
        // Gaming is the fifth group: x 500, happiness bar at 550
        assert_eq!(display.pixel(Point::new(555, 275)), Some(happiness.bottom));
        assert!(graph.borrow().canvas().dirty_area().is_none());
    }
}
