//! Desktop harness for the utrack core.
//!
//! Wires the models and views together the way the tracker UI does, feeds
//! a deterministic batch of demo activities through the store, and writes
//! the resulting bar graph to a PNG.
//!
//! # Environment
//!
//! | Variable         | Meaning                                    | Default         |
//! |------------------|--------------------------------------------|-----------------|
//! | `UTRACK_CONFIG`  | Path to a postcard-encoded `TrackerConfig` | built-in config |
//! | `UTRACK_RECORDS` | Number of demo activities to log           | 40              |
//! | `UTRACK_HIDDEN`  | Comma-separated categories to hide         | none            |
//! | `UTRACK_OUTPUT`  | PNG to write                               | `bar_graph.png` |
//!
//! Variables may also come from a `.env` file in the working directory.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{error, info, warn};

use utrack::views::{BarGraph, DataList, LastEntry, PageView, TableSummary};
use utrack::{
    ActivityStore, GraphKind, GraphModel, HealthMetrics, PageId, PageModel, TrackerConfig,
};

const DEFAULT_RECORDS: usize = 40;
const DEFAULT_OUTPUT: &str = "bar_graph.png";

/// Every third demo activity is removed again, so removals are exercised too.
const REMOVE_EVERY: usize = 3;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Deterministic stream of plausible activities (xorshift64).
struct DemoActivities {
    state: u64,
}

impl DemoActivities {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn rating(&mut self) -> u8 {
        (self.next_u64() % 5) as u8 + 1
    }

    /// Category index, ratings and a duration in 5 minute steps up to 2h
    fn next_activity(&mut self, categories: usize) -> (usize, HealthMetrics, f64) {
        let category = (self.next_u64() % categories as u64) as usize;
        let metrics = HealthMetrics::new(self.rating(), self.rating(), self.rating());
        let minutes = ((self.next_u64() % 24) + 1) as f64 * 5.0;
        (category, metrics, minutes)
    }
}

fn load_config() -> Result<TrackerConfig, String> {
    let Ok(path) = std::env::var("UTRACK_CONFIG") else {
        return Ok(TrackerConfig::default());
    };
    let bytes = std::fs::read(&path).map_err(|err| format!("reading {path}: {err}"))?;
    let config = TrackerConfig::from_bytes(&bytes).map_err(|err| format!("{path}: {err}"))?;
    info!("Loaded config from {}", path);
    Ok(config)
}

fn record_count() -> usize {
    match std::env::var("UTRACK_RECORDS") {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("UTRACK_RECORDS={} is not a count, using {}", value, DEFAULT_RECORDS);
            DEFAULT_RECORDS
        }),
        Err(_) => DEFAULT_RECORDS,
    }
}

fn run() -> Result<(), String> {
    let config = load_config()?;

    let store = ActivityStore::new(now_ms);
    let pages = PageModel::default();
    let graphs = GraphModel::new(now_ms);

    let analysis = PageView::attach(PageId::Analysis, &pages);
    let table = TableSummary::attach(&config, &store, &graphs);
    let chart = BarGraph::attach(&config, &store, &graphs);
    let list = DataList::attach(&store);
    let last = LastEntry::attach(&store);

    let mut demo = DemoActivities::new(0x5eed_cafe);
    let mut logged = Vec::new();
    for _ in 0..record_count() {
        let (category, metrics, minutes) = demo.next_activity(config.activity_types.len());
        let record = store.new_record(config.activity_types[category].as_str(), metrics, minutes);
        if store.add(record.clone()) {
            logged.push(record);
        }
    }
    for record in logged.iter().step_by(REMOVE_EVERY) {
        store.remove(record);
    }

    if let Ok(hidden) = std::env::var("UTRACK_HIDDEN") {
        for category in hidden.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            if let Err(err) = chart.borrow_mut().set_visible(category, false) {
                warn!("Cannot hide {}: {}", category, err);
            }
        }
    }

    pages.select(PageId::Analysis);
    graphs.select(GraphKind::BarGraph);
    info!(
        "Analysis page visible: {}, bar graph shown: {}",
        analysis.borrow().is_visible(),
        chart.borrow().is_shown()
    );

    for row in table.borrow().rows() {
        info!(
            "{:<12} {:>3} entries {:>7.1} min total {:>6.2} min avg",
            row.category, row.count, row.total_minutes, row.average_minutes
        );
    }
    info!(
        "{} activities listed, last added at {:?} ms",
        list.borrow().len(),
        last.borrow().last_added_ms()
    );

    let layout = config.chart;
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(layout.width, layout.height));
    let Ok(()) = chart.borrow_mut().flush(&mut display);
    info!("Chart repainted {} times", chart.borrow().repaint_count());

    let output = std::env::var("UTRACK_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());
    display
        .to_rgb_output_image(&OutputSettingsBuilder::new().build())
        .save_png(&output)
        .map_err(|err| format!("writing {output}: {err}"))?;
    info!("Wrote {}", output);
    Ok(())
}

fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    env_logger::init();
    info!("Starting utrack simulator");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
