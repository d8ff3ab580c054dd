//! Observable models that drive every view.
//!
//! All models notify synchronously, on the caller's turn, in listener
//! registration order. Mutating methods take `&self` so a model can be
//! shared (`Rc`) between the views that observe it; a listener may read the
//! model it is subscribed to but must not mutate it.

mod listeners;

pub mod graph;
pub mod page;
pub mod record;
pub mod selection;
pub mod store;

pub use graph::{GraphEvent, GraphKind, GraphModel};
pub use listeners::ListenerId;
pub use page::{PageId, PageModel};
pub use record::{ActivityRecord, HealthMetrics, Metric, RecordId, RecordIds};
pub use selection::{SelectionError, SelectionModel};
pub use store::{ActivityStore, StoreEvent};
