//! Views driven by the models.
//!
//! A view never mutates a model. It reacts to notifications through the
//! [`View`] hooks and is wired to a model with one of the `watch_*`
//! functions, which keep the view alive for as long as the model holds the
//! listener.

use core::cell::RefCell;

use alloc::rc::Rc;

use crate::model::{
    ActivityRecord, ActivityStore, GraphEvent, GraphKind, GraphModel, ListenerId, PageId,
    PageModel, StoreEvent,
};

pub mod bar_graph;
pub mod data_list;
pub mod last_entry;
pub mod page_view;
pub mod table_summary;

pub use bar_graph::BarGraph;
pub use data_list::{DataList, DataRow};
pub use last_entry::LastEntry;
pub use page_view::PageView;
pub use table_summary::{SummaryRow, TableSummary};

/// Notification hooks. Each returns `true` if the view changed.
pub trait View {
    fn on_activity(&mut self, _event: StoreEvent, _at_ms: u64, _record: &ActivityRecord) -> bool {
        false
    }

    fn on_graph_selected(&mut self, _at_ms: u64, _graph: GraphKind) -> bool {
        false
    }

    fn on_page_selected(&mut self, _page: PageId) -> bool {
        false
    }
}

pub fn watch_store<V: View + 'static>(view: &Rc<RefCell<V>>, store: &ActivityStore) -> ListenerId {
    let view = Rc::clone(view);
    store.subscribe(move |event, at_ms, record| {
        view.borrow_mut().on_activity(event, at_ms, record);
    })
}

pub fn watch_graphs<V: View + 'static>(view: &Rc<RefCell<V>>, graphs: &GraphModel) -> ListenerId {
    let view = Rc::clone(view);
    graphs.subscribe(move |event, at_ms, graph| match event {
        GraphEvent::Selected => {
            view.borrow_mut().on_graph_selected(at_ms, graph);
        }
    })
}

pub fn watch_pages<V: View + 'static>(view: &Rc<RefCell<V>>, pages: &PageModel) -> ListenerId {
    let view = Rc::clone(view);
    pages.subscribe(move |page| {
        view.borrow_mut().on_page_selected(page);
    })
}
