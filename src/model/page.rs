//! Page selection model.
//!
//! Page listeners only receive the newly selected [`PageId`]; unlike graph
//! listeners they get no event kind or timestamp.

use core::fmt;

use super::listeners::ListenerId;
use super::selection::{SelectionError, SelectionModel};

/// Maximum number of pages that can register with a [`PageModel`]
pub const MAX_PAGES: usize = 8;

/// Page identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Input,
    Analysis,
    RemoveData,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Home,
        PageId::Input,
        PageId::Analysis,
        PageId::RemoveData,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home_page",
            Self::Input => "input_page",
            Self::Analysis => "analysis_page",
            Self::RemoveData => "remove_data_page",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tracks which page is showing.
pub struct PageModel {
    selection: SelectionModel<PageId, MAX_PAGES>,
}

impl Default for PageModel {
    /// All pages registered, starting on [`PageId::Home`].
    fn default() -> Self {
        let model = Self::new(PageId::Home);
        for page in PageId::ALL {
            let _ = model.register(page);
        }
        model
    }
}

impl PageModel {
    /// Start on `initial`, which is the only page available until others
    /// [`register`](Self::register).
    pub fn new(initial: PageId) -> Self {
        // Page notifications carry no timestamp, so no clock is needed.
        Self {
            selection: SelectionModel::new(initial, || 0u64),
        }
    }

    /// Make `page` selectable.
    pub fn register(&self, page: PageId) -> Result<(), SelectionError> {
        self.selection.add_available(page)
    }

    pub fn subscribe(&self, mut listener: impl FnMut(PageId) + 'static) -> ListenerId {
        self.selection.subscribe(move |_, page| listener(*page))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.selection.unsubscribe(id)
    }

    pub fn current(&self) -> PageId {
        self.selection.current()
    }

    pub fn available(&self) -> heapless::Vec<PageId, MAX_PAGES> {
        self.selection.available()
    }

    /// Show `page`. No-op if it is already showing or not registered.
    pub fn select(&self, page: PageId) -> bool {
        self.selection.select(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn test_pages_must_register_before_selection() {
        let model = PageModel::new(PageId::Home);
        assert!(!model.select(PageId::Input));

        model.register(PageId::Input).unwrap();
        assert!(model.select(PageId::Input));
        assert_eq!(model.current(), PageId::Input);
    }

    #[test]
    fn test_listener_receives_page_only() {
        let model = PageModel::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            model.subscribe(move |page| seen.borrow_mut().push(page));
        }

        model.select(PageId::Analysis);
        model.select(PageId::Analysis);
        model.select(PageId::Home);

        assert_eq!(*seen.borrow(), [PageId::Analysis, PageId::Home]);
        assert_eq!(model.available().len(), 4);
    }

    #[test]
    fn test_page_names() {
        assert_eq!(PageId::RemoveData.name(), "remove_data_page");
        assert_eq!(alloc::format!("{}", PageId::Home), "home_page");
    }
}
