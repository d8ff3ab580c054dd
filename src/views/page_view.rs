//! Visibility of a single page

use core::cell::RefCell;

use alloc::rc::Rc;
use log::debug;

use super::{View, watch_pages};
use crate::model::{PageId, PageModel};

/// Tracks whether `page` is the one showing.
#[derive(Debug)]
pub struct PageView {
    page: PageId,
    visible: bool,
}

impl PageView {
    pub fn new(page: PageId, current: PageId) -> Self {
        Self {
            page,
            visible: page == current,
        }
    }

    /// Follow `pages` from its current selection on.
    pub fn attach(page: PageId, pages: &PageModel) -> Rc<RefCell<Self>> {
        let view = Rc::new(RefCell::new(Self::new(page, pages.current())));
        watch_pages(&view, pages);
        view
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl View for PageView {
    fn on_page_selected(&mut self, page: PageId) -> bool {
        let visible = page == self.page;
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        debug!(
            "{} {}",
            self.page,
            if visible { "shown" } else { "hidden" }
        );
        true
    }
}
