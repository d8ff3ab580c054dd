//! Per-category show/hide switches

use alloc::vec;
use alloc::vec::Vec;

/// Which categories the chart draws, by configured index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    shown: Vec<bool>,
}

impl Visibility {
    /// Every one of `count` categories visible.
    pub fn all(count: usize) -> Self {
        Self {
            shown: vec![true; count],
        }
    }

    /// False for hidden and for unknown indices.
    pub fn is_visible(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }

    /// Returns whether anything changed.
    pub fn set(&mut self, index: usize, visible: bool) -> bool {
        match self.shown.get_mut(index) {
            Some(slot) if *slot != visible => {
                *slot = visible;
                true
            }
            _ => false,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.shown.iter().filter(|shown| **shown).count()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_changes() {
        let mut visibility = Visibility::all(3);
        assert_eq!(visibility.visible_count(), 3);

        assert!(visibility.set(1, false));
        assert!(!visibility.set(1, false));
        assert!(!visibility.is_visible(1));
        assert_eq!(visibility.visible_count(), 2);

        assert!(visibility.set(1, true));
        assert!(!visibility.set(9, false));
        assert!(!visibility.is_visible(9));
    }
}
