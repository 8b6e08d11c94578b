use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

/// Command channel into a mounted `SectionScroller`.
///
/// The page creates one handle and hands clones to the scroller and to
/// whoever needs to drive it (nav bar, footer). The scroller binds its
/// navigation on mount and unbinds on unmount; calls made while unbound are
/// dropped.
#[derive(Clone, Default)]
pub struct ScrollerHandle {
    target: Rc<RefCell<Option<Callback<usize>>>>,
}

impl ScrollerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigates to section `index`. Out-of-range indices clamp; requests
    /// made mid-transition or while zoomed are ignored.
    pub fn scroll_to(&self, index: usize) {
        let target = self.target.borrow().clone();
        if let Some(target) = target {
            target.emit(index);
        }
    }

    pub(crate) fn bind(&self, callback: Callback<usize>) {
        *self.target.borrow_mut() = Some(callback);
    }

    pub(crate) fn unbind(&self) {
        self.target.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        self.target.borrow().is_some()
    }
}

impl PartialEq for ScrollerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.target, &other.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn forwards_only_while_bound() {
        let handle = ScrollerHandle::new();
        let seen = Rc::new(Cell::new(None));

        handle.scroll_to(3);
        assert_eq!(seen.get(), None);

        let sink = seen.clone();
        handle.bind(Callback::from(move |i| sink.set(Some(i))));
        handle.clone().scroll_to(2);
        assert_eq!(seen.get(), Some(2));

        handle.unbind();
        assert!(!handle.is_bound());
        handle.scroll_to(1);
        assert_eq!(seen.get(), Some(2));
    }

    #[test]
    fn clones_compare_equal() {
        let handle = ScrollerHandle::new();
        assert!(handle == handle.clone());
        assert!(handle != ScrollerHandle::new());
    }
}
