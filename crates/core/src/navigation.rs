//! Page navigation seam

use std::cell::RefCell;
use std::rc::Rc;

/// Where the client is and how it moves to another page
pub trait Navigator {
    /// Path of the current page, without query or fragment
    fn current_path(&self) -> String;

    /// Leave the current page for `path`
    fn navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// Navigator that records every navigation instead of performing it.
///
/// Used by the CLI, which has no page to leave, and by tests. Clones share
/// the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    current: Rc<RefCell<String>>,
    history: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    /// Start on `path`
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            current: Rc::new(RefCell::new(path.into())),
            history: Rc::default(),
        }
    }

    /// Every path navigated to, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        self.history.borrow_mut().push(path.to_string());
        *self.current.borrow_mut() = path.to_string();
    }
}
