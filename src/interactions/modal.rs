use std::cell::RefCell;
use std::collections::BTreeMap;

use log::debug;

use super::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

/// Visibility of every configured modal, keyed by root element id.
///
/// Modals are independent: opening one never closes another.
#[derive(Default)]
pub struct ModalDialogs {
    modals: RefCell<BTreeMap<String, ModalState>>,
}

impl ModalDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` if its root is in the page. Initial visibility
    /// comes from the markup's `aria-hidden`.
    pub fn register<P: Page>(&self, page: &P, id: &str) -> bool {
        if !page.has_element(id) {
            return false;
        }
        let state = match page.aria_hidden(id) {
            Some(false) => ModalState::Visible,
            _ => ModalState::Hidden,
        };
        self.modals.borrow_mut().insert(id.to_string(), state);
        true
    }

    pub fn ids(&self) -> Vec<String> {
        self.modals.borrow().keys().cloned().collect()
    }

    pub fn state(&self, id: &str) -> Option<ModalState> {
        self.modals.borrow().get(id).copied()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.state(id) == Some(ModalState::Visible)
    }

    pub fn open<P: Page>(&self, page: &P, id: &str) {
        if self.transition(id, ModalState::Visible) {
            debug!("Opening modal {}", id);
            page.set_aria_hidden(id, false);
        }
    }

    pub fn close<P: Page>(&self, page: &P, id: &str) {
        if self.transition(id, ModalState::Hidden) {
            debug!("Closing modal {}", id);
            page.set_aria_hidden(id, true);
        }
    }

    pub fn close_all<P: Page>(&self, page: &P) {
        for id in self.ids() {
            self.close(page, &id);
        }
    }

    /// Only a click landing on the root itself (the backdrop) closes;
    /// clicks bubbling up from the inner panel do not.
    pub fn on_backdrop_click<P: Page>(&self, page: &P, id: &str, target_is_root: bool) {
        if target_is_root {
            self.close(page, id);
        }
    }

    /// Returns true when the state actually changed.
    fn transition(&self, id: &str, next: ModalState) -> bool {
        let mut modals = self.modals.borrow_mut();
        match modals.get_mut(id) {
            Some(state) if *state != next => {
                *state = next;
                true
            }
            _ => false,
        }
    }
}
