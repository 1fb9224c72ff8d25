//! In-memory stand-ins for the browser, used by the unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::page::{Deferred, NavigationError, Page, Scheduled};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    AriaHidden(String, bool),
    Text(String, String),
    Class(String, String, bool),
    Scroll(String),
    OpenTab(String),
    TransientLink(String),
}

#[derive(Default)]
pub struct FakePage {
    elements: HashSet<String>,
    aria: RefCell<HashMap<String, bool>>,
    texts: RefCell<HashMap<String, String>>,
    classes: RefCell<HashMap<String, BTreeSet<String>>>,
    writes: RefCell<Vec<Write>>,
    window_error: RefCell<Option<NavigationError>>,
}

impl FakePage {
    pub fn with_elements(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn fail_window_open(&self, error: NavigationError) {
        *self.window_error.borrow_mut() = Some(error);
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.borrow().clone()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn aria_hidden_value(&self, id: &str) -> Option<bool> {
        self.aria.borrow().get(id).copied()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.classes
            .borrow()
            .get(id)
            .is_some_and(|set| set.contains(class))
    }

    pub fn scrolled(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::Scroll(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every URL handed to the browser, by either path.
    pub fn opened(&self) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::OpenTab(url) | Write::TransientLink(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, write: Write) {
        self.writes.borrow_mut().push(write);
    }
}

impl Page for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn aria_hidden(&self, id: &str) -> Option<bool> {
        self.aria_hidden_value(id)
    }

    fn set_aria_hidden(&self, id: &str, hidden: bool) {
        if self.has_element(id) {
            self.aria.borrow_mut().insert(id.to_string(), hidden);
            self.record(Write::AriaHidden(id.to_string(), hidden));
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if self.has_element(id) {
            self.texts.borrow_mut().insert(id.to_string(), text.to_string());
            self.record(Write::Text(id.to_string(), text.to_string()));
        }
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        if !self.has_element(id) {
            return;
        }
        let mut classes = self.classes.borrow_mut();
        let set = classes.entry(id.to_string()).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
        drop(classes);
        self.record(Write::Class(id.to_string(), class.to_string(), enabled));
    }

    fn scroll_to(&self, id: &str) -> bool {
        if !self.has_element(id) {
            return false;
        }
        self.record(Write::Scroll(id.to_string()));
        true
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        if let Some(error) = self.window_error.borrow().clone() {
            return Err(error);
        }
        self.record(Write::OpenTab(url.to_string()));
        Ok(())
    }

    fn open_via_transient_link(&self, url: &str) -> Result<(), NavigationError> {
        self.record(Write::TransientLink(url.to_string()));
        Ok(())
    }
}

/// Manual millisecond clock standing in for `setTimeout`.
#[derive(Default)]
pub struct Timeline {
    now: u32,
    seq: u64,
    pending: Vec<(u32, u64, Deferred)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, scheduled: Scheduled) {
        self.seq += 1;
        self.pending
            .push((self.now + scheduled.delay_ms, self.seq, scheduled.task));
    }

    /// Runs every task due up to and including `at`, in due order, feeding
    /// follow-up work back onto the timeline.
    pub fn advance_to(&mut self, at: u32, mut run: impl FnMut(Deferred) -> Option<Scheduled>) {
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= at)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(index, _)| index);
            let Some(index) = next else { break };
            let (due, _, task) = self.pending.remove(index);
            self.now = due;
            if let Some(follow_up) = run(task) {
                self.schedule(follow_up);
            }
        }
        self.now = at;
    }
}
