use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("new tab was blocked: {0}")]
    Blocked(String),
}

/// Everything the interaction logic needs from the host document.
///
/// Lookups are by element id. Operations on ids that are not in the page
/// are silent no-ops, so callers never have to check first.
pub trait Page {
    fn has_element(&self, id: &str) -> bool;

    /// `Some(true)` when the element carries `aria-hidden="true"`,
    /// `Some(false)` for any other value, `None` when unset or missing.
    fn aria_hidden(&self, id: &str) -> Option<bool>;

    fn set_aria_hidden(&self, id: &str, hidden: bool);

    fn set_text(&self, id: &str, text: &str);

    fn set_class(&self, id: &str, class: &str, enabled: bool);

    /// Smoothly scrolls the element's top edge to the top of the viewport.
    /// Returns false when there is no such element.
    fn scroll_to(&self, id: &str) -> bool;

    /// Opens `url` in a new tab with `noopener,noreferrer`.
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError>;

    /// Fallback path: a throwaway `<a target="_blank">` clicked and removed.
    fn open_via_transient_link(&self, url: &str) -> Result<(), NavigationError>;
}

/// Work deferred to a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    Navigate { url: String },
    HideOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub task: Deferred,
}

impl Scheduled {
    pub fn after(delay_ms: u32, task: Deferred) -> Self {
        Self { delay_ms, task }
    }
}
