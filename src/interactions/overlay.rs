use std::cell::Cell;

use log::{debug, warn};

use super::markup::ExternalLink;
use super::page::{Deferred, Page, Scheduled};
use crate::config::InteractionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Showing,
}

/// The "hyperdrive" layer shown between an external-link click and the new
/// tab opening.
///
/// Each launch shows the overlay and schedules navigation after the launch
/// delay; navigation then schedules the hide after the linger delay.
/// Dismissing the overlay by hand only hides it: the navigation timer is
/// already running and still fires.
pub struct HyperdriveOverlay {
    overlay_id: String,
    text_id: String,
    backdrop_id: String,
    active_class: String,
    warp_class: String,
    default_message: String,
    launch_delay_ms: u32,
    linger_ms: u32,
    state: Cell<OverlayState>,
}

impl HyperdriveOverlay {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            overlay_id: config.hooks.overlay.clone(),
            text_id: config.hooks.overlay_text.clone(),
            backdrop_id: config.hooks.backdrop.clone(),
            active_class: config.active_class.clone(),
            warp_class: config.warp_class.clone(),
            default_message: config.default_message.clone(),
            launch_delay_ms: config.launch_delay_ms,
            linger_ms: config.overlay_linger_ms,
            state: Cell::new(OverlayState::Hidden),
        }
    }

    /// Picks up whatever visibility the markup ships with.
    pub fn sync_from_page<P: Page>(&self, page: &P) {
        let state = match page.aria_hidden(&self.overlay_id) {
            Some(false) => OverlayState::Showing,
            _ => OverlayState::Hidden,
        };
        self.state.set(state);
    }

    pub fn overlay_id(&self) -> &str {
        &self.overlay_id
    }

    pub fn state(&self) -> OverlayState {
        self.state.get()
    }

    pub fn message_for(&self, label: Option<&str>) -> String {
        match label {
            Some(label) => format!("{} — Launching…", label),
            None => self.default_message.clone(),
        }
    }

    pub fn launch<P: Page>(&self, page: &P, link: &ExternalLink) -> Scheduled {
        debug!("Launching {} via hyperdrive", link.href);
        self.show(page, &self.message_for(link.label.as_deref()));
        Scheduled::after(
            self.launch_delay_ms,
            Deferred::Navigate {
                url: link.href.clone(),
            },
        )
    }

    /// Re-showing an already visible overlay restarts it with the new text.
    pub fn show<P: Page>(&self, page: &P, message: &str) {
        if !page.has_element(&self.overlay_id) {
            return;
        }
        page.set_aria_hidden(&self.overlay_id, false);
        page.set_class(&self.overlay_id, &self.active_class, true);
        page.set_class(&self.backdrop_id, &self.warp_class, true);
        page.set_text(&self.text_id, message);
        self.state.set(OverlayState::Showing);
    }

    pub fn hide<P: Page>(&self, page: &P) {
        if self.state.get() == OverlayState::Hidden || !page.has_element(&self.overlay_id) {
            return;
        }
        page.set_aria_hidden(&self.overlay_id, true);
        page.set_class(&self.overlay_id, &self.active_class, false);
        page.set_class(&self.backdrop_id, &self.warp_class, false);
        self.state.set(OverlayState::Hidden);
    }

    /// Clicks on the overlay's inner content are ignored; only the
    /// background itself dismisses.
    pub fn on_click<P: Page>(&self, page: &P, target_is_overlay: bool) {
        if target_is_overlay {
            self.hide(page);
        }
    }

    pub fn run<P: Page>(&self, page: &P, task: Deferred) -> Option<Scheduled> {
        match task {
            Deferred::Navigate { url } => {
                open_external(page, &url);
                Some(Scheduled::after(self.linger_ms, Deferred::HideOverlay))
            }
            Deferred::HideOverlay => {
                self.hide(page);
                None
            }
        }
    }
}

/// Opens `url` in a new tab, falling back to a transient link when the
/// window API is missing or refuses. Returns whether anything was opened.
pub fn open_external<P: Page>(page: &P, url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    match page.open_in_new_tab(url) {
        Ok(()) => true,
        Err(e) => {
            debug!("window.open failed ({}), using a transient link", e);
            match page.open_via_transient_link(url) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Could not open {}: {}", url, e);
                    false
                }
            }
        }
    }
}
