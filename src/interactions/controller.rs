use log::debug;

use super::markup::{ExternalLink, SetupIssue, SetupReport};
use super::modal::ModalDialogs;
use super::overlay::HyperdriveOverlay;
use super::page::{Deferred, Page, Scheduled};
use super::{scroll, year};
use crate::config::InteractionConfig;

/// Owns the page handle and all transient UI state. Every event source
/// funnels into one of the `on_*` methods; timer work comes back in
/// through [`PageController::run`].
pub struct PageController<P: Page> {
    page: P,
    config: InteractionConfig,
    overlay: HyperdriveOverlay,
    modals: ModalDialogs,
}

impl<P: Page> PageController<P> {
    pub fn new(page: P, config: InteractionConfig) -> Self {
        let overlay = HyperdriveOverlay::new(&config);
        Self {
            page,
            config,
            overlay,
            modals: ModalDialogs::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn overlay(&self) -> &HyperdriveOverlay {
        &self.overlay
    }

    pub fn modals(&self) -> &ModalDialogs {
        &self.modals
    }

    /// One-shot startup: year stamp, initial overlay state, modal roots.
    pub fn initialize(&self, current_year: i32, report: &mut SetupReport) {
        year::stamp_year(&self.page, &self.config.hooks.year, current_year);
        self.overlay.sync_from_page(&self.page);
        for spec in &self.config.modals {
            if self.modals.register(&self.page, &spec.id) {
                report.modals += 1;
            } else {
                report.issues.push(SetupIssue::MissingModalRoot(spec.id.clone()));
            }
        }
    }

    pub fn on_anchor_click(&self, href: &str) -> bool {
        scroll::scroll_to_fragment(&self.page, href)
    }

    pub fn on_external_click(&self, link: &ExternalLink) -> Scheduled {
        self.overlay.launch(&self.page, link)
    }

    pub fn on_overlay_click(&self, target_is_overlay: bool) {
        self.overlay.on_click(&self.page, target_is_overlay);
    }

    pub fn open_modal(&self, id: &str) {
        self.modals.open(&self.page, id);
    }

    pub fn close_modal(&self, id: &str) {
        self.modals.close(&self.page, id);
    }

    pub fn on_modal_click(&self, id: &str, target_is_root: bool) {
        self.modals.on_backdrop_click(&self.page, id, target_is_root);
    }

    /// Escape dismisses everything. Pending navigation is left alone.
    pub fn on_key(&self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        debug!("Escape pressed, dismissing overlay and modals");
        self.modals.close_all(&self.page);
        self.overlay.hide(&self.page);
        true
    }

    pub fn run(&self, task: Deferred) -> Option<Scheduled> {
        self.overlay.run(&self.page, task)
    }
}
