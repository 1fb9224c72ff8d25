use log::{info, warn};
use thiserror::Error;

/// An element flagged `data-external`, validated at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: String,
    pub label: Option<String>,
}

impl ExternalLink {
    pub fn from_attributes(
        href: Option<String>,
        label: Option<String>,
    ) -> Result<Self, SetupIssue> {
        let href = href.map(|h| h.trim().to_string()).unwrap_or_default();
        if href.is_empty() {
            return Err(SetupIssue::MissingHref);
        }
        let label = label.filter(|l| !l.trim().is_empty());
        Ok(Self { href, label })
    }
}

/// A `data-modal="<id>"` trigger pointing at a configured modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTrigger {
    pub modal: String,
}

impl ModalTrigger {
    pub fn parse(value: Option<String>, known_modals: &[String]) -> Result<Self, SetupIssue> {
        let modal = value.map(|v| v.trim().to_string()).unwrap_or_default();
        if modal.is_empty() {
            return Err(SetupIssue::EmptyModalTarget);
        }
        if !known_modals.iter().any(|known| *known == modal) {
            return Err(SetupIssue::UnknownModal(modal));
        }
        Ok(Self { modal })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupIssue {
    #[error("data-external element without a usable data-href")]
    MissingHref,
    #[error("data-modal attribute is empty")]
    EmptyModalTarget,
    #[error("data-modal names \"{0}\", which has no modal root in the page")]
    UnknownModal(String),
    #[error("modal \"{0}\" is configured but its root element is missing")]
    MissingModalRoot(String),
}

/// What startup wiring found. Malformed entries are kept here, never thrown.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub anchors: usize,
    pub external_links: usize,
    pub modal_triggers: usize,
    pub modals: usize,
    pub issues: Vec<SetupIssue>,
}

impl SetupReport {
    pub fn record<T>(&mut self, parsed: Result<T, SetupIssue>) -> Option<T> {
        match parsed {
            Ok(value) => Some(value),
            Err(issue) => {
                self.issues.push(issue);
                None
            }
        }
    }

    pub fn log(&self) {
        info!(
            "Wired {} anchors, {} external links, {} modals ({} data-modal triggers)",
            self.anchors, self.external_links, self.modals, self.modal_triggers
        );
        for issue in &self.issues {
            warn!("Skipping malformed markup: {}", issue);
        }
    }
}
