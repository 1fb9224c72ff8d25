use log::{warn, Level};
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Body attribute the page can use to override any of the defaults below.
pub const OVERRIDE_ATTRIBUTE: &str = "data-interactions";

pub const LAUNCH_DELAY_MS: u32 = 900;
pub const OVERLAY_LINGER_MS: u32 = 400;
pub const DEFAULT_OVERLAY_MESSAGE: &str = "Engaging hyperdrive…";

/// Element ids the controller looks up in the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HookIds {
    pub year: String,
    pub overlay: String,
    pub overlay_text: String,
    pub backdrop: String,
}

impl Default for HookIds {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            overlay: "overlay".to_string(),
            overlay_text: "overlayText".to_string(),
            backdrop: "space-backdrop".to_string(),
        }
    }
}

/// One modal dialog: its root element id plus explicitly identified
/// trigger elements. `data-modal="<id>"` triggers are found by scanning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModalSpec {
    pub id: String,
    #[serde(default)]
    pub open_triggers: Vec<String>,
    #[serde(default)]
    pub close_triggers: Vec<String>,
}

impl ModalSpec {
    pub fn new(id: &str, open_triggers: &[&str], close_triggers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            open_triggers: open_triggers.iter().map(|s| s.to_string()).collect(),
            close_triggers: close_triggers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub hooks: HookIds,
    pub launch_delay_ms: u32,
    pub overlay_linger_ms: u32,
    pub default_message: String,
    pub active_class: String,
    pub warp_class: String,
    /// Selector for in-modal elements that close their modal.
    pub close_selector: String,
    pub modals: Vec<ModalSpec>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hooks: HookIds::default(),
            launch_delay_ms: LAUNCH_DELAY_MS,
            overlay_linger_ms: OVERLAY_LINGER_MS,
            default_message: DEFAULT_OVERLAY_MESSAGE.to_string(),
            active_class: "hyperdrive-active".to_string(),
            warp_class: "warp".to_string(),
            close_selector: ".modal-back, .btn".to_string(),
            modals: vec![
                ModalSpec::new("modal-coming-soon", &["watch-coming-soon"], &["modal-close"]),
                ModalSpec::new("modal-docs", &["docs-btn", "docs-open"], &[]),
            ],
        }
    }
}

impl InteractionConfig {
    /// Builds the config from the optional JSON override found on the page.
    /// A malformed override is logged and the defaults are used instead.
    pub fn from_override(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<InteractionConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring invalid {} override: {}", OVERRIDE_ATTRIBUTE, e);
                Self::default()
            }
        }
    }

    pub fn modal(&self, id: &str) -> Option<&ModalSpec> {
        self.modals.iter().find(|modal| modal.id == id)
    }
}
