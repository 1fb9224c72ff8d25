//! Browser binding: `web-sys` page access, DOM listeners and timers.

pub mod page;
pub mod wire;

use std::rc::Rc;

use log::{info, warn};
use web_sys::Document;

use crate::config::{InteractionConfig, OVERRIDE_ATTRIBUTE};
use crate::interactions::markup::SetupReport;
use crate::interactions::{year, PageController};
use page::WebPage;
use wire::WebController;

/// Entry point: finds the document and attaches everything to it.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("No document available, page interactions disabled");
        return;
    };
    attach(document);
}

/// Wires the controller onto `document`. Called once per page load.
pub fn attach(document: Document) -> Rc<WebController> {
    let raw_config = document
        .body()
        .and_then(|body| body.get_attribute(OVERRIDE_ATTRIBUTE));
    let config = InteractionConfig::from_override(raw_config.as_deref());

    let controller = Rc::new(PageController::new(WebPage::new(document), config));
    let mut report = SetupReport::default();
    controller.initialize(year::current_year(), &mut report);
    wire::wire_all(&controller, &mut report);
    report.log();
    info!("Page interactions ready");
    controller
}
