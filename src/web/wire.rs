use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, KeyboardEvent, MouseEvent, NodeList};

use super::page::WebPage;
use crate::config::ModalSpec;
use crate::interactions::markup::{ExternalLink, ModalTrigger, SetupReport};
use crate::interactions::page::Scheduled;
use crate::interactions::PageController;

pub type WebController = PageController<WebPage>;

/// Attaches every listener. Listeners live as long as the page, so their
/// closures are leaked on purpose.
pub fn wire_all(controller: &Rc<WebController>, report: &mut SetupReport) {
    let document = controller.page().document().clone();
    wire_anchors(controller, &document, report);
    wire_external_links(controller, &document, report);
    wire_overlay(controller, &document);
    wire_modals(controller, &document, report);
    wire_keyboard(controller, &document);
}

/// Hands deferred work to a browser timer; follow-ups are chained the same way.
pub fn schedule(controller: &Rc<WebController>, scheduled: Scheduled) {
    let controller = Rc::clone(controller);
    let Scheduled { delay_ms, task } = scheduled;
    Timeout::new(delay_ms, move || {
        if let Some(next) = controller.run(task) {
            schedule(&controller, next);
        }
    })
    .forget();
}

fn on_click(target: &EventTarget, handler: impl FnMut(MouseEvent) + 'static) {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    let _ = target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    callback.forget();
}

/// True when the click landed on the listening element itself rather than
/// bubbling up from a child.
fn clicked_directly(e: &MouseEvent) -> bool {
    match (e.target(), e.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

fn collect_elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    list.map(|list| {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    })
    .unwrap_or_default()
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    collect_elements(document.query_selector_all(selector))
}

fn select_within(root: &Element, selector: &str) -> Vec<Element> {
    collect_elements(root.query_selector_all(selector))
}

fn wire_anchors(controller: &Rc<WebController>, document: &Document, report: &mut SetupReport) {
    for anchor in select_all(document, "a[href^=\"#\"]") {
        let controller = Rc::clone(controller);
        on_click(&anchor, move |e: MouseEvent| {
            e.prevent_default();
            let href = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"));
            if let Some(href) = href {
                controller.on_anchor_click(&href);
            }
        });
        report.anchors += 1;
    }
}

fn wire_external_links(
    controller: &Rc<WebController>,
    document: &Document,
    report: &mut SetupReport,
) {
    for element in select_all(document, "[data-external]") {
        let parsed = ExternalLink::from_attributes(
            element.get_attribute("data-href"),
            element.get_attribute("data-label"),
        );
        let Some(link) = report.record(parsed) else {
            continue;
        };
        let controller = Rc::clone(controller);
        on_click(&element, move |e: MouseEvent| {
            e.prevent_default();
            let next = controller.on_external_click(&link);
            schedule(&controller, next);
        });
        report.external_links += 1;
    }
}

fn wire_overlay(controller: &Rc<WebController>, document: &Document) {
    let Some(overlay) = document.get_element_by_id(controller.overlay().overlay_id()) else {
        return;
    };
    let controller = Rc::clone(controller);
    on_click(&overlay, move |e: MouseEvent| {
        controller.on_overlay_click(clicked_directly(&e));
    });
}

fn wire_modals(controller: &Rc<WebController>, document: &Document, report: &mut SetupReport) {
    let registered = controller.modals().ids();
    for id in &registered {
        let spec = controller.config().modal(id);
        if let (Some(spec), Some(root)) = (spec, document.get_element_by_id(id)) {
            wire_modal(controller, document, &root, spec);
        }
    }

    for element in select_all(document, "[data-modal]") {
        let parsed = ModalTrigger::parse(element.get_attribute("data-modal"), &registered);
        let Some(trigger) = report.record(parsed) else {
            continue;
        };
        let controller = Rc::clone(controller);
        on_click(&element, move |e: MouseEvent| {
            e.prevent_default();
            controller.open_modal(&trigger.modal);
        });
        report.modal_triggers += 1;
    }
}

fn wire_modal(controller: &Rc<WebController>, document: &Document, root: &Element, spec: &ModalSpec) {
    for id in &spec.open_triggers {
        let Some(trigger) = document.get_element_by_id(id) else {
            debug!("Open trigger {} for {} not in page", id, spec.id);
            continue;
        };
        let controller = Rc::clone(controller);
        let modal = spec.id.clone();
        on_click(&trigger, move |e: MouseEvent| {
            e.prevent_default();
            controller.open_modal(&modal);
        });
    }

    let explicit_close = spec
        .close_triggers
        .iter()
        .filter_map(|id| document.get_element_by_id(id));
    let in_modal_close = select_within(root, &controller.config().close_selector);
    for button in explicit_close.chain(in_modal_close) {
        let controller = Rc::clone(controller);
        let modal = spec.id.clone();
        on_click(&button, move |_| controller.close_modal(&modal));
    }

    let controller = Rc::clone(controller);
    let modal = spec.id.clone();
    on_click(root, move |e: MouseEvent| {
        controller.on_modal_click(&modal, clicked_directly(&e));
    });
}

fn wire_keyboard(controller: &Rc<WebController>, document: &Document) {
    let controller = Rc::clone(controller);
    let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        controller.on_key(&e.key());
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
    callback.forget();
}
