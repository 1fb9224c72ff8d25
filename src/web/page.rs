use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::interactions::page::{NavigationError, Page};

/// [`Page`] backed by the live browser document.
pub struct WebPage {
    window: Option<Window>,
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self {
            window: web_sys::window(),
            document,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

fn blocked(e: wasm_bindgen::JsValue) -> NavigationError {
    NavigationError::Blocked(format!("{:?}", e))
}

impl Page for WebPage {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn aria_hidden(&self, id: &str) -> Option<bool> {
        self.element(id)?
            .get_attribute("aria-hidden")
            .map(|value| value == "true")
    }

    fn set_aria_hidden(&self, id: &str, hidden: bool) {
        if let Some(element) = self.element(id) {
            let _ = element.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_class(&self, id: &str, class: &str, enabled: bool) {
        if let Some(element) = self.element(id) {
            let classes = element.class_list();
            let _ = if enabled {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
        }
    }

    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        let window = self.window.as_ref().ok_or(NavigationError::NoWindow)?;
        // With noopener the returned handle is always null, so only an
        // exception counts as failure.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(blocked)
    }

    fn open_via_transient_link(&self, url: &str) -> Result<(), NavigationError> {
        let link = self
            .document
            .create_element("a")
            .map_err(blocked)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| NavigationError::Blocked("could not create a link".to_string()))?;
        link.set_href(url);
        link.set_target("_blank");
        link.set_rel("noopener noreferrer");

        let body = self
            .document
            .body()
            .ok_or_else(|| NavigationError::Blocked("document has no body".to_string()))?;
        body.append_child(&link).map_err(blocked)?;
        link.click();
        link.remove();
        Ok(())
    }
}
