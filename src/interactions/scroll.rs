use log::debug;

use super::page::Page;

/// The id an in-page link points at, or `None` for a bare `#`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handles a click on an `a[href^="#"]`. The default jump is always
/// suppressed by the caller; unknown targets are simply swallowed.
pub fn scroll_to_fragment<P: Page>(page: &P, href: &str) -> bool {
    let Some(id) = fragment_target(href) else {
        return false;
    };
    let scrolled = page.scroll_to(id);
    if !scrolled {
        debug!("No element with id {:?} to scroll to", id);
    }
    scrolled
}
