use chrono::Datelike;

use super::page::Page;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Fills the footer year element, if the page has one.
pub fn stamp_year<P: Page>(page: &P, element_id: &str, year: i32) {
    if page.has_element(element_id) {
        page.set_text(element_id, &year.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::testing::FakePage;

    #[test]
    fn writes_year_text() {
        let page = FakePage::with_elements(&["year"]);
        stamp_year(&page, "year", 2031);
        assert_eq!(page.text("year").as_deref(), Some("2031"));
    }

    #[test]
    fn missing_element_is_skipped() {
        let page = FakePage::with_elements(&[]);
        stamp_year(&page, "year", 2031);
        assert!(page.writes().is_empty());
    }

    #[test]
    fn clock_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
