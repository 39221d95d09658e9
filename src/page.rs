//! In-memory page state.
//!
//! `PageModel` is what the Yew components render from. Wrapped in a
//! `RefCell` it is a complete [`FormView`], which is also how the tests drive
//! the controller without a browser.

use crate::config::SUBMIT_LABEL;
use crate::schema::FEATURE_COLUMNS;
use crate::view::{Badge, ControlId, FormView, ProbabilityRow, Region, SUBMIT_BUTTON};
use std::cell::RefCell;

/// Label and enabled state of one control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
}

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "main-nav is-active"
        } else {
            "main-nav"
        }
    }

    pub fn header_class(&self) -> &'static str {
        if self.open {
            "header nav-open"
        } else {
            "header"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    fields: Vec<(&'static str, String)>,
    controls: Vec<(ControlId, ControlState)>,
    pub result_visible: bool,
    pub badge: Option<Badge>,
    pub rows: Vec<ProbabilityRow>,
    pub alert: Option<String>,
    pub nav: NavState,
    /// Last scroll request, kept for inspection.
    pub last_scroll: Option<Region>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PageModel {
    /// A page with one empty input per schema field and the submit button.
    pub fn new() -> Self {
        Self::with_fields(&FEATURE_COLUMNS)
    }

    pub fn with_fields(names: &[&'static str]) -> Self {
        Self {
            fields: names.iter().map(|&n| (n, String::new())).collect(),
            controls: vec![(
                SUBMIT_BUTTON,
                ControlState {
                    label: SUBMIT_LABEL.to_string(),
                    disabled: false,
                },
            )],
            result_visible: false,
            badge: None,
            rows: Vec::new(),
            alert: None,
            nav: NavState::default(),
            last_scroll: None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Update an input's text. Returns `false` if the page has no such input.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn control(&self, id: ControlId) -> Option<&ControlState> {
        self.controls.iter().find(|(c, _)| *c == id).map(|(_, s)| s)
    }

    fn control_mut(&mut self, id: ControlId) -> &mut ControlState {
        if let Some(pos) = self.controls.iter().position(|(c, _)| *c == id) {
            return &mut self.controls[pos].1;
        }
        self.controls.push((
            id,
            ControlState {
                label: String::new(),
                disabled: false,
            },
        ));
        let last = self.controls.len() - 1;
        &mut self.controls[last].1
    }
}

impl FormView for RefCell<PageModel> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.borrow().field(name).map(str::to_string)
    }

    fn set_field_value(&self, name: &str, value: &str) -> bool {
        self.borrow_mut().set_field(name, value)
    }

    fn clear_fields(&self) {
        for (_, value) in self.borrow_mut().fields.iter_mut() {
            value.clear();
        }
    }

    fn control_label(&self, control: ControlId) -> String {
        self.borrow()
            .control(control)
            .map(|s| s.label.clone())
            .unwrap_or_default()
    }

    fn set_control_state(&self, control: ControlId, disabled: bool, label: &str) {
        let mut page = self.borrow_mut();
        let state = page.control_mut(control);
        state.disabled = disabled;
        state.label = label.to_string();
    }

    fn clear_alert(&self) {
        self.borrow_mut().alert = None;
    }

    fn show_alert(&self, message: &str) {
        self.borrow_mut().alert = Some(message.to_string());
    }

    fn show_prediction(&self, badge: Badge, rows: Vec<ProbabilityRow>) {
        let mut page = self.borrow_mut();
        page.badge = Some(badge);
        page.rows = rows;
    }

    fn set_result_visible(&self, visible: bool) {
        self.borrow_mut().result_visible = visible;
    }

    fn scroll_to(&self, region: Region) {
        self.borrow_mut().last_scroll = Some(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_has_one_blank_input_per_feature() {
        let page = PageModel::new();
        assert_eq!(page.fields().count(), FEATURE_COLUMNS.len());
        assert!(page.fields().all(|(_, v)| v.is_empty()));
        assert_eq!(page.control(SUBMIT_BUTTON).unwrap().label, SUBMIT_LABEL);
    }

    #[test]
    fn clear_fields_blanks_every_input() {
        let page = RefCell::new(PageModel::new());
        page.set_field_value("GDP", "1.74");
        page.set_field_value("Course", "171");
        page.clear_fields();
        assert!(page.borrow().fields().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn unknown_control_is_created_on_first_write() {
        let page = RefCell::new(PageModel::new());
        let other = ControlId("secondaryButton");
        assert_eq!(page.control_label(other), "");
        page.set_control_state(other, true, "Busy");
        assert_eq!(
            page.borrow().control(other),
            Some(&ControlState {
                label: "Busy".into(),
                disabled: true
            })
        );
    }

    #[test]
    fn nav_toggle_flips_and_link_click_closes() {
        let mut nav = NavState::default();
        assert_eq!(nav.menu_class(), "main-nav");
        nav.toggle();
        assert_eq!(nav.menu_class(), "main-nav is-active");
        assert_eq!(nav.header_class(), "header nav-open");
        nav.close();
        assert!(!nav.open);
        nav.close();
        assert_eq!(nav.header_class(), "header");
    }
}
