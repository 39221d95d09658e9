//! Rendering surface the controller talks to.
//!
//! The controller never touches the DOM directly; it goes through [`FormView`],
//! so the whole submission flow can run against an in-memory page in tests.

/// Identifies a clickable control (the element id on the page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub &'static str);

/// The main submit button.
pub const SUBMIT_BUTTON: ControlId = ControlId("submitButton");

/// Scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Form,
    Results,
}

/// Text and class list of the prediction badge.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub text: String,
    pub class: String,
}

/// One line of the probability list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub label: String,
    pub value: String,
}

/// Capabilities the controller needs from the page.
///
/// Methods take `&self`; implementations use interior mutability since the
/// view is shared with UI callbacks.
pub trait FormView {
    /// Current raw text of the input named `name`, `None` if no such input.
    fn field_value(&self, name: &str) -> Option<String>;
    /// Write `value` into the input named `name`. Returns `false` if absent.
    fn set_field_value(&self, name: &str, value: &str) -> bool;
    fn clear_fields(&self);

    fn control_label(&self, control: ControlId) -> String;
    fn set_control_state(&self, control: ControlId, disabled: bool, label: &str);

    fn clear_alert(&self);
    fn show_alert(&self, message: &str);
    fn show_prediction(&self, badge: Badge, rows: Vec<ProbabilityRow>);
    fn set_result_visible(&self, visible: bool);
    fn scroll_to(&self, region: Region);
}
