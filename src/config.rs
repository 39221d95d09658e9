//! Application-level configuration constants.

// Backend
pub const PREDICT_ENDPOINT: &str = "/predict";
pub const FALLBACK_ERROR_MESSAGE: &str = "Prediction failed";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Submit control
pub const SUBMIT_LABEL: &str = "Predict";
pub const LOADING_LABEL: &str = "Processing...";

// Element ids the page binds to
pub const FORM_ID: &str = "predictionForm";
pub const INPUT_SECTION_ID: &str = "inputSection";
pub const RESULT_SECTION_ID: &str = "resultSection";
pub const PREDICTION_BADGE_ID: &str = "predictionBadge";
pub const PROBABILITY_LIST_ID: &str = "probabilityList";
pub const ALERT_CONTAINER_ID: &str = "alertContainer";
pub const CHART_CANVAS_ID: &str = "probabilityChart";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "mainNav";

/// Runtime knobs for the prediction controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub endpoint: String,
    pub loading_label: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: PREDICT_ENDPOINT.to_string(),
            loading_label: LOADING_LABEL.to_string(),
        }
    }
}
