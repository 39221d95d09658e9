//! The prediction form controller: prefill, submit, render, reset.

use crate::chart::{ChartBackend, ProbabilityChart};
use crate::config::ControllerConfig;
use crate::response::{interpret_reply, PredictionResult};
use crate::schema::ExampleRecord;
use crate::transport::Transport;
use crate::utils::{badge_class, format_percent};
use crate::view::{Badge, ControlId, FormView, ProbabilityRow, Region};
use crate::{extract_record, fill_record, PredictError};
use log::{debug, info, warn};
use std::cell::{Cell, RefCell};

/// How a call to [`PredictionController::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered(PredictionResult),
    Failed(PredictError),
    /// Another submission was still in flight.
    Ignored,
}

pub struct PredictionController<V, T, B: ChartBackend> {
    view: V,
    transport: T,
    chart: RefCell<ProbabilityChart<B>>,
    config: ControllerConfig,
    in_flight: Cell<bool>,
}

// Restores the trigger control and clears the in-flight flag however the
// submission ends.
struct SubmitGuard<'a, V: FormView> {
    view: &'a V,
    control: ControlId,
    original_label: String,
    in_flight: &'a Cell<bool>,
}

impl<V: FormView> Drop for SubmitGuard<'_, V> {
    fn drop(&mut self) {
        self.view
            .set_control_state(self.control, false, &self.original_label);
        self.in_flight.set(false);
    }
}

impl<V, T, B> PredictionController<V, T, B>
where
    V: FormView,
    T: Transport,
    B: ChartBackend,
{
    pub fn new(view: V, transport: T, chart_backend: B, config: ControllerConfig) -> Self {
        Self {
            view,
            transport,
            chart: RefCell::new(ProbabilityChart::new(chart_backend)),
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Run `f` against the chart owner.
    pub fn with_chart<R>(&self, f: impl FnOnce(&ProbabilityChart<B>) -> R) -> R {
        let chart = self.chart.borrow();
        f(&*chart)
    }

    /// Prefill the form with a canned record and bring it into view.
    pub fn fill_example(&self, example: ExampleRecord) {
        let written = fill_record(&self.view, example.values());
        debug!("Prefilled {} fields from {:?} example", written, example);
        self.view.scroll_to(Region::Form);
    }

    /// Clear every input and hide the results.
    pub fn reset(&self) {
        self.view.clear_fields();
        self.view.set_result_visible(false);
    }

    /// Validate the form, send it, and render the answer or the error.
    ///
    /// `trigger` is disabled for the duration and restored on every exit.
    pub async fn submit(&self, trigger: ControlId) -> SubmitOutcome {
        if self.in_flight.replace(true) {
            debug!("Submission already in flight, ignoring {:?}", trigger);
            return SubmitOutcome::Ignored;
        }

        let _guard = SubmitGuard {
            view: &self.view,
            control: trigger,
            original_label: self.view.control_label(trigger),
            in_flight: &self.in_flight,
        };
        self.view
            .set_control_state(trigger, true, &self.config.loading_label);

        match self.request_prediction().await {
            Ok(result) => {
                info!("Prediction received: {}", result.prediction);
                self.display_results(&result);
                self.view.scroll_to(Region::Results);
                SubmitOutcome::Rendered(result)
            }
            Err(err) => {
                warn!("Prediction failed: {}", err);
                self.show_error(&err.to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn request_prediction(&self) -> Result<PredictionResult, PredictError> {
        let record = extract_record(&self.view)?;
        let body = serde_json::to_string(&record).map_err(|e| PredictError::Encode(e.to_string()))?;
        let reply = self
            .transport
            .post_json(&self.config.endpoint, body)
            .await?;
        debug!("Reply status {}", reply.status);
        interpret_reply(&reply)
    }

    /// Badge, probability rows and chart for a successful prediction.
    pub fn display_results(&self, result: &PredictionResult) {
        self.view.clear_alert();

        let badge = Badge {
            text: result.prediction.clone(),
            class: badge_class(&result.prediction),
        };
        let rows = result
            .probabilities
            .iter()
            .map(|(label, pct)| ProbabilityRow {
                label: label.to_string(),
                value: format_percent(pct),
            })
            .collect();
        self.view.show_prediction(badge, rows);

        self.chart.borrow_mut().render(&result.probabilities);
        self.view.set_result_visible(true);
    }

    /// Replace the alert with `message` and bring the results into view.
    pub fn show_error(&self, message: &str) {
        self.view.clear_alert();
        self.view.show_alert(message);
        self.view.set_result_visible(true);
        self.view.scroll_to(Region::Results);
    }
}
