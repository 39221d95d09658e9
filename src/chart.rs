//! Probability bar chart.
//!
//! The chart configuration is built in Rust and handed to Chart.js through
//! the helper functions in `chart_helpers.js`. [`ProbabilityChart`] owns the
//! one live chart instance and destroys it before drawing the next one.

use crate::response::Probabilities;
use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    /// A live Chart.js instance.
    pub type ChartInstance;

    #[wasm_bindgen(catch, js_name = createProbabilityChart)]
    fn create_probability_chart(canvas_id: &str, config: JsValue) -> Result<ChartInstance, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartInstance);
}

pub const DATASET_LABEL: &str = "Probability (%)";
pub const AXIS_MAX: f64 = 100.0;

const FALLBACK_FILL: &str = "rgba(107, 114, 128, 0.8)";
const FALLBACK_BORDER: &str = "rgb(107, 114, 128)";

/// Fill and border colour for an outcome label.
pub fn label_colors(label: &str) -> (&'static str, &'static str) {
    match label {
        "Dropout" => ("rgba(239, 68, 68, 0.8)", "rgb(239, 68, 68)"),
        "Enrolled" => ("rgba(245, 158, 11, 0.8)", "rgb(245, 158, 11)"),
        "Graduate" => ("rgba(16, 185, 129, 0.8)", "rgb(16, 185, 129)"),
        _ => (FALLBACK_FILL, FALLBACK_BORDER),
    }
}

// Chart.js configuration, field names as Chart.js expects them. The tick
// callback is a JS function and is attached by the helper module.

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    pub border_color: Vec<&'static str>,
    pub border_width: u32,
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub index_axis: &'static str,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub max: f64,
}

impl ChartConfig {
    /// Horizontal bar chart with one bar per label, x axis clamped to 0..=100.
    pub fn horizontal_bars(probabilities: &Probabilities) -> Self {
        let labels = probabilities.labels();
        let (background_color, border_color): (Vec<_>, Vec<_>) =
            labels.iter().map(|l| label_colors(l)).unzip();

        Self {
            kind: "bar",
            data: ChartData {
                datasets: vec![Dataset {
                    label: DATASET_LABEL,
                    data: probabilities.values(),
                    background_color,
                    border_color,
                    border_width: 2,
                    border_radius: 8,
                }],
                labels,
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                index_axis: "y",
                plugins: Plugins {
                    legend: Legend { display: false },
                },
                scales: Scales {
                    x: Axis {
                        begin_at_zero: true,
                        max: AXIS_MAX,
                    },
                },
            },
        }
    }
}

/// Something that can draw and release a chart.
pub trait ChartBackend {
    type Handle;

    fn create(&self, config: &ChartConfig) -> Result<Self::Handle, String>;
    fn destroy(&self, handle: Self::Handle);
}

/// Chart.js on a canvas element.
#[derive(Debug, Clone)]
pub struct ChartJs {
    canvas_id: &'static str,
}

impl ChartJs {
    pub fn new(canvas_id: &'static str) -> Self {
        Self { canvas_id }
    }
}

impl ChartBackend for ChartJs {
    type Handle = ChartInstance;

    fn create(&self, config: &ChartConfig) -> Result<ChartInstance, String> {
        let js_config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        create_probability_chart(self.canvas_id, js_config)
            .map_err(|e| crate::transport::js_error_message(&e))
    }

    fn destroy(&self, handle: ChartInstance) {
        handle.destroy();
    }
}

/// Owner of the single live chart.
pub struct ProbabilityChart<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> ProbabilityChart<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Destroy the previous chart, then draw `probabilities`.
    pub fn render(&mut self, probabilities: &Probabilities) {
        if let Some(old) = self.current.take() {
            debug!("Destroying previous probability chart");
            self.backend.destroy(old);
        }

        let config = ChartConfig::horizontal_bars(probabilities);
        match self.backend.create(&config) {
            Ok(handle) => self.current = Some(handle),
            Err(e) => warn!("Failed to render probability chart: {}", e),
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {
        created: Cell<usize>,
        destroyed: Cell<usize>,
        fail: bool,
    }

    impl ChartBackend for Counting {
        type Handle = usize;

        fn create(&self, _config: &ChartConfig) -> Result<usize, String> {
            if self.fail {
                return Err("canvas missing".into());
            }
            self.created.set(self.created.get() + 1);
            Ok(self.created.get())
        }

        fn destroy(&self, _handle: usize) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    fn sample() -> Probabilities {
        [("Dropout", 80.0), ("Enrolled", 15.0), ("Mystery", 5.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn config_matches_chart_js_shape() {
        let config = ChartConfig::horizontal_bars(&sample());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["options"]["indexAxis"], "y");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(json["options"]["scales"]["x"]["beginAtZero"], true);
        assert_eq!(json["options"]["scales"]["x"]["max"], 100.0);
        assert_eq!(json["data"]["labels"][2], "Mystery");
        assert_eq!(json["data"]["datasets"][0]["label"], DATASET_LABEL);
        assert_eq!(json["data"]["datasets"][0]["data"][0], 80.0);
        assert_eq!(json["data"]["datasets"][0]["borderWidth"], 2);
    }

    #[test]
    fn colors_follow_label_table() {
        let config = ChartConfig::horizontal_bars(&sample());
        let dataset = &config.data.datasets[0];
        assert_eq!(
            dataset.background_color,
            ["rgba(239, 68, 68, 0.8)", "rgba(245, 158, 11, 0.8)", FALLBACK_FILL]
        );
        assert_eq!(
            dataset.border_color,
            ["rgb(239, 68, 68)", "rgb(245, 158, 11)", FALLBACK_BORDER]
        );
    }

    #[test]
    fn render_replaces_previous_chart() {
        let mut chart = ProbabilityChart::new(Counting::default());
        for _ in 0..4 {
            chart.render(&sample());
        }
        assert!(chart.is_live());
        assert_eq!(chart.backend().created.get(), 4);
        assert_eq!(chart.backend().destroyed.get(), 3);
    }

    #[test]
    fn failed_render_leaves_no_chart() {
        let mut chart = ProbabilityChart::new(Counting {
            fail: true,
            ..Default::default()
        });
        chart.render(&sample());
        assert!(!chart.is_live());
    }
}
