use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

pub mod chart;
pub mod config;
pub mod controller;
pub mod page;
pub mod response;
pub mod schema;
pub mod transport;
pub mod utils;
pub mod view;

pub use controller::{PredictionController, SubmitOutcome};
pub use response::{PredictionResult, Probabilities};
pub use view::FormView;

use schema::FEATURE_COLUMNS;
use utils::{format_field_value, parse_feature_value};

/// One student's feature values, in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: Vec<(String, f64)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

// Serialized as a flat JSON object keeping insertion order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Client-side validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required(String),
    NotANumber(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "Field \"{}\" is required", field),
            ValidationError::NotANumber(field) => {
                write!(f, "Field \"{}\" must be a valid number", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Everything that can go wrong between reading the form and rendering a result.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    Validation(ValidationError),
    /// The request body could not be serialized.
    Encode(String),
    /// The request never produced a response (rejected fetch, offline, CORS).
    Transport(String),
    /// The response body was not the JSON we expect.
    Decode(String),
    /// The server answered with `success: false` or a non-2xx status.
    Rejected(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Validation(err) => write!(f, "{}", err),
            PredictError::Encode(msg) => write!(f, "Could not encode request: {}", msg),
            PredictError::Transport(msg) => write!(f, "{}", msg),
            PredictError::Decode(msg) => write!(f, "Invalid response from server: {}", msg),
            PredictError::Rejected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for PredictError {
    fn from(err: ValidationError) -> Self {
        PredictError::Validation(err)
    }
}

/// Read every schema field from the view and coerce it to a number.
///
/// Stops at the first invalid field; a partial record is never returned.
/// An input missing from the page counts as blank.
pub fn extract_record<V: FormView + ?Sized>(view: &V) -> Result<Record, ValidationError> {
    let mut record = Record::new();
    for &col in FEATURE_COLUMNS.iter() {
        let raw = view.field_value(col).unwrap_or_default();
        let value = parse_feature_value(&raw, col)?;
        record.insert(col, value);
    }
    Ok(record)
}

/// Copy `values` into the matching inputs. Names without an input are skipped.
///
/// Returns how many inputs were written.
pub fn fill_record<V: FormView + ?Sized>(view: &V, values: &[(&str, f64)]) -> usize {
    let mut written = 0;
    for &(name, value) in values {
        if view.set_field_value(name, &format_field_value(value)) {
            written += 1;
        } else {
            debug!("No input for field '{}', skipping", name);
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageModel;
    use std::cell::RefCell;

    fn filled_page() -> RefCell<PageModel> {
        let page = RefCell::new(PageModel::new());
        fill_record(&page, schema::ExampleRecord::Graduate.values());
        page
    }

    #[test]
    fn record_serializes_in_insertion_order() {
        let mut record = Record::new();
        record.insert("b", 2.0);
        record.insert("a", 1.5);
        record.insert("b", 3.0);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"b":3.0,"a":1.5}"#);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some(1.5));
    }

    #[test]
    fn extract_reads_every_field() {
        let page = filled_page();
        let record = extract_record(&page).unwrap();
        assert_eq!(record.len(), FEATURE_COLUMNS.len());
        assert_eq!(record.get("Course"), Some(9254.0));
        assert_eq!(record.get("Inflation rate"), Some(-0.3));
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, FEATURE_COLUMNS.to_vec());
    }

    #[test]
    fn extract_stops_at_first_invalid_field() {
        let page = filled_page();
        page.borrow_mut().set_field("Course", "");
        page.borrow_mut().set_field("GDP", "abc");
        assert_eq!(
            extract_record(&page),
            Err(ValidationError::Required("Course".into()))
        );
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::Required("Debtor".into()).to_string(),
            "Field \"Debtor\" is required"
        );
        assert_eq!(
            PredictError::from(ValidationError::NotANumber("GDP".into())).to_string(),
            "Field \"GDP\" must be a valid number"
        );
    }

    #[test]
    fn fill_skips_unknown_names() {
        let page = RefCell::new(PageModel::new());
        let written = fill_record(&page, &[("Course", 171.0), ("Shoe size", 44.0)]);
        assert_eq!(written, 1);
        assert_eq!(page.borrow().field("Course"), Some("171"));
        assert_eq!(page.borrow().field("Shoe size"), None);
    }
}
