//! Decoding of the `/predict` response body.

use crate::config::FALLBACK_ERROR_MESSAGE;
use crate::transport::HttpReply;
use crate::PredictError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Per-label percentages in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities(Vec<(String, f64)>);

impl Probabilities {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(l, p)| (l.as_str(), *p))
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|(l, _)| l.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|&(_, p)| p).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for Probabilities {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        Probabilities(iter.into_iter().map(|(l, p)| (l.into(), p)).collect())
    }
}

struct ProbabilitiesVisitor;

impl<'de> Visitor<'de> for ProbabilitiesVisitor {
    type Value = Probabilities;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of label to percentage")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(3));
        while let Some((label, pct)) = access.next_entry::<String, f64>()? {
            entries.push((label, pct));
        }
        Ok(Probabilities(entries))
    }
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProbabilitiesVisitor)
    }
}

/// Body of a `/predict` reply, success or failure.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    pub prediction: Option<String>,
    pub probabilities: Option<Probabilities>,
    pub error: Option<String>,
}

/// A successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub prediction: String,
    pub probabilities: Probabilities,
}

/// Turn a raw HTTP reply into a result.
///
/// The body is parsed as JSON whatever the status. A non-2xx status and
/// `success: false` are treated the same way.
pub fn interpret_reply(reply: &HttpReply) -> Result<PredictionResult, PredictError> {
    let body: PredictResponse =
        serde_json::from_str(&reply.body).map_err(|e| PredictError::Decode(e.to_string()))?;

    if !reply.is_success() || !body.success {
        let message = body
            .error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        return Err(PredictError::Rejected(message));
    }

    let prediction = body
        .prediction
        .ok_or_else(|| PredictError::Decode("missing field `prediction`".to_string()))?;
    let probabilities = body
        .probabilities
        .ok_or_else(|| PredictError::Decode("missing field `probabilities`".to_string()))?;

    Ok(PredictionResult {
        prediction,
        probabilities,
    })
}
