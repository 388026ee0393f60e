//! Distance-matrix response decoding.
//!
//! The wire format is a matrix (`rows[]` of `elements[]`), but a watch is
//! always exactly one origin/destination pair, so only `rows[0].elements[0]`
//! is read. `duration.value` is the one field the alert decision needs and
//! is therefore required; the human-readable texts default to empty strings
//! when absent, matching what ends up in the notification body.

use serde::Deserialize;

use routewatch_core::DurationResult;

use crate::error::RoutingError;

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixElement {
    duration: Option<ValueText>,
    distance: Option<TextOnly>,
    duration_in_traffic: Option<TextOnly>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValueText {
    value: Option<i64>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextOnly {
    text: Option<String>,
}

impl MatrixResponse {
    /// Extract `rows[0].elements[0]` into a [`DurationResult`].
    pub(crate) fn into_result(self) -> Result<DurationResult, RoutingError> {
        let element = self
            .rows
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::Malformed("missing rows[0]".to_string()))?
            .elements
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::Malformed("missing elements[0]".to_string()))?;

        let duration = element
            .duration
            .ok_or_else(|| RoutingError::Malformed("missing duration".to_string()))?;
        let duration_seconds = duration
            .value
            .ok_or_else(|| RoutingError::Malformed("missing duration.value".to_string()))?;

        Ok(DurationResult {
            duration_seconds,
            duration_text: duration.text.unwrap_or_default(),
            distance_text: element
                .distance
                .and_then(|d| d.text)
                .unwrap_or_default(),
            duration_in_traffic_text: element
                .duration_in_traffic
                .and_then(|d| d.text)
                .unwrap_or_default(),
        })
    }
}
