//! Python bindings
//!
//! Lets the Python call backend share the question codec and cost model
//! instead of re-implementing them.

pub mod types;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::costs::{self, CallCost};
use crate::models::PhoneNumber;
use crate::questions;

/// Encode questions into the `custom_questions` text form
#[pyfunction]
pub fn encode_questions(questions: Vec<String>) -> String {
    questions::encode(&questions)
}

/// Decode a `custom_questions` field into a list of questions
#[pyfunction]
pub fn decode_questions(text: &str) -> Vec<String> {
    questions::decode(text)
}

/// Telephony cost for a call, billed on fractional minutes
#[pyfunction]
pub fn telephony_cost(duration_seconds: u64, rate_per_minute: f64) -> f64 {
    costs::telephony_cost(duration_seconds, rate_per_minute)
}

/// Aggregate one call's costs into a breakdown dict
///
/// `rates` may override any pricing key; only `telephony_per_minute` is used.
#[pyfunction]
#[pyo3(signature = (stt, llm, tts, duration_seconds, rates = None))]
pub fn aggregate_cost<'py>(
    py: Python<'py>,
    stt: f64,
    llm: f64,
    tts: f64,
    duration_seconds: u64,
    rates: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let rates = match rates {
        Some(dict) => types::parse_pricing_rates(dict)?,
        None => costs::PricingRates::default(),
    };

    let cost = CallCost::new(stt, llm, tts, duration_seconds);
    let breakdown = costs::aggregate(&cost, rates.telephony_per_minute);
    types::breakdown_to_dict(py, &breakdown)
}

/// Validate a patient phone number, raising ValueError when malformed
#[pyfunction]
pub fn validate_phone(raw: &str) -> PyResult<String> {
    PhoneNumber::parse(raw)
        .map(String::from)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Register every binding on the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_questions, m)?)?;
    m.add_function(wrap_pyfunction!(decode_questions, m)?)?;
    m.add_function(wrap_pyfunction!(telephony_cost, m)?)?;
    m.add_function(wrap_pyfunction!(aggregate_cost, m)?)?;
    m.add_function(wrap_pyfunction!(validate_phone, m)?)?;
    Ok(())
}
