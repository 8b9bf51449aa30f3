//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict).

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::costs::{CostBreakdown, LineItem, PricingRates};

/// Extract a field with a default value if missing.
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Convert Python dict to PricingRates
///
/// Missing keys keep their default price.
///
/// # Errors
///
/// Returns PyErr if:
/// - Type conversions fail
/// - A rate is negative, non-finite, or the telephony rate is not positive
pub fn parse_pricing_rates(py_rates: &Bound<'_, PyDict>) -> PyResult<PricingRates> {
    let defaults = PricingRates::default();

    let rates = PricingRates {
        stt_per_minute: extract_with_default(py_rates, "stt_per_minute", defaults.stt_per_minute)?,
        llm_input_per_million_tokens: extract_with_default(
            py_rates,
            "llm_input_per_million_tokens",
            defaults.llm_input_per_million_tokens,
        )?,
        llm_output_per_million_tokens: extract_with_default(
            py_rates,
            "llm_output_per_million_tokens",
            defaults.llm_output_per_million_tokens,
        )?,
        tts_per_thousand_chars: extract_with_default(
            py_rates,
            "tts_per_thousand_chars",
            defaults.tts_per_thousand_chars,
        )?,
        telephony_per_minute: extract_with_default(
            py_rates,
            "telephony_per_minute",
            defaults.telephony_per_minute,
        )?,
    };

    rates
        .validate()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    Ok(rates)
}

fn line_item_to_dict<'py>(py: Python<'py>, item: &LineItem) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("amount", item.amount)?;
    dict.set_item("fraction", item.fraction)?;
    Ok(dict)
}

/// Convert CostBreakdown to Python dict
///
/// Keys match the JSON form: `stt_cost`, `llm_cost`, `tts_cost`,
/// `telephony_cost` (each `{amount, fraction}`) and `total`.
pub fn breakdown_to_dict<'py>(
    py: Python<'py>,
    breakdown: &CostBreakdown,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("stt_cost", line_item_to_dict(py, &breakdown.stt_cost)?)?;
    dict.set_item("llm_cost", line_item_to_dict(py, &breakdown.llm_cost)?)?;
    dict.set_item("tts_cost", line_item_to_dict(py, &breakdown.tts_cost)?)?;
    dict.set_item("telephony_cost", line_item_to_dict(py, &breakdown.telephony_cost)?)?;
    dict.set_item("total", breakdown.total)?;
    Ok(dict)
}
