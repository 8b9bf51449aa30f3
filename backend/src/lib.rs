//! Follow-up Call Core
//!
//! Data transformations behind the hospital follow-up call dashboard.
//!
//! # Architecture
//!
//! - **core**: Call duration handling
//! - **questions**: Custom question codec, capped list, and editor rules
//! - **costs**: Pricing, metering, and per-call cost aggregation
//! - **models**: Patient and call payloads exchanged with the API
//!
//! # Critical Invariants
//!
//! 1. `decode(encode(list)) == list` for every normalized question list
//! 2. A `QuestionList` never exceeds 10 questions
//! 3. A cost breakdown's line items sum to its total; a zero total yields
//!    zero fractions, never NaN
//! 4. Every function here is pure: no I/O, no shared state

// Module declarations
pub mod core;
pub mod costs;
pub mod models;
pub mod questions;

// Re-exports for convenience
pub use crate::core::duration::CallDuration;
pub use costs::{
    aggregate, telephony_cost, CallCost, CostAccumulator, CostBreakdown, CostService, LineItem,
    PricingError, PricingRates,
};
pub use models::{
    call::{CallRecord, CallStatus, TranscriptDetail},
    patient::{Language, Patient, PatientDraft, PatientError, PatientType, PhoneNumber},
};
pub use questions::{decode, encode, QuestionEditor, QuestionError, QuestionList, MAX_QUESTIONS};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn followup_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
