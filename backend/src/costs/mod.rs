//! Call Cost Model
//!
//! This module provides:
//! - Pricing configuration (`PricingRates`)
//! - Metering of raw usage into per-service costs (`metering`)
//! - Aggregation into a proportional breakdown (`aggregate`)

pub mod aggregate;
pub mod metering;
pub mod rates;

// Re-exports
pub use aggregate::{
    aggregate, format_usd, telephony_cost, CallCost, CostAccumulator, CostBreakdown, CostService,
    LineItem, ServiceCosts,
};
pub use metering::{
    estimate_tokens, estimate_usage, llm_cost, meter_call, metered_telephony_cost, metered_total,
    round_cost, stt_cost, tts_cost, UsageTotals,
};
pub use rates::{PricingError, PricingRates};
