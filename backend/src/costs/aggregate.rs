//! Per-call cost aggregation
//!
//! Combines the three metered service costs with the telephony cost derived
//! from call duration, and expresses each as a share of the total.
//!
//! # Invariants
//!
//! 1. `total == stt + llm + tts + telephony`, summed in that order
//! 2. Fractions sum to 1.0 whenever `total > 0`
//! 3. A zero total yields all-zero fractions, never NaN

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::CallDuration;

/// Telephony cost for a call, billed on fractional minutes
///
/// # Example
/// ```
/// use followup_core_rs::costs::telephony_cost;
///
/// // 90 seconds at 0.01/min is 1.5 minutes, not a rounded-up 2
/// assert!((telephony_cost(90, 0.01) - 0.015).abs() < 1e-12);
/// ```
pub fn telephony_cost(duration_seconds: u64, rate_per_minute: f64) -> f64 {
    CallDuration::from_seconds(duration_seconds).fractional_minutes() * rate_per_minute
}

/// Metered service costs as returned with a call transcript
///
/// Wire shape: `{"stt": 0.012, "llm": 0.034, "tts": 0.021}`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceCosts {
    #[serde(default)]
    pub stt: f64,
    #[serde(default)]
    pub llm: f64,
    #[serde(default)]
    pub tts: f64,
}

impl ServiceCosts {
    /// Attach the call duration needed to derive telephony cost
    pub fn with_duration(self, duration: CallDuration) -> CallCost {
        CallCost {
            speech_to_text: self.stt,
            language_model: self.llm,
            text_to_speech: self.tts,
            duration_seconds: duration.seconds(),
        }
    }
}

/// Metered costs of one call plus its duration
///
/// Telephony cost is not stored; it is always derived from
/// `duration_seconds` when the call is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CallCost {
    #[serde(alias = "stt")]
    pub speech_to_text: f64,
    #[serde(alias = "llm")]
    pub language_model: f64,
    #[serde(alias = "tts")]
    pub text_to_speech: f64,
    #[serde(default, alias = "duration")]
    pub duration_seconds: u64,
}

impl CallCost {
    pub fn new(
        speech_to_text: f64,
        language_model: f64,
        text_to_speech: f64,
        duration_seconds: u64,
    ) -> Self {
        Self {
            speech_to_text,
            language_model,
            text_to_speech,
            duration_seconds,
        }
    }

    pub fn duration(&self) -> CallDuration {
        CallDuration::from_seconds(self.duration_seconds)
    }
}

/// The four services a call is charged for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostService {
    SpeechToText,
    LanguageModel,
    TextToSpeech,
    Telephony,
}

impl CostService {
    /// Display order used by the call detail view
    pub const ALL: [CostService; 4] = [
        CostService::SpeechToText,
        CostService::LanguageModel,
        CostService::TextToSpeech,
        CostService::Telephony,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostService::SpeechToText => "Speech-to-Text",
            CostService::LanguageModel => "AI Model",
            CostService::TextToSpeech => "Text-to-Speech",
            CostService::Telephony => "Telephony",
        }
    }
}

impl fmt::Display for CostService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One service's cost and its share of the call total
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    pub amount: f64,
    /// `amount / total`, or 0.0 when the total is zero
    pub fraction: f64,
}

impl LineItem {
    /// Share of the total as a percentage (0–100)
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Display-ready decomposition of a call's total cost
///
/// Built on demand from a [`CallCost`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub stt_cost: LineItem,
    pub llm_cost: LineItem,
    pub tts_cost: LineItem,
    pub telephony_cost: LineItem,
    pub total: f64,
}

impl CostBreakdown {
    /// Build a breakdown from four line-item amounts
    pub fn from_amounts(stt: f64, llm: f64, tts: f64, telephony: f64) -> Self {
        let total = stt + llm + tts + telephony;
        let item = |amount: f64| LineItem {
            amount,
            fraction: if total == 0.0 { 0.0 } else { amount / total },
        };

        Self {
            stt_cost: item(stt),
            llm_cost: item(llm),
            tts_cost: item(tts),
            telephony_cost: item(telephony),
            total,
        }
    }

    /// Line item for a given service
    pub fn get(&self, service: CostService) -> LineItem {
        match service {
            CostService::SpeechToText => self.stt_cost,
            CostService::LanguageModel => self.llm_cost,
            CostService::TextToSpeech => self.tts_cost,
            CostService::Telephony => self.telephony_cost,
        }
    }

    /// All line items in display order
    pub fn line_items(&self) -> [(CostService, LineItem); 4] {
        CostService::ALL.map(|service| (service, self.get(service)))
    }

    /// Sum of the four fractions (1.0 for any positive total)
    pub fn fraction_sum(&self) -> f64 {
        self.line_items().iter().map(|(_, item)| item.fraction).sum()
    }

    /// Whether the call cost nothing at all
    pub fn is_degenerate(&self) -> bool {
        self.total == 0.0
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (service, item) in self.line_items() {
            writeln!(
                f,
                "{:<16} {:>10} {:>6.1}%",
                service.label(),
                format_usd(item.amount),
                item.percent()
            )?;
        }
        write!(f, "{:<16} {:>10}", "Total", format_usd(self.total))
    }
}

/// Aggregate one call's costs into a breakdown
///
/// # Example
/// ```
/// use followup_core_rs::costs::{aggregate, CallCost};
///
/// let cost = CallCost::new(0.0120, 0.0340, 0.0210, 180);
/// let breakdown = aggregate(&cost, 0.007);
///
/// assert!((breakdown.telephony_cost.amount - 0.021).abs() < 1e-9);
/// assert!((breakdown.total - 0.088).abs() < 1e-9);
/// ```
pub fn aggregate(cost: &CallCost, rate_per_minute: f64) -> CostBreakdown {
    CostBreakdown::from_amounts(
        cost.speech_to_text,
        cost.language_model,
        cost.text_to_speech,
        telephony_cost(cost.duration_seconds, rate_per_minute),
    )
}

/// Format a monetary amount the way the dashboard shows it (`$0.0880`)
pub fn format_usd(amount: f64) -> String {
    format!("${:.4}", amount)
}

/// Running totals over many calls, e.g. a patient's call history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostAccumulator {
    /// Total speech-to-text cost
    pub total_stt_cost: f64,

    /// Total language model cost
    pub total_llm_cost: f64,

    /// Total text-to-speech cost
    pub total_tts_cost: f64,

    /// Total telephony cost
    pub total_telephony_cost: f64,

    /// Number of calls added
    pub call_count: usize,
}

impl CostAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call's breakdown
    pub fn add(&mut self, breakdown: &CostBreakdown) {
        self.total_stt_cost += breakdown.stt_cost.amount;
        self.total_llm_cost += breakdown.llm_cost.amount;
        self.total_tts_cost += breakdown.tts_cost.amount;
        self.total_telephony_cost += breakdown.telephony_cost.amount;
        self.call_count += 1;
    }

    /// Total cost across all calls
    pub fn total(&self) -> f64 {
        self.total_stt_cost + self.total_llm_cost + self.total_tts_cost + self.total_telephony_cost
    }

    /// Mean cost per call, or 0.0 before any call is added
    pub fn average_per_call(&self) -> f64 {
        if self.call_count == 0 {
            0.0
        } else {
            self.total() / self.call_count as f64
        }
    }

    /// Combined breakdown across all calls
    pub fn breakdown(&self) -> CostBreakdown {
        CostBreakdown::from_amounts(
            self.total_stt_cost,
            self.total_llm_cost,
            self.total_tts_cost,
            self.total_telephony_cost,
        )
    }
}

impl<'a> Extend<&'a CostBreakdown> for CostAccumulator {
    fn extend<T: IntoIterator<Item = &'a CostBreakdown>>(&mut self, iter: T) {
        for breakdown in iter {
            self.add(breakdown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total() {
        let breakdown = CostBreakdown::from_amounts(1.0, 2.0, 3.0, 4.0);
        assert_eq!(breakdown.total, 10.0);
        assert_eq!(breakdown.get(CostService::TextToSpeech).fraction, 0.3);
    }

    #[test]
    fn test_format_usd_four_decimals() {
        assert_eq!(format_usd(0.088), "$0.0880");
        assert_eq!(format_usd(0.0), "$0.0000");
    }

    #[test]
    fn test_call_cost_accepts_wire_names() {
        let cost: CallCost =
            serde_json::from_str(r#"{"stt": 0.01, "llm": 0.02, "tts": 0.03, "duration": 60}"#)
                .unwrap();
        assert_eq!(cost, CallCost::new(0.01, 0.02, 0.03, 60));
    }

    #[test]
    fn test_display_lists_every_service() {
        let text = CostBreakdown::from_amounts(0.012, 0.034, 0.021, 0.021).to_string();
        for service in CostService::ALL {
            assert!(text.contains(service.label()));
        }
        assert!(text.ends_with("$0.0880"));
    }

    #[test]
    fn test_empty_accumulator() {
        let acc = CostAccumulator::new();
        assert_eq!(acc.average_per_call(), 0.0);
        assert!(acc.breakdown().is_degenerate());
    }
}
