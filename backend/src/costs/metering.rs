//! Service metering
//!
//! Turns raw call usage (duration, tokens, synthesized characters) into the
//! per-service costs stored with each transcript. Every metered cost is
//! rounded to four decimal places, matching what the dashboard displays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::{telephony_cost, CallCost};
use super::rates::PricingRates;
use crate::core::CallDuration;
use crate::models::call::{ChatMessage, Role};

/// Approximate characters per language model token
pub const CHARS_PER_TOKEN: u64 = 4;

/// Usage counters gathered from one call's conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageTotals {
    pub llm_input_tokens: u64,
    pub llm_output_tokens: u64,
    pub tts_characters: u64,
}

/// Rough token count for a piece of text
///
/// One token per four characters, and never less than one token per message.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() as u64 / CHARS_PER_TOKEN).max(1)
}

/// Estimate usage from a conversation transcript
///
/// - `system` and `user` messages are language model input
/// - `assistant` messages are language model output, and every character
///   of them is synthesized to speech
/// - other roles are ignored
///
/// # Example
/// ```
/// use followup_core_rs::costs::estimate_usage;
/// use followup_core_rs::models::{ChatMessage, Role};
///
/// let usage = estimate_usage(&[
///     ChatMessage::new(Role::System, "You are a hospital assistant."),
///     ChatMessage::new(Role::Assistant, "Hello! How are you feeling?"),
///     ChatMessage::new(Role::User, "Better."),
/// ]);
/// assert_eq!(usage.llm_input_tokens, 7 + 1);
/// assert_eq!(usage.llm_output_tokens, 6);
/// assert_eq!(usage.tts_characters, 27);
/// ```
pub fn estimate_usage(messages: &[ChatMessage]) -> UsageTotals {
    let mut usage = UsageTotals::default();

    for message in messages {
        let tokens = estimate_tokens(&message.content);
        match message.role {
            Role::System | Role::User => usage.llm_input_tokens += tokens,
            Role::Assistant => {
                usage.llm_output_tokens += tokens;
                usage.tts_characters += message.content.chars().count() as u64;
            }
            Role::Other => {}
        }
    }

    usage
}

/// Round a monetary amount to four decimal places
pub fn round_cost(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

/// Speech-to-text cost, billed per fractional minute of audio
pub fn stt_cost(duration: CallDuration, rates: &PricingRates) -> f64 {
    round_cost(duration.fractional_minutes() * rates.stt_per_minute)
}

/// Language model cost for the given token counts
pub fn llm_cost(input_tokens: u64, output_tokens: u64, rates: &PricingRates) -> f64 {
    let input = (input_tokens as f64 / 1_000_000.0) * rates.llm_input_per_million_tokens;
    let output = (output_tokens as f64 / 1_000_000.0) * rates.llm_output_per_million_tokens;
    round_cost(input + output)
}

/// Text-to-speech cost for the given number of synthesized characters
pub fn tts_cost(characters: u64, rates: &PricingRates) -> f64 {
    round_cost((characters as f64 / 1000.0) * rates.tts_per_thousand_chars)
}

/// Telephony cost as stored by the backend (rounded)
///
/// Display code should use [`telephony_cost`] instead, which keeps full
/// precision.
pub fn metered_telephony_cost(duration: CallDuration, rates: &PricingRates) -> f64 {
    round_cost(telephony_cost(duration.seconds(), rates.telephony_per_minute))
}

/// Meter the three separately billed services for one call
pub fn meter_call(usage: &UsageTotals, duration: CallDuration, rates: &PricingRates) -> CallCost {
    let cost = CallCost::new(
        stt_cost(duration, rates),
        llm_cost(usage.llm_input_tokens, usage.llm_output_tokens, rates),
        tts_cost(usage.tts_characters, rates),
        duration.seconds(),
    );

    debug!(
        duration_secs = duration.seconds(),
        input_tokens = usage.llm_input_tokens,
        output_tokens = usage.llm_output_tokens,
        tts_chars = usage.tts_characters,
        stt = cost.speech_to_text,
        llm = cost.language_model,
        tts = cost.text_to_speech,
        "Metered call"
    );

    cost
}

/// Total stored as a call's `cost`: the four metered costs, rounded
pub fn metered_total(usage: &UsageTotals, duration: CallDuration, rates: &PricingRates) -> f64 {
    let cost = meter_call(usage, duration, rates);
    round_cost(
        cost.speech_to_text
            + cost.language_model
            + cost.text_to_speech
            + metered_telephony_cost(duration, rates),
    )
}
