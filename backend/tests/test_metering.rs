//! Integration tests for service metering
//!
//! Tests cover:
//! - Usage estimation from a conversation transcript
//! - Per-service metered costs with four-decimal rounding
//! - Stored call total

use followup_core_rs::costs::{
    estimate_usage, llm_cost, meter_call, metered_telephony_cost, metered_total, stt_cost,
    tts_cost, UsageTotals,
};
use followup_core_rs::models::{ChatMessage, Role};
use followup_core_rs::{CallDuration, PricingRates};

/// Helper to build a short follow-up conversation
fn sample_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, "You are a hospital assistant calling Asha."),
        ChatMessage::new(Role::Assistant, "Hello Asha, how are you feeling today?"),
        ChatMessage::new(Role::User, "Much better, thank you."),
        ChatMessage::new(Role::Assistant, "Any fever since discharge?"),
        ChatMessage::new(Role::User, "No."),
    ]
}

#[test]
fn test_estimate_usage_splits_by_role() {
    let usage = estimate_usage(&sample_conversation());

    // system: 42 chars -> 10, user: 23 -> 5, user: 3 -> 1 (minimum)
    assert_eq!(usage.llm_input_tokens, 10 + 5 + 1);
    // assistant: 38 -> 9, 26 -> 6
    assert_eq!(usage.llm_output_tokens, 9 + 6);
    assert_eq!(usage.tts_characters, 38 + 26);
}

#[test]
fn test_estimate_usage_empty_conversation() {
    assert_eq!(estimate_usage(&[]), UsageTotals::default());
}

#[test]
fn test_stt_cost_per_fractional_minute() {
    let rates = PricingRates::default();
    // 3 minutes * 0.0043 = 0.0129
    assert_eq!(stt_cost(CallDuration::from_seconds(180), &rates), 0.0129);
    // 20 seconds * 0.0043/min = 0.001433 -> 0.0014 (rounded)
    assert_eq!(stt_cost(CallDuration::from_seconds(20), &rates), 0.0014);
}

#[test]
fn test_llm_cost_uses_separate_input_output_prices() {
    let rates = PricingRates::default();
    // 1M input tokens at 0.15 + 1M output tokens at 0.60
    assert_eq!(llm_cost(1_000_000, 1_000_000, &rates), 0.75);
    // Tiny usage rounds to zero
    assert_eq!(llm_cost(10, 10, &rates), 0.0);
}

#[test]
fn test_tts_cost_per_thousand_characters() {
    let rates = PricingRates::default();
    assert_eq!(tts_cost(1000, &rates), 0.03);
    assert_eq!(tts_cost(500, &rates), 0.015);
}

#[test]
fn test_metered_telephony_rounds_to_four_places() {
    let rates = PricingRates::default();
    // 100s -> 1.6667 min * 0.007 = 0.011667 -> 0.0117
    assert_eq!(
        metered_telephony_cost(CallDuration::from_seconds(100), &rates),
        0.0117
    );
}

#[test]
fn test_meter_call_carries_duration() {
    let rates = PricingRates::default();
    let usage = UsageTotals {
        llm_input_tokens: 2_000,
        llm_output_tokens: 1_000,
        tts_characters: 4_000,
    };

    let cost = meter_call(&usage, CallDuration::from_seconds(120), &rates);

    assert_eq!(cost.duration_seconds, 120);
    assert_eq!(cost.speech_to_text, 0.0086);
    // 0.0003 + 0.0006
    assert_eq!(cost.language_model, 0.0009);
    assert_eq!(cost.text_to_speech, 0.12);
}

#[test]
fn test_metered_total_includes_telephony() {
    let rates = PricingRates::default();
    let usage = UsageTotals {
        llm_input_tokens: 2_000,
        llm_output_tokens: 1_000,
        tts_characters: 4_000,
    };

    let total = metered_total(&usage, CallDuration::from_seconds(120), &rates);
    // 0.0086 + 0.0009 + 0.12 + 0.014
    assert!((total - 0.1435).abs() < 1e-9);
}

#[test]
fn test_custom_rates_are_applied() {
    let rates = PricingRates {
        tts_per_thousand_chars: 0.1,
        ..PricingRates::default()
    };
    assert_eq!(tts_cost(1000, &rates), 0.1);
}
