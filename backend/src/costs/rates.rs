//! Pricing Rates
//!
//! Unit prices for each service involved in a follow-up call.
//! All monetary values are decimal currency units (USD), not cents.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised when a pricing configuration is unusable
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Rate '{name}' must be a finite, non-negative number (got {value})")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Telephony rate must be positive (got {0})")]
    NonPositiveTelephonyRate(f64),
}

/// Pricing Configuration
///
/// Defaults reflect the current deployment's provider prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRates {
    /// Speech-to-text price per minute of audio
    pub stt_per_minute: f64,

    /// Language model price per one million input tokens
    pub llm_input_per_million_tokens: f64,

    /// Language model price per one million output tokens
    pub llm_output_per_million_tokens: f64,

    /// Text-to-speech price per one thousand synthesized characters
    pub tts_per_thousand_chars: f64,

    /// Telephony price per minute of call time
    ///
    /// Billed on fractional minutes: a 90 second call costs 1.5 × this rate.
    pub telephony_per_minute: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            stt_per_minute: 0.0043,
            llm_input_per_million_tokens: 0.15,
            llm_output_per_million_tokens: 0.60,
            tts_per_thousand_chars: 0.03,
            telephony_per_minute: 0.007,
        }
    }
}

impl PricingRates {
    /// Check every rate before the configuration is used
    ///
    /// # Errors
    /// - [`PricingError::InvalidRate`] for negative, NaN or infinite rates
    /// - [`PricingError::NonPositiveTelephonyRate`] for a zero telephony rate
    pub fn validate(&self) -> Result<(), PricingError> {
        let rates = [
            ("stt_per_minute", self.stt_per_minute),
            ("llm_input_per_million_tokens", self.llm_input_per_million_tokens),
            ("llm_output_per_million_tokens", self.llm_output_per_million_tokens),
            ("tts_per_thousand_chars", self.tts_per_thousand_chars),
            ("telephony_per_minute", self.telephony_per_minute),
        ];

        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                warn!(rate = name, value, "Invalid pricing rate");
                return Err(PricingError::InvalidRate { name, value });
            }
        }

        if self.telephony_per_minute <= 0.0 {
            warn!(value = self.telephony_per_minute, "Telephony rate is not positive");
            return Err(PricingError::NonPositiveTelephonyRate(
                self.telephony_per_minute,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_rates_default() {
        let rates = PricingRates::default();
        assert_eq!(rates.stt_per_minute, 0.0043);
        assert_eq!(rates.llm_input_per_million_tokens, 0.15);
        assert_eq!(rates.llm_output_per_million_tokens, 0.60);
        assert_eq!(rates.tts_per_thousand_chars, 0.03);
        assert_eq!(rates.telephony_per_minute, 0.007);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let rates = PricingRates {
            tts_per_thousand_chars: -0.01,
            ..PricingRates::default()
        };
        assert_eq!(
            rates.validate(),
            Err(PricingError::InvalidRate {
                name: "tts_per_thousand_chars",
                value: -0.01
            })
        );
    }

    #[test]
    fn test_zero_telephony_rate_rejected() {
        let rates = PricingRates {
            telephony_per_minute: 0.0,
            ..PricingRates::default()
        };
        assert_eq!(
            rates.validate(),
            Err(PricingError::NonPositiveTelephonyRate(0.0))
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let rates: PricingRates =
            serde_json::from_str(r#"{"telephony_per_minute": 0.01}"#).unwrap();
        assert_eq!(rates.telephony_per_minute, 0.01);
        assert_eq!(rates.stt_per_minute, 0.0043);
    }

    #[test]
    fn test_pricing_rates_serialize_deserialize() {
        let rates = PricingRates::default();
        let json = serde_json::to_string(&rates).unwrap();
        let restored: PricingRates = serde_json::from_str(&json).unwrap();
        assert_eq!(rates, restored);
    }
}
