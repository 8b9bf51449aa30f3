//! Call payloads
//!
//! Shapes returned by the call endpoints: a patient's call history, the
//! response to initiating a call, and a call's transcript with its summary
//! and metered costs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::CallDuration;
use crate::costs::{aggregate, estimate_usage, CallCost, CostBreakdown, ServiceCosts, UsageTotals};

/// Call lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Pending,
    Initiated,
    Ringing,
    Answered,
    InProgress,
    Completed,
    Failed,
}

impl CallStatus {
    /// Whether the call can no longer change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, CallStatus::Completed | CallStatus::Failed)
    }
}

/// One entry of a patient's call history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub call_id: i64,
    pub call_sid: String,
    pub status: CallStatus,
    #[serde(default)]
    pub duration: CallDuration,
    /// Total metered cost stored for the call
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
}

/// Response of the patient call history endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientCallHistory {
    pub patient_id: i64,
    pub patient_name: String,
    pub total_calls: usize,
    #[serde(default)]
    pub calls: Vec<CallRecord>,
}

/// Totals over a call history
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_calls: usize,
    pub completed_calls: usize,
    pub total_duration: CallDuration,
    pub total_cost: f64,
}

impl PatientCallHistory {
    pub fn cost_summary(&self) -> HistorySummary {
        self.calls
            .iter()
            .fold(HistorySummary::default(), |mut summary, call| {
                summary.total_calls += 1;
                if call.status == CallStatus::Completed {
                    summary.completed_calls += 1;
                }
                summary.total_duration = CallDuration::from_seconds(
                    summary.total_duration.seconds() + call.duration.seconds(),
                );
                summary.total_cost += call.cost;
                summary
            })
    }
}

/// Response of the initiate-call endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallInitiation {
    pub status: String,
    pub message: String,
    pub call_id: i64,
    pub call_uuid: Uuid,
    pub patient_name: String,
    pub phone_number: String,
}

/// Speaker of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    #[serde(other)]
    Other,
}

/// One message in a call conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Stored conversation of a completed call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub conversation: Vec<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_ended_at: Option<String>,
}

/// Overall tone of a call, as classified by the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Concerned,
    Neutral,
}

/// AI-generated summary of a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSummary {
    pub sentiment: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub health_concerns: Vec<String>,
    #[serde(default)]
    pub follow_up_needed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_reason: Option<String>,
}

impl CallSummary {
    pub fn tone(&self) -> Sentiment {
        match self.sentiment.to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "concerned" => Sentiment::Concerned,
            _ => Sentiment::Neutral,
        }
    }
}

/// A stored summary: structured when it parsed as JSON, raw text otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryPayload {
    Structured(CallSummary),
    Text(String),
}

/// Response of the call transcript endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptDetail {
    pub call_id: i64,
    #[serde(default)]
    pub transcript: Conversation,
    #[serde(default)]
    pub summary: Option<SummaryPayload>,
    #[serde(default)]
    pub costs: ServiceCosts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TranscriptDetail {
    /// Duration estimated from the number of conversation turns
    ///
    /// The transcript endpoint does not carry the real call duration.
    pub fn estimated_duration(&self) -> CallDuration {
        CallDuration::estimate_from_turns(self.transcript.conversation.len())
    }

    /// Metered costs combined with the estimated duration
    pub fn call_cost(&self) -> CallCost {
        self.costs.with_duration(self.estimated_duration())
    }

    pub fn cost_breakdown(&self, telephony_rate_per_minute: f64) -> CostBreakdown {
        aggregate(&self.call_cost(), telephony_rate_per_minute)
    }

    /// Usage estimated from the stored conversation
    pub fn usage(&self) -> UsageTotals {
        estimate_usage(&self.transcript.conversation)
    }

    pub fn structured_summary(&self) -> Option<&CallSummary> {
        match &self.summary {
            Some(SummaryPayload::Structured(summary)) => Some(summary),
            _ => None,
        }
    }
}
