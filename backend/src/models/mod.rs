//! Boundary types exchanged with the dashboard API

pub mod call;
pub mod patient;

// Re-exports
pub use call::{
    CallInitiation, CallRecord, CallStatus, CallSummary, ChatMessage, Conversation,
    HistorySummary, PatientCallHistory, Role, Sentiment, SummaryPayload, TranscriptDetail,
};
pub use patient::{Language, Patient, PatientDraft, PatientError, PatientType, PhoneNumber};
