//! Tests for patient and call payloads
//!
//! Tests cover:
//! - Phone number validation
//! - Patient records carrying encoded questions
//! - Call history, initiation, and transcript payloads

use followup_core_rs::models::{
    CallInitiation, CallStatus, PatientCallHistory, Sentiment, SummaryPayload, TranscriptDetail,
};
use followup_core_rs::{
    Language, Patient, PatientDraft, PatientError, PatientType, PhoneNumber, QuestionError,
    QuestionList,
};
use serde_json::json;

/// Helper to create a patient record as the API returns it
fn patient_json(custom_questions: serde_json::Value) -> serde_json::Value {
    json!({
        "id": 7,
        "name": "Asha Verma",
        "phone": "+919876543210",
        "age": 54,
        "language": "english",
        "custom_questions": custom_questions,
        "patient_type": "discharged",
        "created_at": "2025-10-01T09:30:00"
    })
}

// ============================================================================
// Phone numbers
// ============================================================================

#[test]
fn test_valid_phone_number() {
    let phone = PhoneNumber::parse("+919876543210").unwrap();
    assert_eq!(phone.as_str(), "+919876543210");
    assert_eq!(phone.to_string(), "+919876543210");
}

#[test]
fn test_invalid_phone_numbers() {
    for raw in [
        "9876543210",
        "+9198765432101",
        "+91987654321",
        "+929876543210",
        "+91-9876543210",
    ] {
        assert_eq!(
            PhoneNumber::parse(raw),
            Err(PatientError::InvalidPhoneFormat(raw.to_string())),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn test_patient_with_invalid_phone_fails_to_deserialize() {
    let mut value = patient_json(json!(null));
    value["phone"] = json!("12345");
    assert!(serde_json::from_value::<Patient>(value).is_err());
}

// ============================================================================
// Patients
// ============================================================================

#[test]
fn test_patient_decodes_questions() {
    let patient: Patient =
        serde_json::from_value(patient_json(json!("1. Any fever?\n2. Any pain?"))).unwrap();

    assert_eq!(patient.patient_type, PatientType::Discharged);
    assert_eq!(patient.language, Language::English);
    assert_eq!(patient.questions(), vec!["Any fever?", "Any pain?"]);
    assert_eq!(patient.question_list().unwrap().len(), 2);
}

#[test]
fn test_patient_without_questions() {
    let patient: Patient = serde_json::from_value(patient_json(json!(null))).unwrap();
    assert!(patient.questions().is_empty());
    assert!(patient.question_list().unwrap().is_empty());
}

#[test]
fn test_patient_over_cap_questions_detected() {
    let text: String = (1..=11)
        .map(|i| format!("{}. Q{}", i, i))
        .collect::<Vec<_>>()
        .join("\n");
    let patient: Patient = serde_json::from_value(patient_json(json!(text))).unwrap();

    // Forgiving read still returns everything
    assert_eq!(patient.questions().len(), 11);
    assert!(matches!(
        patient.question_list(),
        Err(QuestionError::TooManyQuestions { count: 11, .. })
    ));
}

#[test]
fn test_set_questions_encodes() {
    let mut patient: Patient = serde_json::from_value(patient_json(json!(""))).unwrap();
    let list = QuestionList::new(["Any fever?", "Any dizziness?"]).unwrap();

    patient.set_questions(&list);

    assert_eq!(
        patient.custom_questions.as_deref(),
        Some("1. Any fever?\n2. Any dizziness?")
    );
    let json = serde_json::to_value(&patient).unwrap();
    assert_eq!(json["custom_questions"], "1. Any fever?\n2. Any dizziness?");
}

#[test]
fn test_language_accepts_capitalized_and_serializes_lowercase() {
    let mut value = patient_json(json!(null));
    value["language"] = json!("Hindi");
    let patient: Patient = serde_json::from_value(value).unwrap();

    assert_eq!(patient.language, Language::Hindi);
    assert_eq!(serde_json::to_value(&patient).unwrap()["language"], "hindi");
}

#[test]
fn test_draft_validation() {
    let draft = PatientDraft::new("Asha Verma", "+919876543210")
        .with_age(54)
        .with_language(Language::Hindi);
    assert_eq!(draft.validate().unwrap().national_number(), "9876543210");

    let bad_phone = PatientDraft::new("Asha Verma", "09876543210");
    assert!(matches!(
        bad_phone.validate(),
        Err(PatientError::InvalidPhoneFormat(_))
    ));

    let blank_name = PatientDraft::new("   ", "+919876543210");
    assert_eq!(blank_name.validate(), Err(PatientError::EmptyName));
}

#[test]
fn test_draft_request_body() {
    let list = QuestionList::new(["Any fever?"]).unwrap();
    let draft = PatientDraft::new("Ravi", "+919123456789")
        .with_patient_type(PatientType::Opd)
        .with_questions(&list);

    let body = serde_json::to_value(&draft).unwrap();
    assert_eq!(body["custom_questions"], "1. Any fever?");
    assert_eq!(body["language"], "english");
    assert_eq!(body["patient_type"], "opd");
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_call_history_summary() {
    let history: PatientCallHistory = serde_json::from_value(json!({
        "patient_id": 7,
        "patient_name": "Asha Verma",
        "total_calls": 3,
        "calls": [
            {"call_id": 3, "call_sid": "c3", "status": "completed", "duration": 95, "cost": 0.0412},
            {"call_id": 2, "call_sid": "c2", "status": "failed", "duration": 0, "cost": 0.0},
            {"call_id": 1, "call_sid": "c1", "status": "completed", "duration": 180, "cost": 0.088,
             "started_at": "2025-10-01T10:00:00", "ended_at": "2025-10-01T10:03:00"}
        ]
    }))
    .unwrap();

    let summary = history.cost_summary();
    assert_eq!(summary.total_calls, 3);
    assert_eq!(summary.completed_calls, 2);
    assert_eq!(summary.total_duration.to_string(), "4m 35s");
    assert!((summary.total_cost - 0.1292).abs() < 1e-9);
    assert_eq!(history.calls[1].status, CallStatus::Failed);
}

#[test]
fn test_call_initiation_parses_uuid() {
    let response: CallInitiation = serde_json::from_value(json!({
        "status": "initiated",
        "message": "Call initiated",
        "call_id": 12,
        "call_uuid": "3f2b8c1e-7a4d-4e2b-9c61-0d5e8f7a1b23",
        "patient_name": "Asha Verma",
        "phone_number": "+919876543210"
    }))
    .unwrap();

    assert_eq!(
        response.call_uuid.to_string(),
        "3f2b8c1e-7a4d-4e2b-9c61-0d5e8f7a1b23"
    );
}

#[test]
fn test_transcript_detail_breakdown() {
    let conversation: Vec<_> = (0..12)
        .map(|i| {
            let role = if i % 2 == 0 { "assistant" } else { "user" };
            json!({"role": role, "content": "Thank you, I am fine."})
        })
        .collect();

    let detail: TranscriptDetail = serde_json::from_value(json!({
        "call_id": 12,
        "transcript": {"conversation": conversation, "call_ended_at": "2025-10-01T10:03:00"},
        "summary": {
            "sentiment": "positive",
            "key_points": ["Recovering well"],
            "health_concerns": [],
            "follow_up_needed": false
        },
        "costs": {"stt": 0.012, "llm": 0.034, "tts": 0.021}
    }))
    .unwrap();

    assert_eq!(detail.estimated_duration().seconds(), 180);

    let breakdown = detail.cost_breakdown(0.007);
    assert!((breakdown.total - 0.088).abs() < 1e-9);

    let summary = detail.structured_summary().unwrap();
    assert_eq!(summary.tone(), Sentiment::Positive);
    assert!(!summary.follow_up_needed);

    let usage = detail.usage();
    assert_eq!(usage.tts_characters, 6 * 21);
}

#[test]
fn test_transcript_with_raw_summary_and_empty_transcript() {
    let detail: TranscriptDetail = serde_json::from_value(json!({
        "call_id": 4,
        "transcript": {},
        "summary": "Patient did not answer.",
        "costs": {"stt": 0.0, "llm": 0.0, "tts": 0.0}
    }))
    .unwrap();

    assert_eq!(
        detail.summary,
        Some(SummaryPayload::Text("Patient did not answer.".to_string()))
    );
    assert!(detail.structured_summary().is_none());

    let breakdown = detail.cost_breakdown(0.007);
    assert_eq!(breakdown.total, 0.0);
    assert_eq!(breakdown.fraction_sum(), 0.0);
}
