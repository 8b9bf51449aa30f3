//! Patient model
//!
//! Mirrors the patient record exchanged with the dashboard API. The
//! `custom_questions` field holds the numbered-text encoding produced by
//! [`crate::questions::encode`].
//!
//! Phone numbers are Indian mobile numbers in E.164 form: `+91` followed by
//! exactly ten digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::questions::{self, QuestionError, QuestionList};

/// Country prefix every patient phone number must carry
pub const PHONE_PREFIX: &str = "+91";

/// Digits required after [`PHONE_PREFIX`]
pub const PHONE_DIGITS: usize = 10;

/// Errors rejected before a patient record is persisted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatientError {
    #[error("Phone number must be in format +91XXXXXXXXXX (10 digits), got '{0}'")]
    InvalidPhoneFormat(String),

    #[error("Patient name must not be blank")]
    EmptyName,

    #[error("Unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Unknown patient type '{0}'")]
    UnknownPatientType(String),

    #[error(transparent)]
    Questions(#[from] QuestionError),
}

/// Validated patient phone number
///
/// # Example
/// ```
/// use followup_core_rs::PhoneNumber;
///
/// let phone: PhoneNumber = "+919876543210".parse().unwrap();
/// assert_eq!(phone.national_number(), "9876543210");
///
/// assert!("9876543210".parse::<PhoneNumber>().is_err());
/// assert!("+91987654321".parse::<PhoneNumber>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, PatientError> {
        let valid = raw
            .strip_prefix(PHONE_PREFIX)
            .is_some_and(|rest| {
                rest.len() == PHONE_DIGITS && rest.bytes().all(|b| b.is_ascii_digit())
            });

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(PatientError::InvalidPhoneFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ten digits after the country prefix
    pub fn national_number(&self) -> &str {
        &self.0[PHONE_PREFIX.len()..]
    }
}

impl FromStr for PhoneNumber {
    type Err = PatientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PatientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Language the call is conducted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

impl FromStr for Language {
    type Err = PatientError;

    /// Case-insensitive; the form sends `English` while the API stores `english`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            _ => Err(PatientError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = PatientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outpatient or recently discharged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientType {
    #[default]
    Opd,
    Discharged,
}

impl FromStr for PatientType {
    type Err = PatientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opd" => Ok(PatientType::Opd),
            "discharged" => Ok(PatientType::Discharged),
            _ => Err(PatientError::UnknownPatientType(s.to_string())),
        }
    }
}

/// A patient record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone: PhoneNumber,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub language: Language,
    /// Encoded questions; `None` when never set
    #[serde(default)]
    pub custom_questions: Option<String>,
    #[serde(default)]
    pub patient_type: PatientType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Patient {
    /// Decoded custom questions (forgiving; never fails)
    pub fn questions(&self) -> Vec<String> {
        questions::decode(self.custom_questions.as_deref().unwrap_or_default())
    }

    /// Decoded custom questions, re-validated against the cap
    pub fn question_list(&self) -> Result<QuestionList, QuestionError> {
        QuestionList::from_encoded(self.custom_questions.as_deref().unwrap_or_default())
    }

    /// Replace the stored questions with an encoded list
    pub fn set_questions(&mut self, list: &QuestionList) {
        self.custom_questions = Some(list.encode());
    }
}

/// Create or update request for a patient
///
/// Holds raw form input; [`PatientDraft::validate`] must pass before the
/// draft is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDraft {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub custom_questions: String,
    #[serde(default)]
    pub patient_type: PatientType,
}

impl PatientDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            age: None,
            language: Language::default(),
            custom_questions: String::new(),
            patient_type: PatientType::default(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_patient_type(mut self, patient_type: PatientType) -> Self {
        self.patient_type = patient_type;
        self
    }

    /// Store the questions in their encoded form
    pub fn with_questions(mut self, list: &QuestionList) -> Self {
        self.custom_questions = list.encode();
        self
    }

    /// Check the draft before submission
    ///
    /// # Errors
    /// - [`PatientError::EmptyName`] for a blank name
    /// - [`PatientError::InvalidPhoneFormat`] for a malformed phone number
    pub fn validate(&self) -> Result<PhoneNumber, PatientError> {
        if self.name.trim().is_empty() {
            return Err(PatientError::EmptyName);
        }
        PhoneNumber::parse(&self.phone)
    }
}
