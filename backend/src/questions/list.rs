//! Validated, ordered list of follow-up questions
//!
//! CRITICAL: A `QuestionList` never holds more than [`MAX_QUESTIONS`]
//! entries, and every entry is trimmed, non-empty and single-line. Those
//! three properties are what make `decode(encode(list)) == list` hold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::codec;

/// Maximum number of questions asked during one call
pub const MAX_QUESTIONS: usize = 10;

/// Validation failures for question lists
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("At least one non-blank question is required")]
    NoQuestions,

    #[error("Too many questions: {count} given, at most {max} allowed")]
    TooManyQuestions { count: usize, max: usize },
}

/// Ordered follow-up questions, asked in this order during a call
///
/// # Example
/// ```
/// use followup_core_rs::QuestionList;
///
/// let list = QuestionList::new(vec!["  Any fever? ", "", "Any pain?"]).unwrap();
/// assert_eq!(list.as_slice(), &["Any fever?", "Any pain?"]);
/// assert_eq!(list.encode(), "1. Any fever?\n2. Any pain?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct QuestionList {
    questions: Vec<String>,
}

impl QuestionList {
    /// Build a list from raw entries
    ///
    /// Entries are trimmed, line breaks inside an entry collapse to a single
    /// space, and blank entries are dropped. The cap applies to what remains.
    ///
    /// # Errors
    /// [`QuestionError::TooManyQuestions`] if more than [`MAX_QUESTIONS`]
    /// entries survive normalization.
    pub fn new<I, S>(entries: I) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let questions: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_entry(entry.as_ref()))
            .collect();

        if questions.len() > MAX_QUESTIONS {
            return Err(QuestionError::TooManyQuestions {
                count: questions.len(),
                max: MAX_QUESTIONS,
            });
        }

        Ok(Self { questions })
    }

    /// Build a non-empty list, as required before saving a patient's questions
    ///
    /// # Errors
    /// [`QuestionError::NoQuestions`] when nothing survives normalization,
    /// [`QuestionError::TooManyQuestions`] as for [`QuestionList::new`].
    pub fn non_empty<I, S>(entries: I) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = Self::new(entries)?;
        if list.is_empty() {
            return Err(QuestionError::NoQuestions);
        }
        Ok(list)
    }

    /// Decode a stored field and validate the result
    ///
    /// Unlike [`codec::decode`], this re-checks the cap, so a field that was
    /// hand-edited past the limit is rejected instead of silently accepted.
    pub fn from_encoded(text: &str) -> Result<Self, QuestionError> {
        Self::new(codec::decode(text))
    }

    /// Encode into the stored numbered-text form
    pub fn encode(&self) -> String {
        codec::encode(&self.questions)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whether another question can be appended without breaking the cap
    pub fn has_capacity(&self) -> bool {
        self.questions.len() < MAX_QUESTIONS
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.questions
    }
}

impl TryFrom<Vec<String>> for QuestionList {
    type Error = QuestionError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<QuestionList> for Vec<String> {
    fn from(list: QuestionList) -> Self {
        list.questions
    }
}

fn normalize_entry(entry: &str) -> Option<String> {
    let collapsed = if entry.contains(['\n', '\r']) {
        entry
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        entry.trim().to_string()
    };

    (!collapsed.is_empty()).then_some(collapsed)
}
