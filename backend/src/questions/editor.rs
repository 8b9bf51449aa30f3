//! Question editor state
//!
//! Models the rows a user edits before saving a patient's questions. The
//! editor is an explicit value owned by the caller; every operation reports
//! whether it changed anything instead of failing, except [`QuestionEditor::save`].
//!
//! Rules:
//! - At most [`MAX_QUESTIONS`] rows; adding an 11th row is ignored
//! - At least one row is always present; removing the last row is ignored
//! - Saving requires at least one non-blank row

use tracing::debug;

use super::codec;
use super::list::{QuestionError, QuestionList, MAX_QUESTIONS};

/// In-progress edit of a patient's question list
///
/// # Example
/// ```
/// use followup_core_rs::QuestionEditor;
///
/// let mut editor = QuestionEditor::new();
/// editor.update_question(0, "Any fever?");
/// editor.add_question();
/// editor.update_question(1, "Any pain?");
///
/// let saved = editor.save().unwrap();
/// assert_eq!(saved.encode(), "1. Any fever?\n2. Any pain?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEditor {
    rows: Vec<String>,
}

impl QuestionEditor {
    /// Start with a single blank row
    pub fn new() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }

    /// Open the editor on existing questions
    ///
    /// An empty list opens with one blank row. Rows beyond the cap are
    /// dropped so the editor never starts in a state it could not reach.
    pub fn with_questions<S: AsRef<str>>(questions: &[S]) -> Self {
        if questions.is_empty() {
            return Self::new();
        }

        if questions.len() > MAX_QUESTIONS {
            debug!(
                count = questions.len(),
                max = MAX_QUESTIONS,
                "Truncating questions opened in editor"
            );
        }

        Self {
            rows: questions
                .iter()
                .take(MAX_QUESTIONS)
                .map(|q| q.as_ref().to_string())
                .collect(),
        }
    }

    /// Open the editor on a stored `custom_questions` field
    pub fn from_encoded(text: &str) -> Self {
        Self::with_questions(&codec::decode(text))
    }

    /// Current rows, blanks included
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows that would survive a save
    pub fn configured_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.trim().is_empty()).count()
    }

    pub fn can_add(&self) -> bool {
        self.rows.len() < MAX_QUESTIONS
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Append a blank row
    ///
    /// Returns `false` (and leaves the editor unchanged) at the cap.
    pub fn add_question(&mut self) -> bool {
        if !self.can_add() {
            debug!(max = MAX_QUESTIONS, "Ignoring add past question cap");
            return false;
        }
        self.rows.push(String::new());
        true
    }

    /// Remove the row at `index`
    ///
    /// Returns `false` when it is the only row or the index is out of range.
    pub fn remove_question(&mut self, index: usize) -> bool {
        if !self.can_remove() {
            debug!("Ignoring removal of the last question row");
            return false;
        }
        if index >= self.rows.len() {
            debug!(index, rows = self.rows.len(), "Ignoring removal of unknown row");
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Replace the text of the row at `index`
    ///
    /// Returns `false` if the index is out of range.
    pub fn update_question(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                *row = text.into();
                true
            }
            None => {
                debug!(index, rows = self.rows.len(), "Ignoring update of unknown row");
                false
            }
        }
    }

    /// Validate the rows and produce the list to persist
    ///
    /// # Errors
    /// [`QuestionError::NoQuestions`] if every row is blank.
    pub fn save(&self) -> Result<QuestionList, QuestionError> {
        QuestionList::non_empty(&self.rows).inspect_err(|err| {
            debug!(error = %err, "Rejected question save");
        })
    }

    /// Validate and encode in one step, ready for the `custom_questions` field
    pub fn save_encoded(&self) -> Result<String, QuestionError> {
        self.save().map(|list| list.encode())
    }
}

impl Default for QuestionEditor {
    fn default() -> Self {
        Self::new()
    }
}
