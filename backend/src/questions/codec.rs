//! Flat numbered-text encoding for custom questions
//!
//! A patient's follow-up questions are persisted as a single text field:
//!
//! ```text
//! 1. How are you feeling today?
//! 2. Are you taking your medication?
//! ```
//!
//! Writing is strict (trimmed, blank entries dropped, renumbered from 1).
//! Reading is forgiving: lines without a numeric prefix are kept as bare
//! questions, and blank lines are skipped. Neither direction enforces the
//! question cap; that belongs to [`QuestionList`](super::QuestionList).

/// Encode an ordered list of questions into the numbered-text form
///
/// Each entry is trimmed and entries that end up empty are dropped before
/// numbering, so the output never contains gaps.
///
/// # Example
/// ```
/// use followup_core_rs::questions::encode;
///
/// let encoded = encode(&["  Any fever? ", "", "Any pain?"]);
/// assert_eq!(encoded, "1. Any fever?\n2. Any pain?");
/// assert_eq!(encode::<&str>(&[]), "");
/// ```
pub fn encode<S: AsRef<str>>(questions: &[S]) -> String {
    questions
        .iter()
        .map(|q| q.as_ref().trim())
        .filter(|q| !q.is_empty())
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode the numbered-text form back into an ordered list of questions
///
/// Never fails: malformed lines degrade to bare questions.
///
/// # Example
/// ```
/// use followup_core_rs::questions::decode;
///
/// let questions = decode("Do you feel pain?\n2. Any fever?");
/// assert_eq!(questions, vec!["Do you feel pain?", "Any fever?"]);
/// assert!(decode("").is_empty());
/// ```
pub fn decode(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| parse_line(line).text().trim())
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

/// One stored line, classified by whether it carries an index prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedLine<'a> {
    /// `"<digits>." [whitespace] text`, with the prefix removed
    Indexed { index: &'a str, text: &'a str },
    /// Anything else, kept verbatim
    Bare(&'a str),
}

impl<'a> EncodedLine<'a> {
    /// The question text (untrimmed)
    pub fn text(&self) -> &'a str {
        match self {
            EncodedLine::Indexed { text, .. } => text,
            EncodedLine::Bare(text) => text,
        }
    }
}

/// Classify a single line of encoded text
///
/// The prefix must start at the very first character: one or more ASCII
/// digits, then a literal `.`; any whitespace directly after the dot is part
/// of the prefix. A line that starts with whitespace or lacks the dot is
/// bare.
pub fn parse_line(line: &str) -> EncodedLine<'_> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());

    if digits_end == 0 {
        return EncodedLine::Bare(line);
    }

    match line[digits_end..].strip_prefix('.') {
        Some(rest) => EncodedLine::Indexed {
            index: &line[..digits_end],
            text: rest.trim_start(),
        },
        None => EncodedLine::Bare(line),
    }
}
