//! Custom follow-up questions
//!
//! - `codec`: numbered-text storage format (`encode` / `decode`)
//! - `list`: capped, normalized `QuestionList`
//! - `editor`: row-based editing state with add/remove/save rules

pub mod codec;
pub mod editor;
pub mod list;

pub use codec::{decode, encode, parse_line, EncodedLine};
pub use editor::QuestionEditor;
pub use list::{QuestionError, QuestionList, MAX_QUESTIONS};
