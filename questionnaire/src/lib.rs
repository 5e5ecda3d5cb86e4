//! # questionnaire
//!
//! Survey items, their validation and responses, plus the localized UI
//! strings a form renderer needs.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Locale, LocaleTable, MessageKey, Questionnaire, Response, ScriptedRespondent};
//!
//! let mut questionnaire = Questionnaire::from_json_str(
//!     r#"[
//!         {"type": "text", "title": "Your name?"},
//!         {"type": "radio", "title": "Pick one", "optTexts": ["A", "B"], "optValues": [1, 2]}
//!     ]"#,
//! )
//! .unwrap();
//!
//! questionnaire
//!     .collect(&ScriptedRespondent::new().with_answer("Your name?", "Alice"))
//!     .unwrap();
//!
//! assert_eq!(questionnaire.items()[0].response(), Some(&Response::Text("Alice".into())));
//! assert!(!questionnaire.items()[1].is_answered());
//!
//! let table = LocaleTable::builtin().unwrap();
//! assert_eq!(table.get(Locale::ZhCn, MessageKey::Submit).unwrap(), "提交");
//! ```
//!
//! ## Candidate records
//!
//! Items are built from plain records with the fields `type`, `title`,
//! `optTexts` and `optValues`. A record is valid when it has a non-empty
//! title, a kind out of `text`, `radio`, `checkbox` and `scale`, and, for
//! anything but `text`, option lists of equal length whenever both are given.
//!
//! ## Respondents
//!
//! Whatever collects answers implements `Respondent`. `ScriptedRespondent`
//! answers from a fixed script, for tests and batch imports.

// Re-export all types from the member crates
pub use questionnaire_lang::*;
pub use questionnaire_types::*;

mod questionnaire;
pub use questionnaire::{Questionnaire, QuestionnaireError};

// Scripted respondent for filling items without user interaction
mod scripted;
pub use scripted::{ScriptedRespondent, ScriptedRespondentError};
