//! Core types for the questionnaire crate.
//!
//! This crate provides the data model for a single survey question:
//! - `ItemKind` - The four recognized kinds of question
//! - `ItemCandidate` - The plain record an item is built from, plus validation
//! - `Item` - A question with its options and response slot
//! - `Response` and `OptionValue` - Answers and the values behind options
//! - `Respondent` trait - For implementing whatever collects answers

mod item_kind;
pub use item_kind::ItemKind;

mod option_value;
pub use option_value::OptionValue;

mod candidate;
pub use candidate::{ItemCandidate, option_lengths_agree};

mod item;
pub use item::{Item, ItemOption};

mod response;
pub use response::Response;

mod error;
pub use error::{InvalidItem, UnknownKind};

mod traits;
pub use traits::Respondent;
