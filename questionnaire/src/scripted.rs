//! Scripted respondent for filling items without user interaction.
//!
//! `ScriptedRespondent` answers each item from a script keyed by item title.
//! This is useful for tests and for importing answers collected elsewhere.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{ItemCandidate, OptionValue, Questionnaire, ScriptedRespondent};
//!
//! let mut questionnaire = Questionnaire::from_candidates([
//!     ItemCandidate::new("radio", "Pick one").with_texts(["A", "B"]).with_values([1, 2]),
//!     ItemCandidate::new("checkbox", "Pick any").with_texts(["x", "y", "z"]),
//! ])
//! .unwrap();
//!
//! questionnaire
//!     .collect(
//!         &ScriptedRespondent::new()
//!             .with_option("Pick one", 1)
//!             .with_options("Pick any", [0, 2]),
//!     )
//!     .unwrap();
//!
//! let picked = questionnaire.items()[0].response().unwrap().as_choice();
//! assert_eq!(picked, Some(&OptionValue::Int(2)));
//! ```

use std::collections::HashMap;

use crate::{Item, OptionValue, Respondent, Response};

/// A respondent that answers from a fixed script.
///
/// Items without a scripted answer are skipped, unless
/// [`require_all`](Self::require_all) is set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    answers: HashMap<String, ScriptedAnswer>,
    require_all: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum ScriptedAnswer {
    /// Recorded as given.
    Response(Response),

    /// Resolved to the value of the option at this position.
    Option(usize),

    /// Resolved to the values of the options at these positions.
    Options(Vec<usize>),
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedRespondentError {
    /// The item has no scripted answer and every item must be answered.
    #[error("No scripted answer for '{0}'")]
    MissingAnswer(String),

    /// A scripted option position is past the item's last option.
    #[error("'{title}' has no option #{index}")]
    NoSuchOption { title: String, index: usize },
}

impl ScriptedRespondent {
    /// Create a respondent with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an answer for the item with this title.
    pub fn with_answer(mut self, title: impl Into<String>, response: impl Into<Response>) -> Self {
        self.answers
            .insert(title.into(), ScriptedAnswer::Response(response.into()));
        self
    }

    /// Script picking the option at `index`.
    pub fn with_option(mut self, title: impl Into<String>, index: usize) -> Self {
        self.answers
            .insert(title.into(), ScriptedAnswer::Option(index));
        self
    }

    /// Script picking the options at `indices`.
    pub fn with_options(
        mut self,
        title: impl Into<String>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.answers.insert(
            title.into(),
            ScriptedAnswer::Options(indices.into_iter().collect()),
        );
        self
    }

    /// Fail on items that have no scripted answer instead of skipping them.
    pub fn require_all(mut self) -> Self {
        self.require_all = true;
        self
    }
}

fn option_value(item: &Item, index: usize) -> Result<OptionValue, ScriptedRespondentError> {
    item.options()
        .nth(index)
        .map(|option| option.value.into_owned())
        .ok_or_else(|| ScriptedRespondentError::NoSuchOption {
            title: item.title().to_string(),
            index,
        })
}

impl Respondent for ScriptedRespondent {
    type Error = ScriptedRespondentError;

    fn answer(&self, item: &Item) -> Result<Option<Response>, Self::Error> {
        let Some(answer) = self.answers.get(item.title()) else {
            if self.require_all {
                return Err(ScriptedRespondentError::MissingAnswer(
                    item.title().to_string(),
                ));
            }
            return Ok(None);
        };

        let response = match answer {
            ScriptedAnswer::Response(response) => response.clone(),
            ScriptedAnswer::Option(index) => Response::Choice(option_value(item, *index)?),
            ScriptedAnswer::Options(indices) => Response::Choices(
                indices
                    .iter()
                    .map(|&index| option_value(item, index))
                    .collect::<Result<_, _>>()?,
            ),
        };
        Ok(Some(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemKind;

    fn colors() -> Item {
        Item::new(
            ItemKind::Checkbox,
            "Colors",
            vec!["red".into(), "green".into()],
            None,
        )
    }

    #[test]
    fn skips_unscripted_items() {
        let answer = ScriptedRespondent::new().answer(&colors()).unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn require_all() {
        let err = ScriptedRespondent::new()
            .require_all()
            .answer(&colors())
            .unwrap_err();
        assert!(matches!(err, ScriptedRespondentError::MissingAnswer(title) if title == "Colors"));
    }

    #[test]
    fn option_without_values_uses_text() {
        let answer = ScriptedRespondent::new()
            .with_options("Colors", [1])
            .answer(&colors())
            .unwrap();
        assert_eq!(
            answer,
            Some(Response::Choices(vec![OptionValue::String("green".into())]))
        );
    }

    #[test]
    fn option_out_of_range() {
        let err = ScriptedRespondent::new()
            .with_option("Colors", 5)
            .answer(&colors())
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptedRespondentError::NoSuchOption { index: 5, .. }
        ));
    }
}
