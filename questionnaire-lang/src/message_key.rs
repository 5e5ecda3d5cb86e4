use std::fmt;
use std::str::FromStr;

use crate::LangError;

/// A UI message every locale must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    Submit,
    Next,
    Back,
    Loading,
    /// Placeholder for empty text inputs.
    Input,
    /// Shown when a required item has no answer.
    Required,
    /// Shown when a checkbox selection is outside its bounds. Takes the
    /// minimum and maximum as two `%d` arguments.
    CheckboxOutOfRange,
}

impl MessageKey {
    /// The canonical key set.
    pub const ALL: [MessageKey; 7] = [
        Self::Submit,
        Self::Next,
        Self::Back,
        Self::Loading,
        Self::Input,
        Self::Required,
        Self::CheckboxOutOfRange,
    ];

    /// The key as it appears in table files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Next => "next",
            Self::Back => "back",
            Self::Loading => "loading",
            Self::Input => "input",
            Self::Required => "required",
            Self::CheckboxOutOfRange => "checkboxOutOfRange",
        }
    }

    /// Number of `%d` placeholders every translation of this key carries.
    pub fn placeholder_count(self) -> usize {
        match self {
            Self::CheckboxOutOfRange => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LangError::UnknownKey(s.to_string()))
    }
}
