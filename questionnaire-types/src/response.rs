use crate::OptionValue;

/// An answer recorded on an item.
///
/// The expected shape depends on the item kind: `Text` for text items,
/// `Choice` for radio and scale items, `Choices` for checkbox items.
/// Nothing enforces that pairing.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Free text.
    Text(String),

    /// A single picked option value.
    Choice(OptionValue),

    /// Any number of picked option values.
    Choices(Vec<OptionValue>),
}

impl Response {
    /// Try to get this response as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this response as a single choice.
    pub fn as_choice(&self) -> Option<&OptionValue> {
        match self {
            Self::Choice(value) => Some(value),
            _ => None,
        }
    }

    /// Try to get this response as a set of choices.
    pub fn as_choices(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Choices(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for Response {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Response {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<OptionValue> for Response {
    fn from(value: OptionValue) -> Self {
        Self::Choice(value)
    }
}

impl From<Vec<OptionValue>> for Response {
    fn from(values: Vec<OptionValue>) -> Self {
        Self::Choices(values)
    }
}
