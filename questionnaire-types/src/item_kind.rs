use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownKind;

/// The kind of an item, determining which response shape is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Free text answer.
    Text,

    /// Pick exactly one option.
    Radio,

    /// Pick any number of options.
    Checkbox,

    /// Pick a point on a scale.
    Scale,
}

impl ItemKind {
    /// All recognized kinds, in their fixed order.
    pub const TYPES: [ItemKind; 4] = [Self::Text, Self::Radio, Self::Checkbox, Self::Scale];

    /// The wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Scale => "scale",
        }
    }

    /// Check if this kind offers a list of options to choose from.
    pub fn is_choice(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TYPES
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
