/// Why an item candidate was rejected.
///
/// Variants are reported in the order the checks run, so a candidate with
/// both a missing title and an unknown kind reports `MissingTitle`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItem {
    /// The title is absent or empty.
    #[error("Item title is missing or empty")]
    MissingTitle,

    /// No kind was given at all.
    #[error("Item kind is missing")]
    MissingKind,

    /// The kind is not one of the recognized kinds.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),

    /// Both option lists are present but have different lengths.
    #[error("Item has {texts} option text(s) but {values} option value(s)")]
    OptionCountMismatch { texts: usize, values: usize },
}

impl InvalidItem {
    /// Check if this rejection is about the option lists.
    pub fn is_option_mismatch(&self) -> bool {
        matches!(self, Self::OptionCountMismatch { .. })
    }
}

/// Error returned when parsing a string that is not a recognized item kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item kind: '{0}' (expected one of text, radio, checkbox, scale)")]
pub struct UnknownKind(pub String);
