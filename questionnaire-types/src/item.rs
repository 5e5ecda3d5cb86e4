use std::borrow::Cow;

use crate::{InvalidItem, ItemCandidate, ItemKind, OptionValue, Response};

/// A single question: its kind, prompt, options and the answer given so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// The kind of question. Fixed once constructed.
    kind: ItemKind,

    /// The prompt text shown to the respondent.
    title: String,

    /// Option labels, in display order. Empty for text items.
    opt_texts: Vec<String>,

    /// Values behind the labels, if they differ from the labels.
    opt_values: Option<Vec<OptionValue>>,

    /// The recorded answer, if any.
    response: Option<Response>,
}

/// One option of a choice item, as offered to the respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOption<'a> {
    /// Position of the option in the item.
    pub index: usize,

    /// The label shown to the respondent.
    pub text: &'a str,

    /// The value recorded when this option is picked.
    pub value: Cow<'a, OptionValue>,
}

impl Item {
    /// Create an item by plain field assignment.
    ///
    /// Nothing is checked here: an empty title or option lists of different
    /// lengths are stored as given. Build from an [`ItemCandidate`] with
    /// `Item::try_from` to get validation.
    pub fn new(
        kind: ItemKind,
        title: impl Into<String>,
        opt_texts: Vec<String>,
        opt_values: Option<Vec<OptionValue>>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            opt_texts,
            opt_values,
            response: None,
        }
    }

    /// Create a free text item.
    pub fn text(title: impl Into<String>) -> Self {
        Self::new(ItemKind::Text, title, Vec::new(), None)
    }

    /// Get the item kind.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the option labels.
    pub fn opt_texts(&self) -> &[String] {
        &self.opt_texts
    }

    /// Get the option values, if any were given.
    pub fn opt_values(&self) -> Option<&[OptionValue]> {
        self.opt_values.as_deref()
    }

    /// Iterate over the offered options.
    ///
    /// When no value was given for an option its label is used as the value.
    pub fn options(&self) -> impl Iterator<Item = ItemOption<'_>> {
        self.opt_texts
            .iter()
            .enumerate()
            .map(move |(index, text)| ItemOption {
                index,
                text,
                value: match self.opt_values.as_ref().and_then(|values| values.get(index)) {
                    Some(value) => Cow::Borrowed(value),
                    None => Cow::Owned(OptionValue::String(text.clone())),
                },
            })
    }

    /// Get the recorded answer.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Check if an answer has been recorded.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    /// Record an answer, replacing and returning any previous one.
    ///
    /// The answer is not checked against the offered options.
    pub fn record_response(&mut self, response: impl Into<Response>) -> Option<Response> {
        self.response.replace(response.into())
    }

    /// Remove the recorded answer.
    pub fn clear_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}

impl TryFrom<ItemCandidate> for Item {
    type Error = InvalidItem;

    fn try_from(candidate: ItemCandidate) -> Result<Self, Self::Error> {
        let kind = candidate.check().inspect_err(|reason| {
            log::debug!("rejecting item candidate {:?}: {reason}", candidate.title);
        })?;

        Ok(Self::new(
            kind,
            candidate.title.unwrap_or_default(),
            candidate.opt_texts.unwrap_or_default(),
            candidate.opt_values,
        ))
    }
}
