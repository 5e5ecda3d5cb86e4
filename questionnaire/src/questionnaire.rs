use questionnaire_types::{InvalidItem, Item, ItemCandidate, Respondent};

/// Error type for building and filling a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// A candidate record failed validation.
    #[error("Item #{index} is invalid: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: InvalidItem,
    },

    /// The candidate records could not be parsed.
    #[error("Malformed item records: {0}")]
    Json(#[from] serde_json::Error),

    /// The respondent failed or was cancelled.
    #[error("Respondent error: {0}")]
    Respondent(#[from] anyhow::Error),
}

impl QuestionnaireError {
    /// Create a respondent error from any error type.
    pub fn respondent(err: impl Into<anyhow::Error>) -> Self {
        Self::Respondent(err.into())
    }

    /// The index of the offending item, for validation failures.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Self::InvalidItem { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// An ordered list of validated items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Questionnaire {
    items: Vec<Item>,
}

impl Questionnaire {
    /// Create a questionnaire from items that are already built.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Validate and build every candidate, stopping at the first invalid one.
    pub fn from_candidates(
        candidates: impl IntoIterator<Item = ItemCandidate>,
    ) -> Result<Self, QuestionnaireError> {
        let items = candidates
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| {
                Item::try_from(candidate)
                    .map_err(|source| QuestionnaireError::InvalidItem { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("built questionnaire with {} item(s)", items.len());
        Ok(Self { items })
    }

    /// Parse a JSON array of candidate records, then build as
    /// [`from_candidates`](Self::from_candidates) does.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionnaireError> {
        let candidates: Vec<ItemCandidate> = serde_json::from_str(json)?;
        Self::from_candidates(candidates)
    }

    /// Get the items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by position.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Get a mutable reference to an item by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count the items that have a recorded answer.
    pub fn answered(&self) -> usize {
        self.items.iter().filter(|item| item.is_answered()).count()
    }

    /// Ask the respondent about every item in order, recording each answer.
    ///
    /// Items the respondent skips keep whatever answer they had. On error,
    /// answers recorded before the failing item are kept.
    pub fn collect<R: Respondent>(&mut self, respondent: &R) -> Result<(), QuestionnaireError> {
        for item in &mut self.items {
            match respondent
                .answer(item)
                .map_err(QuestionnaireError::respondent)?
            {
                Some(response) => {
                    item.record_response(response);
                }
                None => log::debug!("no answer for '{}'", item.title()),
            }
        }
        Ok(())
    }
}

impl FromIterator<Item> for Questionnaire {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Questionnaire {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Questionnaire {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::ItemKind;

    #[test]
    fn from_candidates_keeps_order() {
        let questionnaire = Questionnaire::from_candidates([
            ItemCandidate::new("text", "Name?"),
            ItemCandidate::new("scale", "Rate"),
        ])
        .unwrap();

        let kinds: Vec<_> = questionnaire.items().iter().map(Item::kind).collect();
        assert_eq!(kinds, vec![ItemKind::Text, ItemKind::Scale]);
    }

    #[test]
    fn reports_index_of_invalid_item() {
        let err = Questionnaire::from_candidates([
            ItemCandidate::new("text", "Name?"),
            ItemCandidate::new("text", "Age?"),
            ItemCandidate::new("essay", "Write"),
        ])
        .unwrap_err();

        assert_eq!(err.item_index(), Some(2));
        assert!(err.to_string().starts_with("Item #2 is invalid"));
    }

    #[test]
    fn malformed_json() {
        let err = Questionnaire::from_json_str(r#"{"type": "text"}"#).unwrap_err();
        assert!(matches!(err, QuestionnaireError::Json(_)));
    }

    #[test]
    fn empty_questionnaire() {
        let questionnaire = Questionnaire::from_json_str("[]").unwrap();
        assert!(questionnaire.is_empty());
        assert_eq!(questionnaire.answered(), 0);
    }
}
