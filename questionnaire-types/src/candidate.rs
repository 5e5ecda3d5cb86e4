use serde::{Deserialize, Serialize};

use crate::{InvalidItem, ItemKind, OptionValue};

/// The plain record an [`Item`](crate::Item) is constructed from.
///
/// Every field is optional so that any record shape can be checked. On the
/// wire the fields are named `type`, `title`, `optTexts` and `optValues`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemCandidate {
    /// The kind name, e.g. `"radio"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The question prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Human-readable option labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_texts: Option<Vec<String>>,

    /// Values behind the option labels, parallel to `opt_texts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_values: Option<Vec<OptionValue>>,
}

impl ItemCandidate {
    /// Create a candidate with a kind and a title and no options.
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            title: Some(title.into()),
            opt_texts: None,
            opt_values: None,
        }
    }

    /// Set the option labels.
    pub fn with_texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opt_texts = Some(texts.into_iter().map(Into::into).collect());
        self
    }

    /// Set the option values.
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        self.opt_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Run the validation rules in order and report the first failure.
    ///
    /// 1. The title must be present and non-empty.
    /// 2. The kind must be one of [`ItemKind::TYPES`].
    /// 3. Text items are accepted without looking at their options.
    /// 4. Otherwise the option lists must agree in length, see
    ///    [`option_lengths_agree`].
    ///
    /// On success the parsed kind is returned.
    pub fn check(&self) -> Result<ItemKind, InvalidItem> {
        if self.title.as_deref().is_none_or(str::is_empty) {
            return Err(InvalidItem::MissingTitle);
        }

        let kind: ItemKind = self.kind.as_deref().ok_or(InvalidItem::MissingKind)?.parse()?;

        if kind == ItemKind::Text {
            return Ok(kind);
        }

        let texts = self.opt_texts.as_deref();
        let values = self.opt_values.as_deref();
        if !option_lengths_agree(texts, values) {
            return Err(InvalidItem::OptionCountMismatch {
                texts: texts.map_or(0, <[_]>::len),
                values: values.map_or(0, <[_]>::len),
            });
        }

        Ok(kind)
    }

    /// Boolean form of [`check`](Self::check).
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

/// The option length rule: it applies only when both lists are provided.
///
/// If either list is absent the rule passes, so a choice item without any
/// options is accepted. Two present but empty lists agree.
pub fn option_lengths_agree<T, U>(texts: Option<&[T]>, values: Option<&[U]>) -> bool {
    match (texts, values) {
        (Some(texts), Some(values)) => texts.len() == values.len(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnknownKind;

    #[test]
    fn text_with_title_is_valid() {
        assert!(ItemCandidate::new("text", "Your name?").is_valid());
    }

    #[test]
    fn missing_title() {
        let candidate = ItemCandidate {
            kind: Some("text".into()),
            ..Default::default()
        };
        assert_eq!(candidate.check(), Err(InvalidItem::MissingTitle));
    }

    #[test]
    fn empty_title() {
        assert_eq!(
            ItemCandidate::new("radio", "").check(),
            Err(InvalidItem::MissingTitle)
        );
    }

    #[test]
    fn whitespace_title_counts_as_present() {
        assert!(ItemCandidate::new("text", "  ").is_valid());
    }

    #[test]
    fn title_checked_before_kind() {
        assert_eq!(
            ItemCandidate::new("essay", "").check(),
            Err(InvalidItem::MissingTitle)
        );
    }

    #[test]
    fn unknown_kind() {
        assert_eq!(
            ItemCandidate::new("essay", "Write").check(),
            Err(InvalidItem::UnknownKind(UnknownKind("essay".into())))
        );
    }

    #[test]
    fn missing_kind() {
        let candidate = ItemCandidate {
            title: Some("Anything".into()),
            ..Default::default()
        };
        assert_eq!(candidate.check(), Err(InvalidItem::MissingKind));
    }

    #[test]
    fn radio_with_matching_options() {
        let candidate = ItemCandidate::new("radio", "Pick one")
            .with_texts(["A", "B"])
            .with_values([1, 2]);
        assert_eq!(candidate.check(), Ok(ItemKind::Radio));
    }

    #[test]
    fn radio_with_mismatched_options() {
        let candidate = ItemCandidate::new("radio", "Pick one")
            .with_texts(["A", "B"])
            .with_values([1]);
        assert_eq!(
            candidate.check(),
            Err(InvalidItem::OptionCountMismatch {
                texts: 2,
                values: 1
            })
        );
    }

    #[test]
    fn text_ignores_mismatched_options() {
        let candidate = ItemCandidate::new("text", "Comments")
            .with_texts(["A", "B", "C"])
            .with_values([1]);
        assert!(candidate.is_valid());
    }

    #[test]
    fn scale_without_options() {
        assert!(ItemCandidate::new("scale", "Rate 1-5").is_valid());
    }

    #[test]
    fn only_one_list_present() {
        let texts_only = ItemCandidate::new("checkbox", "Pick").with_texts(["A", "B"]);
        assert!(texts_only.is_valid());

        let values_only = ItemCandidate::new("checkbox", "Pick").with_values([1, 2, 3]);
        assert!(values_only.is_valid());
    }

    #[test]
    fn both_lists_empty() {
        let candidate = ItemCandidate::new("radio", "Nothing to pick")
            .with_texts(Vec::<String>::new())
            .with_values(Vec::<OptionValue>::new());
        assert!(candidate.is_valid());
    }

    #[test]
    fn empty_texts_against_values() {
        let candidate = ItemCandidate::new("radio", "Pick")
            .with_texts(Vec::<String>::new())
            .with_values([1]);
        assert!(!candidate.is_valid());
    }

    #[test]
    fn deserialize_wire_names() {
        let candidate: ItemCandidate = serde_json::from_str(
            r#"{"type": "radio", "title": "Pick one", "optTexts": ["A", "B"], "optValues": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(candidate.kind.as_deref(), Some("radio"));
        assert_eq!(candidate.opt_texts.as_ref().map(Vec::len), Some(2));
        assert!(candidate.is_valid());
    }

    #[test]
    fn deserialize_missing_fields() {
        let candidate: ItemCandidate = serde_json::from_str(r#"{"type": "text"}"#).unwrap();
        assert_eq!(candidate.title, None);
        assert!(!candidate.is_valid());
    }
}
