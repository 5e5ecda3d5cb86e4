use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::builtin;
use crate::format::{format_template, placeholder_count};
use crate::{LangError, Locale, MessageKey};

/// Messages for one locale, keyed by message key.
pub type Messages = BTreeMap<MessageKey, String>;

/// What a lookup does when the requested locale has no message for a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Fail with [`LangError::MissingTranslation`].
    #[default]
    Fail,

    /// Retry once in the given locale, then fail.
    FallbackTo(Locale),
}

/// A read-only mapping from locale to UI messages.
///
/// Tables built through [`LocaleTable::new`] or loaded from TOML are
/// validated up front: every locale they contain provides every key in
/// [`MessageKey::ALL`], with the right number of `%d` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    locales: BTreeMap<Locale, Messages>,
    policy: MissingKeyPolicy,
}

static BUILTIN: LazyLock<Result<LocaleTable, LangError>> = LazyLock::new(|| {
    LocaleTable::new(BTreeMap::from([
        (Locale::EnUs, owned(&builtin::EN_US)),
        (Locale::ZhCn, owned(&builtin::ZH_CN)),
    ]))
});

fn owned(entries: &[(MessageKey, &str)]) -> Messages {
    entries
        .iter()
        .map(|(key, text)| (*key, (*text).to_string()))
        .collect()
}

impl LocaleTable {
    /// The table shipped with the crate (`en-US` and `zh-CN`).
    ///
    /// Built and validated on first use, like any other table. The error is
    /// the validation failure of the shipped messages.
    pub fn builtin() -> Result<&'static LocaleTable, &'static LangError> {
        BUILTIN.as_ref()
    }

    /// Build a table from per-locale messages, validating it.
    pub fn new(locales: BTreeMap<Locale, Messages>) -> Result<Self, LangError> {
        let table = Self {
            locales,
            policy: MissingKeyPolicy::default(),
        };
        table.validate()?;
        log::debug!("loaded locale table with {} locale(s)", table.locales.len());
        Ok(table)
    }

    /// Load a table from TOML, one table per locale:
    ///
    /// ```toml
    /// [en-US]
    /// submit = "Submit"
    /// checkboxOutOfRange = "Please select at least %d and at most %d option(s)"
    /// ```
    ///
    /// Unknown locales and unknown keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self, LangError> {
        let raw: BTreeMap<String, BTreeMap<String, String>> = toml::from_str(source)?;

        let mut locales = BTreeMap::new();
        for (code, entries) in raw {
            let locale: Locale = code.parse()?;
            let messages = entries
                .into_iter()
                .map(|(key, text)| -> Result<_, LangError> {
                    Ok((key.parse::<MessageKey>()?, text))
                })
                .collect::<Result<Messages, _>>()?;
            locales.insert(locale, messages);
        }

        Self::new(locales)
    }

    /// Set the missing-key policy.
    pub fn with_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the missing-key policy.
    pub fn policy(&self) -> MissingKeyPolicy {
        self.policy
    }

    /// Check that every locale provides every canonical key.
    pub fn validate(&self) -> Result<(), LangError> {
        for (&locale, messages) in &self.locales {
            let missing: Vec<_> = MessageKey::ALL
                .into_iter()
                .filter(|key| !messages.contains_key(key))
                .collect();
            if !missing.is_empty() {
                return Err(LangError::IncompleteLocale {
                    locale,
                    keys: missing,
                });
            }

            for (&key, text) in messages {
                if text.is_empty() {
                    return Err(LangError::EmptyMessage { locale, key });
                }
                let found = placeholder_count(text);
                if found != key.placeholder_count() {
                    return Err(LangError::PlaceholderCount {
                        locale,
                        key,
                        expected: key.placeholder_count(),
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// Iterate over the locales in this table.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.keys().copied()
    }

    /// Check if this table has messages for a locale.
    pub fn contains(&self, locale: Locale) -> bool {
        self.locales.contains_key(&locale)
    }

    /// Get all messages for a locale.
    pub fn messages(&self, locale: Locale) -> Option<&Messages> {
        self.locales.get(&locale)
    }

    fn message(&self, locale: Locale, key: MessageKey) -> Option<&str> {
        self.locales
            .get(&locale)
            .and_then(|messages| messages.get(&key))
            .map(String::as_str)
    }

    /// Get the message template for a key, applying the missing-key policy.
    pub fn get(&self, locale: Locale, key: MessageKey) -> Result<&str, LangError> {
        if let Some(text) = self.message(locale, key) {
            return Ok(text);
        }

        match self.policy {
            MissingKeyPolicy::FallbackTo(fallback) if fallback != locale => {
                log::warn!("no '{key}' message for {locale}, falling back to {fallback}");
                self.message(fallback, key)
                    .ok_or(LangError::MissingTranslation { locale, key })
            }
            _ => Err(LangError::MissingTranslation { locale, key }),
        }
    }

    /// Look up a message by locale code and key name, e.g. `("zh-CN", "next")`.
    pub fn lookup(&self, locale: &str, key: &str) -> Result<&str, LangError> {
        self.get(locale.parse()?, key.parse()?)
    }

    /// Look up a message and substitute its `%d` placeholders.
    pub fn format<T: fmt::Display>(
        &self,
        locale: Locale,
        key: MessageKey,
        args: &[T],
    ) -> Result<String, LangError> {
        format_template(self.get(locale, key)?, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_only() -> LocaleTable {
        LocaleTable::new(BTreeMap::from([(Locale::EnUs, owned(&builtin::EN_US))])).unwrap()
    }

    #[test]
    fn builtin_is_complete() {
        let table = LocaleTable::builtin().unwrap();
        table.validate().unwrap();
        assert_eq!(table.locales().collect::<Vec<_>>(), Locale::ALL);
    }

    #[test]
    fn builtin_strings() {
        let table = LocaleTable::builtin().unwrap();
        assert_eq!(
            table.get(Locale::EnUs, MessageKey::Loading).unwrap(),
            "Loading..."
        );
        assert_eq!(
            table.get(Locale::ZhCn, MessageKey::Required).unwrap(),
            "此字段不能为空"
        );
    }

    #[test]
    fn new_rejects_missing_keys() {
        let mut messages = owned(&builtin::ZH_CN);
        messages.remove(&MessageKey::CheckboxOutOfRange);

        let err = LocaleTable::new(BTreeMap::from([(Locale::ZhCn, messages)])).unwrap_err();
        match err {
            LangError::IncompleteLocale { locale, keys } => {
                assert_eq!(locale, Locale::ZhCn);
                assert_eq!(keys, vec![MessageKey::CheckboxOutOfRange]);
            }
            other => panic!("Expected IncompleteLocale, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_empty_message() {
        let mut messages = owned(&builtin::EN_US);
        messages.insert(MessageKey::Back, String::new());

        let err = LocaleTable::new(BTreeMap::from([(Locale::EnUs, messages)])).unwrap_err();
        assert!(matches!(
            err,
            LangError::EmptyMessage {
                key: MessageKey::Back,
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_wrong_placeholder_count() {
        let mut messages = owned(&builtin::EN_US);
        messages.insert(MessageKey::CheckboxOutOfRange, "Select %d".to_string());

        let err = LocaleTable::new(BTreeMap::from([(Locale::EnUs, messages)])).unwrap_err();
        assert!(matches!(
            err,
            LangError::PlaceholderCount {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn fail_policy() {
        let err = english_only()
            .get(Locale::ZhCn, MessageKey::Submit)
            .unwrap_err();
        assert!(matches!(
            err,
            LangError::MissingTranslation {
                locale: Locale::ZhCn,
                key: MessageKey::Submit
            }
        ));
    }

    #[test]
    fn fallback_policy() {
        let table = english_only().with_policy(MissingKeyPolicy::FallbackTo(Locale::EnUs));
        assert_eq!(table.get(Locale::ZhCn, MessageKey::Submit).unwrap(), "Submit");
    }

    #[test]
    fn fallback_to_absent_locale_fails() {
        let table = english_only().with_policy(MissingKeyPolicy::FallbackTo(Locale::ZhCn));
        assert!(table.get(Locale::ZhCn, MessageKey::Next).is_err());
    }

    #[test]
    fn lookup_by_name() {
        let table = LocaleTable::builtin().unwrap();
        assert_eq!(
            table.lookup("en-US", "checkboxOutOfRange").unwrap(),
            builtin::EN_US[6].1
        );
        assert!(matches!(
            table.lookup("en-GB", "submit"),
            Err(LangError::UnknownLocale(_))
        ));
        assert!(matches!(
            table.lookup("en-US", "cancel"),
            Err(LangError::UnknownKey(_))
        ));
    }

    #[test]
    fn format_message() {
        let text = LocaleTable::builtin()
            .unwrap()
            .format(Locale::EnUs, MessageKey::CheckboxOutOfRange, &[1, 3])
            .unwrap();
        assert_eq!(text, "Please select at least 1 and at most 3 option(s)");
    }
}
