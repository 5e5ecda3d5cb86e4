use crate::{Locale, MessageKey};

/// Error type for locale table loading and lookup.
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    /// The locale code is not one of the supported locales.
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    /// The key name is not in the canonical key set.
    #[error("Unknown message key: '{0}'")]
    UnknownKey(String),

    /// Neither the locale nor the fallback locale has the message.
    #[error("No '{key}' message for locale {locale}")]
    MissingTranslation { locale: Locale, key: MessageKey },

    /// A locale does not provide every canonical key.
    #[error("Locale {locale} is missing message(s): {}", join_keys(.keys))]
    IncompleteLocale {
        locale: Locale,
        keys: Vec<MessageKey>,
    },

    /// A message is the empty string.
    #[error("Message '{key}' for locale {locale} is empty")]
    EmptyMessage { locale: Locale, key: MessageKey },

    /// A message has the wrong number of `%d` placeholders for its key.
    #[error("Message '{key}' for locale {locale} has {found} placeholder(s), expected {expected}")]
    PlaceholderCount {
        locale: Locale,
        key: MessageKey,
        expected: usize,
        found: usize,
    },

    /// The argument count does not match the template's placeholders.
    #[error("Template has {expected} placeholder(s) but {given} argument(s) were given")]
    PlaceholderArity { expected: usize, given: usize },

    /// The table source is not valid TOML or not a table of string tables.
    #[error("Failed to parse locale table: {0}")]
    Parse(#[from] toml::de::Error),
}

fn join_keys(keys: &[MessageKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
