//! Localized UI strings for rendering questionnaire forms.
//!
//! - `Locale` - The supported locale identifiers (`en-US`, `zh-CN`)
//! - `MessageKey` - The canonical set of message keys every locale provides
//! - `LocaleTable` - Locale to message mapping, built in or loaded from TOML
//! - `format_template` - Positional `%d` placeholder substitution
//!
//! ```
//! use questionnaire_lang::{Locale, LocaleTable, MessageKey};
//!
//! let table = LocaleTable::builtin().unwrap();
//! assert_eq!(table.get(Locale::EnUs, MessageKey::Submit).unwrap(), "Submit");
//! assert_eq!(table.lookup("zh-CN", "back").unwrap(), "返回");
//! ```

mod locale;
pub use locale::Locale;

mod message_key;
pub use message_key::MessageKey;

mod builtin;

mod table;
pub use table::{LocaleTable, Messages, MissingKeyPolicy};

mod format;
pub use format::format_template;

mod error;
pub use error::LangError;
