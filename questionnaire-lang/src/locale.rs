use std::fmt;
use std::str::FromStr;

use crate::LangError;

/// A supported locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    /// American English.
    #[default]
    EnUs,

    /// Simplified Chinese.
    ZhCn,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Self::EnUs, Self::ZhCn];

    /// The locale identifier, e.g. `"en-US"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| LangError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::ZhCn);
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "fr-FR".parse::<Locale>(),
            Err(LangError::UnknownLocale(code)) if code == "fr-FR"
        ));
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::EnUs);
    }
}
