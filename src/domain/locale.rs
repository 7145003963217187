//! Supported interface locales.
//!
//! Two parsing flavours exist: [`Locale::from_str`] is strict and reports
//! unknown codes, [`Locale::from_param`] silently coerces anything unknown to
//! [`Locale::DEFAULT`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a locale code is not supported.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

/// Interface language.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Two-letter code used in URL segments and the `lang` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Parses a route parameter, falling back to the default locale.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: UnknownLocale| {
            log::debug!("{err}, using {}", Self::DEFAULT);
            Self::DEFAULT
        })
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == value)
            .ok_or_else(|| UnknownLocale(value.to_string()))
    }
}
