//! File name grammar shared by every collection.
//!
//! ```text
//! {date-}{stem}.{locale}.mdx
//! ```
//!
//! `date` is an ISO `YYYY-MM-DD` stamp present only for dated collections
//! (articles), `stem` is the slug of an item or the reserved name of a
//! singleton/list page, and `locale` is a two letter lowercase code.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fs::CONTENT_EXTENSION;

static FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<stem>.+)\.(?P<locale>[^.]+)\.mdx$").expect("file name grammar is valid")
});

static DATED_STEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<date>\d{4}-\d{2}-\d{2})-(?P<slug>.+)$").expect("dated stem grammar is valid")
});

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug grammar is valid"));

static LOCALE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]{2}$").expect("locale grammar is valid"));

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FileNameError {
    #[error("Malformed content file name `{name}`: {reason}")]
    Malformed { name: String, reason: &'static str },
    #[error("Unsupported locale `{locale}` found in file name `{name}`")]
    UnsupportedLocale { name: String, locale: String },
    #[error("Invalid slug `{0}`: expected lowercase letters, digits and single hyphens")]
    InvalidSlug(String),
}

/// Whether a collection prefixes its file names with a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dating {
    Dated,
    Undated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    pub date: Option<NaiveDate>,
    pub stem: String,
    pub locale: String,
}

#[must_use]
pub fn is_valid_locale(locale: &str) -> bool {
    LOCALE.is_match(locale)
}

/// Checks a slug chosen for a new or renamed file. Existing files are read
/// whatever their stem looks like.
pub fn validate_slug(slug: &str) -> Result<(), FileNameError> {
    if SLUG.is_match(slug) {
        Ok(())
    } else {
        Err(FileNameError::InvalidSlug(slug.to_owned()))
    }
}

impl FileName {
    #[must_use]
    pub fn dated(date: NaiveDate, slug: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            stem: slug.into(),
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn undated(stem: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            date: None,
            stem: stem.into(),
            locale: locale.into(),
        }
    }

    /// Decodes `name`, checking the locale against `supported` unless it is empty.
    pub fn parse(name: &str, dating: Dating, supported: &[String]) -> Result<Self, FileNameError> {
        let malformed = |reason| FileNameError::Malformed {
            name: name.to_owned(),
            reason,
        };
        let captures = FILE_NAME
            .captures(name)
            .ok_or_else(|| malformed("expected `{stem}.{locale}.mdx`"))?;
        let locale = &captures["locale"];
        if !is_valid_locale(locale) {
            return Err(malformed("locale token must be two lowercase letters"));
        }
        if !supported.is_empty() && !supported.iter().any(|s| s == locale) {
            return Err(FileNameError::UnsupportedLocale {
                name: name.to_owned(),
                locale: locale.to_owned(),
            });
        }

        let stem = &captures["stem"];
        let (date, stem) = match dating {
            Dating::Undated => (None, stem),
            Dating::Dated => {
                let dated = DATED_STEM
                    .captures(stem)
                    .ok_or_else(|| malformed("expected a `YYYY-MM-DD-` date prefix"))?;
                let date = NaiveDate::parse_from_str(&dated["date"], DATE_FORMAT)
                    .map_err(|_| malformed("date prefix is not a calendar date"))?;
                let slug = dated.name("slug").map_or("", |m| m.as_str());
                (Some(date), slug)
            }
        };

        Ok(Self {
            date,
            stem: stem.to_owned(),
            locale: locale.to_owned(),
        })
    }

    #[must_use]
    pub fn encode(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{}-{}.{}.{CONTENT_EXTENSION}",
                date.format(DATE_FORMAT),
                self.stem,
                self.locale
            ),
            None => format!("{}.{}.{CONTENT_EXTENSION}", self.stem, self.locale),
        }
    }
}

pub fn locale(name: &str, supported: &[String]) -> Result<String, FileNameError> {
    FileName::parse(name, Dating::Undated, supported).map(|f| f.locale)
}

pub fn slug(name: &str, dating: Dating) -> Result<String, FileNameError> {
    FileName::parse(name, dating, &[]).map(|f| f.stem)
}

pub fn date(name: &str) -> Result<NaiveDate, FileNameError> {
    FileName::parse(name, Dating::Dated, &[]).map(|f| f.date.expect("dated names carry a date"))
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{date, locale, slug, validate_slug, Dating, FileName, FileNameError};

    macro_rules! s {
        ($v:literal) => {
            $v.to_string()
        };
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn article_round_trip() {
        let name = FileName::dated(ymd(2024, 1, 1), "hello-world", "en").encode();
        assert_eq!("2024-01-01-hello-world.en.mdx", name);
        assert_eq!("hello-world", slug(&name, Dating::Dated).unwrap());
        assert_eq!(ymd(2024, 1, 1), date(&name).unwrap());
        assert_eq!("en", locale(&name, &[]).unwrap());
    }

    #[test]
    fn slug_may_look_like_a_date() {
        let name = FileName::dated(ymd(2023, 12, 1), "2023-recap", "fr").encode();
        assert_eq!("2023-recap", slug(&name, Dating::Dated).unwrap());
    }

    #[test]
    fn undated_names() {
        assert_eq!("rust", slug("rust.en.mdx", Dating::Undated).unwrap());
        assert_eq!("_tags", slug("_tags.pt.mdx", Dating::Undated).unwrap());
        assert_eq!(
            FileName::undated("home", "es"),
            FileName::parse("home.es.mdx", Dating::Undated, &[]).unwrap()
        );
    }

    #[test]
    fn unsupported_locale() {
        let supported = vec![s!("en"), s!("fr")];
        assert_eq!(
            Err(FileNameError::UnsupportedLocale {
                name: s!("rust.de.mdx"),
                locale: s!("de"),
            }),
            locale("rust.de.mdx", &supported)
        );
        assert_eq!(Ok(s!("fr")), locale("rust.fr.mdx", &supported));
    }

    #[test]
    fn malformed_tokens_are_reported() {
        assert!(matches!(
            FileName::parse("rust.english.mdx", Dating::Undated, &[]),
            Err(FileNameError::Malformed { .. })
        ));
        assert!(matches!(
            FileName::parse("rust.mdx", Dating::Undated, &[]),
            Err(FileNameError::Malformed { .. })
        ));
        assert!(matches!(
            FileName::parse("hello.en.mdx", Dating::Dated, &[]),
            Err(FileNameError::Malformed { .. })
        ));
        assert!(matches!(
            FileName::parse("2024-13-40-hello.en.mdx", Dating::Dated, &[]),
            Err(FileNameError::Malformed { .. })
        ));
    }

    #[test]
    fn slug_grammar() {
        assert_eq!(Ok(()), validate_slug("hello-world-2"));
        for bad in ["", "Hello", "a--b", "-a", "a-", "a b", "a.en"] {
            assert_eq!(Err(FileNameError::InvalidSlug(bad.to_owned())), validate_slug(bad));
        }
    }
}
