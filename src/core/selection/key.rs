use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::MovieRecord;

static KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*) \(([0-9]{4})\)$").unwrap());

/// Identity of a movie in the selection: `"{title} ({year})"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SelectionKey(String);

impl SelectionKey {
    pub fn new(title: &str, year: &str) -> Self {
        Self(format!("{title} ({year})"))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover `(title, year)`. Keys whose year is not four digits do not parse.
    pub fn parse(&self) -> Option<(&str, &str)> {
        let caps = KEY_RE.captures(&self.0)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

impl From<&MovieRecord> for SelectionKey {
    fn from(movie: &MovieRecord) -> Self {
        Self::new(movie.title_text(), movie.year_text())
    }
}

impl From<&str> for SelectionKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for SelectionKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
