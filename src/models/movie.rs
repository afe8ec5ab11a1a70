use serde::Serialize;

/// Text shown in place of a column the CSV row did not provide.
pub const MISSING_FIELD: &str = "undefined";

/// One catalog row. Columns absent from a malformed row stay `None` and are
/// displayed as [`MISSING_FIELD`] wherever they surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub year: Option<String>, // e.g., 1999
    pub size: Option<String>, // e.g., 1.5 GB, 700 MB
    pub genre: Option<String>, // e.g., Action, Drama
}

impl MovieRecord {
    #[cfg(test)]
    pub fn new(title: &str, year: &str, size: &str, genre: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            year: Some(year.to_string()),
            size: Some(size.to_string()),
            genre: Some(genre.to_string()),
        }
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn year_text(&self) -> &str {
        self.year.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn size_text(&self) -> &str {
        self.size.as_deref().unwrap_or(MISSING_FIELD)
    }

    /// Display label, `"{title} ({year})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title_text(), self.year_text())
    }

    pub fn matches(&self, title: &str, year: &str) -> bool {
        self.title.as_deref() == Some(title) && self.year.as_deref() == Some(year)
    }
}
