use serde::Serialize;

use crate::core::catalog::Catalog;
use crate::models::MovieRecord;

/// Criterion value that disables filtering.
pub const ALL_GENRES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn from_criterion(criterion: &str) -> Self {
        if criterion == ALL_GENRES {
            Self::All
        } else {
            Self::Genre(criterion.to_string())
        }
    }

    pub fn criterion(&self) -> &str {
        match self {
            Self::All => ALL_GENRES,
            Self::Genre(g) => g,
        }
    }

    /// Loose match: the genre column only has to contain the criterion,
    /// so "Action" also matches "Action/Adventure".
    pub fn accepts(&self, movie: &MovieRecord) -> bool {
        match self {
            Self::All => true,
            Self::Genre(g) => movie.genre.as_deref().is_some_and(|genre| genre.contains(g.as_str())),
        }
    }
}

pub fn filter_by_genre<'a>(catalog: &'a Catalog, filter: &GenreFilter) -> Vec<&'a MovieRecord> {
    catalog.records().iter().filter(|m| filter.accepts(m)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOption {
    pub value: String,
    pub label: String,
}

/// Options for the genre control: the "All Genres" sentinel first, then every catalog genre.
pub fn genre_options(catalog: &Catalog) -> Vec<GenreOption> {
    let mut options = vec![GenreOption {
        value: ALL_GENRES.to_string(),
        label: "All Genres".to_string(),
    }];
    options.extend(catalog.genres().into_iter().map(|g| GenreOption {
        value: g.clone(),
        label: g,
    }));
    options
}
