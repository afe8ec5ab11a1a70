pub mod parser;
pub mod source;

use std::collections::BTreeSet;

use crate::models::MovieRecord;

pub use source::{load_catalog, source_from_config};

/// The full list of movies, in file order. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with exactly this title and year.
    pub fn find(&self, title: &str, year: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|m| m.matches(title, year))
    }

    /// Distinct genre labels across the catalog, sorted.
    pub fn genres(&self) -> Vec<String> {
        let mut set: BTreeSet<String> = BTreeSet::new();
        for genre in self.records.iter().filter_map(|m| m.genre.as_deref()) {
            for g in genre.split(',') {
                let g = g.trim();
                let g = g.strip_prefix('"').unwrap_or(g);
                let g = g.strip_suffix('"').unwrap_or(g);
                // Blank labels (e.g. from "Action,") are not offered as options.
                if !g.is_empty() {
                    set.insert(g.to_string());
                }
            }
        }
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            MovieRecord::new("Heat", "1995", "2.1 GB", "Crime, Thriller"),
            MovieRecord::new("Alien", "1979", "700 MB", "Horror, Sci-Fi"),
            MovieRecord::new("Heat", "1995", "9 GB", "Crime"),
            MovieRecord {
                title: Some("Broken".to_string()),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn find_first_match_wins() {
        let catalog = sample();
        assert_eq!(catalog.find("Heat", "1995").and_then(|m| m.size.as_deref()), Some("2.1 GB"));
        assert!(catalog.find("Heat", "1996").is_none());
    }

    #[test]
    fn genres_are_sorted_and_deduplicated() {
        assert_eq!(sample().genres(), vec!["Crime", "Horror", "Sci-Fi", "Thriller"]);
    }

    #[test]
    fn blank_genre_labels_are_skipped() {
        let catalog = Catalog::new(vec![
            MovieRecord::new("Speed", "1994", "1 GB", "Action,"),
            MovieRecord::new("Quiet", "2000", "1 GB", ""),
        ]);
        assert_eq!(catalog.genres(), vec!["Action"]);
    }
}
