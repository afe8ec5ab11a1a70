use serde::Serialize;
use tracing::debug;

use crate::core::aggregate::{summarize, Summary};
use crate::core::catalog::Catalog;
use crate::core::export::build_export;
use crate::core::filter::{filter_by_genre, genre_options, GenreFilter, GenreOption};
use crate::core::selection::{SelectionKey, SelectionSet};
use crate::models::MovieRecord;

/// One checkbox of the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    pub key: SelectionKey,
    pub checked: bool,
    pub label: String,
}

/// Everything needed to draw the screen for the current filter.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub filter: String,
    pub genres: Vec<GenreOption>,
    pub items: Vec<RenderItem>,
    pub summary: Summary,
}

/// Owns the catalog, the selection and the active filter for one browsing session.
///
/// The selection is the only source of checked state; [`Session::render`]
/// only reads it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    selection: SelectionSet,
    filter: GenreFilter,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
            filter: GenreFilter::All,
        }
    }

    #[cfg(test)]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn set_filter(&mut self, criterion: &str) {
        self.filter = GenreFilter::from_criterion(criterion);
        debug!(target: "moviepick::session", filter = %self.filter.criterion(), "Filter changed");
    }

    pub fn visible(&self) -> Vec<&MovieRecord> {
        filter_by_genre(&self.catalog, &self.filter)
    }

    pub fn render(&self) -> View {
        let items = self
            .visible()
            .into_iter()
            .map(|movie| {
                let key = SelectionKey::from(movie);
                RenderItem {
                    checked: self.selection.is_selected(&key),
                    label: movie.label(),
                    key,
                }
            })
            .collect();

        View {
            filter: self.filter.criterion().to_string(),
            genres: genre_options(&self.catalog),
            items,
            summary: self.summary(),
        }
    }

    pub fn is_selected(&self, key: &SelectionKey) -> bool {
        self.selection.is_selected(key)
    }

    pub fn toggle(&mut self, key: SelectionKey, checked: bool) -> Summary {
        debug!(target: "moviepick::session", key = %key, checked, "Selection changed");
        self.selection.set(key, checked);
        self.summary()
    }

    /// Set the checked state of the `index`-th visible movie (0-based).
    /// `None` checked flips the current state. Out-of-range indices return `None`.
    pub fn set_visible(&mut self, index: usize, checked: Option<bool>) -> Option<Summary> {
        let key = self.visible().get(index).map(|m| SelectionKey::from(*m))?;
        let checked = checked.unwrap_or_else(|| !self.is_selected(&key));
        Some(self.toggle(key, checked))
    }

    /// Apply `selected` to every visible movie; movies outside the filter keep their state.
    pub fn select_all_visible(&mut self, selected: bool) -> Summary {
        let keys: Vec<SelectionKey> = self.visible().into_iter().map(SelectionKey::from).collect();
        debug!(target: "moviepick::session", visible = keys.len(), selected, "Select all visible");
        for key in keys {
            self.selection.set(key, selected);
        }
        self.summary()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.catalog, &self.selection)
    }

    pub fn export(&self) -> Option<String> {
        build_export(&self.catalog, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_movies() -> Catalog {
        Catalog::new(vec![
            MovieRecord::new("Die Hard", "1988", "1.5 GB", "Action"),
            MovieRecord::new("Amelie", "2001", "512 MB", "Comedy, Romance"),
            MovieRecord::new("Jumanji", "1995", "900 MB", "Action/Adventure"),
            MovieRecord::new("Alien", "1979", "700 MB", "Horror"),
            MovieRecord::new("Heat", "1995", "2 GB", "Crime"),
        ])
    }

    fn checked_labels(view: &View) -> Vec<&str> {
        view.items
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.label.as_str())
            .collect()
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut session = Session::new(five_movies());
        session.toggle(SelectionKey::new("Amelie", "2001"), true);

        session.set_filter("Horror");
        let view = session.render();
        assert_eq!(view.items.len(), 1);
        assert!(checked_labels(&view).is_empty());

        session.set_filter("All");
        let view = session.render();
        assert_eq!(checked_labels(&view), vec!["Amelie (2001)"]);
        assert_eq!(view.summary.count, 1);
    }

    #[test]
    fn select_all_visible_only_touches_visible() {
        let mut session = Session::new(five_movies());
        session.toggle(SelectionKey::new("Heat", "1995"), true);

        session.set_filter("Action");
        assert_eq!(session.visible().len(), 2);
        let summary = session.select_all_visible(true);
        assert_eq!(summary.count, 3);

        assert!(session.is_selected(&SelectionKey::new("Die Hard", "1988")));
        assert!(session.is_selected(&SelectionKey::new("Jumanji", "1995")));
        assert!(session.is_selected(&SelectionKey::new("Heat", "1995")));
        assert!(!session.is_selected(&SelectionKey::new("Amelie", "2001")));
        assert!(!session.is_selected(&SelectionKey::new("Alien", "1979")));

        session.select_all_visible(false);
        session.set_filter("All");
        assert_eq!(checked_labels(&session.render()), vec!["Heat (1995)"]);
    }

    #[test]
    fn render_is_a_projection() {
        let mut session = Session::new(five_movies());
        session.render();
        session.render();
        assert!(session.selection().is_empty());

        session.set_filter("Crime");
        let view = session.render();
        assert_eq!(view.filter, "Crime");
        assert_eq!(view.genres[0].value, "All");
        assert_eq!(view.items[0].key.as_str(), "Heat (1995)");
        assert!(!view.items[0].checked);
    }

    #[test]
    fn set_visible_uses_filtered_positions() {
        let mut session = Session::new(five_movies());
        session.set_filter("Action");

        let summary = session.set_visible(1, None).unwrap();
        assert_eq!(summary.count, 1);
        assert!(session.is_selected(&SelectionKey::new("Jumanji", "1995")));

        session.set_visible(1, None);
        assert!(!session.is_selected(&SelectionKey::new("Jumanji", "1995")));

        session.set_visible(0, Some(true));
        session.set_visible(0, Some(true));
        assert!(session.is_selected(&SelectionKey::new("Die Hard", "1988")));

        assert!(session.set_visible(2, Some(true)).is_none());
    }

    #[test]
    fn summary_and_export_follow_selection() {
        let mut session = Session::new(five_movies());
        assert!(session.export().is_none());

        session.toggle(SelectionKey::new("Die Hard", "1988"), true);
        let summary = session.toggle(SelectionKey::new("Amelie", "2001"), true);
        assert_eq!(summary.to_string(), "Selected: 2 movies — 2.00 GB");

        let text = session.export().unwrap();
        assert!(text.ends_with("Total Titles: 2\nTotal Size: 2.00 GB"));
    }

    #[test]
    fn empty_catalog_session_is_usable() {
        let mut session = Session::new(Catalog::default());
        assert!(session.render().items.is_empty());
        assert_eq!(session.select_all_visible(true).count, 0);
        assert!(session.export().is_none());
    }
}
