pub mod size;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::selection::SelectionSet;

pub use size::parse_size_gb;

/// Live totals over the checked entries of a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_size_gb: f64,
}

impl Summary {
    pub fn noun(&self) -> &'static str {
        if self.count == 1 { "movie" } else { "movies" }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selected: {} {} — {:.2} GB",
            self.count,
            self.noun(),
            self.total_size_gb
        )
    }
}

/// Count every checked key; add size only for keys that resolve to a catalog
/// record whose size column parses. The two totals are intentionally independent.
pub fn summarize(catalog: &Catalog, selection: &SelectionSet) -> Summary {
    let mut summary = Summary::default();

    for key in selection.selected_keys() {
        summary.count += 1;

        let size = key
            .parse()
            .and_then(|(title, year)| catalog.find(title, year))
            .and_then(|movie| movie.size.as_deref())
            .and_then(parse_size_gb);

        match size {
            Some(gb) => summary.total_size_gb += gb,
            None => debug!(target: "moviepick::aggregate", key = %key, "No size contribution"),
        }
    }

    summary
}
