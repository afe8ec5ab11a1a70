use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::aggregate::parse_size_gb;
use crate::core::catalog::Catalog;
use crate::core::selection::SelectionSet;
use crate::models::MovieRecord;
use crate::utils::MoviepickResult;

fn export_line(movie: &MovieRecord) -> String {
    format!("{} ({}) - {}", movie.title_text(), movie.year_text(), movie.size_text())
}

/// Build the export text for the checked entries, or `None` when nothing is checked.
///
/// Keys that do not resolve to a catalog record are dropped, and the totals
/// cover only the lines that made it into the file.
pub fn build_export(catalog: &Catalog, selection: &SelectionSet) -> Option<String> {
    let keys: Vec<_> = selection.selected_keys().collect();
    if keys.is_empty() {
        return None;
    }

    let resolved: Vec<&MovieRecord> = keys
        .iter()
        .filter_map(|key| {
            let found = key.parse().and_then(|(title, year)| catalog.find(title, year));
            if found.is_none() {
                debug!(target: "moviepick::export", key = %key, "Skipping unresolved selection");
            }
            found
        })
        .collect();

    let total_size_gb: f64 = resolved
        .iter()
        .filter_map(|movie| movie.size.as_deref().and_then(parse_size_gb))
        .sum();

    let mut lines: Vec<String> = resolved.iter().map(|m| export_line(m)).collect();
    lines.push(String::new());
    lines.push(format!("Total Titles: {}", resolved.len()));
    lines.push(format!("Total Size: {total_size_gb:.2} GB"));

    Some(lines.join("\n"))
}

/// Write the export artifact. No text means no file.
pub async fn write_export(
    text: Option<String>,
    output_dir: &Path,
    file_name: &str,
) -> MoviepickResult<Option<PathBuf>> {
    let Some(text) = text else {
        info!(target: "moviepick::export", "Nothing selected: skipping export");
        return Ok(None);
    };

    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(file_name);
    tokio::fs::write(&path, text).await?;
    info!(target: "moviepick::export", path = %path.display(), "Export written");
    Ok(Some(path))
}
