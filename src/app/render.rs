use crate::config::OutputFormat;
use crate::core::filter::GenreOption;
use crate::core::session::View;
use crate::utils::MoviepickResult;

pub fn view_as_text(view: &View) -> String {
    let mut out = format!("Genre: {}\n", view.filter);
    if view.items.is_empty() {
        out.push_str("  (no movies)\n");
    }
    for (idx, item) in view.items.iter().enumerate() {
        let mark = if item.checked { 'x' } else { ' ' };
        out.push_str(&format!("[{mark}] {}. {}\n", idx + 1, item.label));
    }
    out.push_str(&view.summary.to_string());
    out
}

pub fn render_view(view: &View, format: OutputFormat) -> MoviepickResult<String> {
    match format {
        OutputFormat::Text => Ok(view_as_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

pub fn render_genres(options: &[GenreOption], active: &str, format: OutputFormat) -> MoviepickResult<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(options)?);
    }
    let lines: Vec<String> = options
        .iter()
        .map(|o| {
            let marker = if o.value == active { '*' } else { ' ' };
            format!("{marker} {} ({})", o.label, o.value)
        })
        .collect();
    Ok(lines.join("\n"))
}
