use crate::models::MovieRecord;

/// Split a CSV line on the commas that sit outside a pair of double quotes.
///
/// A comma is a separator when an even number of `"` follow it on the line,
/// which is the same as "not inside a quoted field" for well-formed rows.
pub fn split_quoted_fields(line: &str) -> Vec<&str> {
    let total_quotes = line.matches('"').count();
    let mut fields = Vec::new();
    let mut seen_quotes = 0;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => seen_quotes += 1,
            ',' if (total_quotes - seen_quotes) % 2 == 0 => {
                fields.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);
    fields
}

/// Drop one leading and one trailing quote, then surrounding whitespace.
pub fn clean_field(field: &str) -> String {
    let f = field.strip_prefix('"').unwrap_or(field);
    let f = f.strip_suffix('"').unwrap_or(f);
    f.trim().to_string()
}

pub fn parse_line(line: &str) -> MovieRecord {
    let mut fields = split_quoted_fields(line).into_iter().map(clean_field);
    MovieRecord {
        title: fields.next(),
        year: fields.next(),
        size: fields.next(),
        genre: fields.next(),
    }
}

/// Parse the raw CSV text: header row discarded, one record per remaining line.
/// Rows are not validated; short rows yield records with absent columns.
pub fn parse_csv(raw: &str) -> Vec<MovieRecord> {
    raw.trim().split('\n').skip(1).map(parse_line).collect()
}
