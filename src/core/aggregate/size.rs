use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([0-9.]+)\s*(GB|MB)$").unwrap());

const MB_PER_GB: f64 = 1024.0;

/// Longest leading decimal number (`12`, `1.5`, `1.` or `.5`), ignoring anything after it.
fn parse_leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    s[..end].parse::<f64>().ok()
}

/// Parse a size column such as `"1.5 GB"` or `"512mb"` into gigabytes.
/// Anything else, including an empty magnitude, gives `None`.
pub fn parse_size_gb(size: &str) -> Option<f64> {
    let caps = SIZE_RE.captures(size)?;
    let magnitude = parse_leading_float(caps.get(1)?.as_str())?;
    let unit = caps.get(2)?.as_str();
    if unit.eq_ignore_ascii_case("MB") {
        Some(magnitude / MB_PER_GB)
    } else {
        Some(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gigabytes_and_megabytes() {
        assert_eq!(parse_size_gb("1.5 GB"), Some(1.5));
        assert_eq!(parse_size_gb("512 MB"), Some(0.5));
        assert_eq!(parse_size_gb("700MB"), Some(700.0 / 1024.0));
    }

    #[test]
    fn unit_is_case_insensitive() {
        assert_eq!(parse_size_gb("2 gb"), parse_size_gb("2 GB"));
        assert_eq!(parse_size_gb("1024 mB"), Some(1.0));
    }

    #[test]
    fn malformed_sizes_do_not_parse() {
        assert_eq!(parse_size_gb("1.5 TB"), None);
        assert_eq!(parse_size_gb("about 2 GB"), None);
        assert_eq!(parse_size_gb(" GB"), None);
        assert_eq!(parse_size_gb(". GB"), None);
        assert_eq!(parse_size_gb(""), None);
    }

    #[test]
    fn extra_dots_keep_leading_number() {
        assert_eq!(parse_size_gb("1.2.3 GB"), Some(1.2));
    }
}
