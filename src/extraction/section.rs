use std::borrow::Cow;

/// Trimmed text between the first `start` marker and the earliest of `ends`.
///
/// Returns `None` when `start` does not occur. When no end marker follows
/// the start marker, the section runs to the end of `text`.
pub fn extract_between<'a>(text: &'a str, start: &str, ends: &[&str]) -> Option<&'a str> {
    let idx = text.find(start)?;
    let rest = &text[idx + start.len()..];
    let end = ends
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Marker-bounded extraction with HTML entities decoded.
///
/// Total: an absent start marker yields an empty string.
pub fn extract_section(text: &str, start: &str, end: &str) -> String {
    extract_between(text, start, &[end])
        .map(|section| unescape(section).into_owned())
        .unwrap_or_default()
}

/// Decode HTML entities (`&lt;`, `&amp;`, numeric references, ...).
pub fn unescape(section: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_between_markers() {
        let text = "prefix START  body text  END suffix";
        assert_eq!(extract_section(text, "START", "END"), "body text");
    }

    #[test]
    fn test_missing_start_marker_yields_empty() {
        assert_eq!(extract_section("nothing here", "START", "END"), "");
        assert_eq!(extract_between("nothing here", "START", &["END"]), None);
    }

    #[test]
    fn test_missing_end_marker_runs_to_end() {
        let text = "head START tail of the log \n";
        assert_eq!(extract_section(text, "START", "END"), "tail of the log");
    }

    #[test]
    fn test_uses_first_start_marker() {
        let text = "A one B A two B";
        assert_eq!(extract_section(text, "A", "B"), "one");
    }

    #[test]
    fn test_end_marker_searched_after_start() {
        let text = "END before START inside END";
        assert_eq!(extract_section(text, "START", "END"), "inside");
    }

    #[test]
    fn test_earliest_of_several_end_markers_wins() {
        let text = "S alpha X beta Y";
        assert_eq!(extract_between(text, "S", &["Y", "X"]), Some("alpha"));
    }

    #[test]
    fn test_decodes_entities() {
        let text = "S path &lt;/var/crash&gt; &amp; more E";
        assert_eq!(extract_section(text, "S", "E"), "path </var/crash> & more");
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let text = "x S same &quot;value&quot; E y";
        let first = extract_section(text, "S", "E");
        let second = extract_section(text, "S", "E");
        assert_eq!(first, second);
        assert_eq!(first, "same \"value\"");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_section("", "S", "E"), "");
    }
}
