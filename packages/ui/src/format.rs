//! Display helpers for values the backend hands us raw.

/// Card-length preview: the first `max` characters, with `...` appended when
/// anything was cut. Counts characters, not bytes, so multibyte text never
/// splits mid-character.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Locale-formatted rendering of an ISO-8601 timestamp from the backend.
/// Unparseable input comes back unchanged rather than as an empty cell.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("hello", 100), "hello");
        let exactly = "x".repeat(100);
        assert_eq!(truncate(&exactly, 100), exactly);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let long = "a".repeat(101);
        let cut = truncate(&long, 100);
        assert_eq!(cut.len(), 103);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"a".repeat(100)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let long = "é".repeat(150);
        let cut = truncate(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn timestamps_render_and_garbage_passes_through() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00.123456Z"),
            "2024-01-15 10:30"
        );
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert_eq!(format_timestamp(""), "");
    }
}
