//! Common types used across the service

/// Language used for recommendations when the client does not specify one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Resolve the requested recommendation language.
///
/// Languages are passed through to the model verbatim ("en", "hi", "Tamil"...);
/// a missing or blank value falls back to [`DEFAULT_LANGUAGE`].
pub fn resolve_language(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(language) if !language.is_empty() => language.to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_default() {
        assert_eq!(resolve_language(None), "en");
        assert_eq!(resolve_language(Some("")), "en");
        assert_eq!(resolve_language(Some("   ")), "en");
    }

    #[test]
    fn test_resolve_language_passthrough() {
        assert_eq!(resolve_language(Some("hi")), "hi");
        assert_eq!(resolve_language(Some(" Tamil ")), "Tamil");
    }
}
