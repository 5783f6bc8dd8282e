//! Search helpers for the `q=` list filters
//!
//! Matching is case-insensitive and diacritic-insensitive so that
//! "peña" and "Pena" find each other.

use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip combining marks
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// True when any field contains the query; an empty query matches everything
pub fn any_match<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| normalize(field).contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_diacritics() {
        assert_eq!(normalize("Ciudad de México"), "ciudad de mexico");
        assert_eq!(normalize("PEÑA"), "pena");
    }

    #[test]
    fn matches_any_field() {
        let fields = ["ABC123", "Mac Pro", "María García"];
        assert!(any_match(fields, "maria"));
        assert!(any_match(fields, "abc"));
        assert!(!any_match(fields, "lenovo"));
        assert!(any_match(fields, ""));
    }
}
