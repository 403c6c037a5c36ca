//! Narrowing the fetched collection by the search text.

use crate::domain::Hero;

/// Returns the heroes whose name or publisher contains `query`, ignoring case.
///
/// Surrounding whitespace in `query` is ignored. A blank query yields an empty
/// result rather than the whole collection: the coordinator never reaches this
/// stage with a blank query, and an empty answer keeps the two paths consistent.
///
/// The output preserves the order of `collection`.
///
/// # Tracing
///
/// Creates a debug-level span with the collection size and query length.
///
/// # Example
///
/// ```rust
/// use herodex::Hero;
/// use herodex::app::filter::filter_heroes;
///
/// let heroes = vec![
///     Hero::new(620, "Spider-Man", Some("Marvel Comics"), ""),
///     Hero::new(70, "Batman", Some("DC Comics"), ""),
/// ];
/// let matches = filter_heroes(&heroes, "marvel");
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "Spider-Man");
/// ```
#[must_use]
pub fn filter_heroes(collection: &[Hero], query: &str) -> Vec<Hero> {
    let _span = tracing::debug_span!(
        "filter_heroes",
        total_heroes = collection.len(),
        query_len = query.len()
    )
    .entered();

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let filtered: Vec<Hero> = collection
        .iter()
        .filter(|hero| hero.matches_lowercase(&needle))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Hero> {
        vec![
            Hero::new(620, "Spider-Man", Some("Marvel Comics"), ""),
            Hero::new(70, "Batman", Some("DC Comics"), ""),
            Hero::new(644, "Superman", Some("DC Comics"), ""),
            Hero::new(623, "Spider-Woman", Some("Marvel Comics"), ""),
            Hero::new(999, "Nameless", None, ""),
        ]
    }

    #[test]
    fn matches_name_substring() {
        let names: Vec<_> = filter_heroes(&catalog(), "Spider")
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, vec!["Spider-Man", "Spider-Woman"]);
    }

    #[test]
    fn matches_publisher_case_insensitively() {
        let ids: Vec<_> = filter_heroes(&catalog(), "marvel")
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec![620, 623]);
    }

    #[test]
    fn every_match_contains_query() {
        let query = "man";
        for hero in filter_heroes(&catalog(), query) {
            let in_name = hero.name.to_lowercase().contains(query);
            let in_publisher = hero
                .publisher
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(query));
            assert!(in_name || in_publisher, "{} should not match", hero.name);
        }
    }

    #[test]
    fn preserves_collection_order() {
        let ids: Vec<_> = filter_heroes(&catalog(), "dc").into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![70, 644]);
    }

    #[test]
    fn blank_query_yields_empty_collection() {
        assert!(filter_heroes(&catalog(), "").is_empty());
        assert!(filter_heroes(&catalog(), "   ").is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(filter_heroes(&catalog(), "  batman ").len(), 1);
    }

    #[test]
    fn missing_publisher_does_not_match_publisher_query() {
        assert!(filter_heroes(&catalog(), "comics")
            .iter()
            .all(|h| h.id != 999));
    }
}
