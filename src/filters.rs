//! Email search criteria and their canonical query-string encoding.

use crate::constants::MAX_RESULTS_LIMIT;

/// The filter form state, consumed at fetch time. Mutated by input
/// events only; a fetch sees an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text sender query from the filter form
    pub query: String,
    /// Result cap, always positive
    pub max_results: u32,
    pub is_unread: bool,
    pub include_spam: bool,
    /// Inclusive ISO date bound, empty = absent
    pub date_after: String,
    /// Inclusive ISO date bound, empty = absent
    pub date_before: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_results: 20,
            is_unread: false,
            include_spam: false,
            date_after: String::new(),
            date_before: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Clamp the result cap into `1..=MAX_RESULTS_LIMIT`. Called after
    /// every edit so the invariant "cap is always positive" holds.
    pub fn clamp_max_results(&mut self) {
        self.max_results = self.max_results.clamp(1, MAX_RESULTS_LIMIT);
    }

    /// Canonical key-value pairs for the fetch query string.
    ///
    /// `max_results`, `is_unread` and `include_spam` are always present.
    /// `sender` (the independent search box), `query` and the date
    /// bounds are omitted entirely when empty rather than sent as empty
    /// strings. Pair order is fixed for determinism.
    pub fn to_query_pairs(&self, sender_search: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("max_results", self.max_results.to_string()),
            ("is_unread", self.is_unread.to_string()),
            ("include_spam", self.include_spam.to_string()),
        ];
        if !sender_search.is_empty() {
            pairs.push(("sender", sender_search.to_string()));
        }
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if !self.date_after.is_empty() {
            pairs.push(("date_after", self.date_after.clone()));
        }
        if !self.date_before.is_empty() {
            pairs.push(("date_before", self.date_before.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pairs: &[(&'static str, String)]) -> String {
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[test]
    fn test_default_criteria_encode_exactly_three_pairs() {
        let criteria = FilterCriteria::default();
        let pairs = criteria.to_query_pairs("");
        assert_eq!(
            encode(&pairs),
            "max_results=20&is_unread=false&include_spam=false"
        );
    }

    #[test]
    fn test_empty_date_bounds_are_omitted() {
        let criteria = FilterCriteria {
            date_after: "2024-01-01".to_string(),
            ..Default::default()
        };
        let pairs = criteria.to_query_pairs("");
        assert!(pairs.iter().any(|(k, v)| *k == "date_after" && v == "2024-01-01"));
        assert!(!pairs.iter().any(|(k, _)| *k == "date_before"));
    }

    #[test]
    fn test_sender_search_merged_when_non_empty() {
        let criteria = FilterCriteria {
            query: "billing".to_string(),
            ..Default::default()
        };

        let pairs = criteria.to_query_pairs("alice@example.com");
        // Both sender and query are sent; neither takes precedence
        assert!(
            pairs
                .iter()
                .any(|(k, v)| *k == "sender" && v == "alice@example.com")
        );
        assert!(pairs.iter().any(|(k, v)| *k == "query" && v == "billing"));

        let pairs = criteria.to_query_pairs("");
        assert!(!pairs.iter().any(|(k, _)| *k == "sender"));
    }

    #[test]
    fn test_all_fields_populated() {
        let criteria = FilterCriteria {
            query: "q".to_string(),
            max_results: 50,
            is_unread: true,
            include_spam: true,
            date_after: "2024-01-01".to_string(),
            date_before: "2024-02-01".to_string(),
        };
        let pairs = criteria.to_query_pairs("bob@example.com");
        assert_eq!(
            encode(&pairs),
            "max_results=50&is_unread=true&include_spam=true\
             &sender=bob@example.com&query=q\
             &date_after=2024-01-01&date_before=2024-02-01"
        );
    }

    #[test]
    fn test_clamp_max_results() {
        let mut criteria = FilterCriteria {
            max_results: 0,
            ..Default::default()
        };
        criteria.clamp_max_results();
        assert_eq!(criteria.max_results, 1);

        criteria.max_results = 5000;
        criteria.clamp_max_results();
        assert_eq!(criteria.max_results, MAX_RESULTS_LIMIT);
    }
}
