//! QueryParams - The raw, unordered request parameters
//!
//! Keys are kept sorted so that two requests carrying the same parameters
//! in a different order produce the same fingerprint.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a parameter (last write wins)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key`, treating an empty string as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Copy without `key`
    pub fn without(&self, key: &str) -> Self {
        let mut copy = self.clone();
        copy.values.remove(key);
        copy
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_present_but_not_non_empty() {
        let params = QueryParams::new().with("job_class", "");
        assert!(params.contains("job_class"));
        assert_eq!(params.get("job_class"), Some(""));
        assert_eq!(params.get_non_empty("job_class"), None);
    }

    #[test]
    fn test_order_independent() {
        let a: QueryParams = [("b", "2"), ("a", "1")].into_iter().collect();
        let b: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.iter().next(), Some(("a", "1")));
    }

    #[test]
    fn test_without() {
        let params = QueryParams::new().with("page", "2").with("search", "x");
        let stripped = params.without("page");
        assert!(!stripped.contains("page"));
        assert!(params.contains("page"));
    }
}
