//! Filter predicates for list queries.
//!
//! The back-office API accepts Ransack-style predicate parameters
//! (`q[name_cont]=acme`, `q[region_id_eq]=3`, `q[status_in][]=open`).
//! A [`FilterSet`] accumulates named predicates and serializes them
//! opaquely into the request query string; the server interprets them.

use std::collections::BTreeMap;

/// A single filter value: scalar text, scalar integer, or a list.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Text value.
    Str(String),
    /// Integer value (ids, counts).
    Int(i64),
    /// List value, serialized as repeated `q[name][]` parameters.
    List(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value as i64)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::List(values)
    }
}

/// An open, ordered mapping of named filter predicates.
///
/// Predicate names carry their operator as a suffix (`_cont`, `_eq`,
/// `_gteq`, `_lteq`, `_in`). The set is handed opaquely to the remote
/// data source; nothing here is interpreted client-side.
///
/// # Example
///
/// ```
/// use opsboard_api::query::FilterSet;
///
/// let filters = FilterSet::new()
///     .contains("name", "acme")
///     .eq("region_id", 3)
///     .gteq("created_at", "2026-01-01")
///     .one_of("status", ["open", "assigned"]);
///
/// assert_eq!(filters.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    entries: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substring-match predicate: `q[<field>_cont]=<value>`.
    pub fn contains(mut self, field: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.entries.insert(
            format!("{}_cont", field.as_ref()),
            FilterValue::Str(value.into()),
        );
        self
    }

    /// Adds an equality predicate: `q[<field>_eq]=<value>`.
    pub fn eq(mut self, field: impl AsRef<str>, value: impl Into<FilterValue>) -> Self {
        self.entries
            .insert(format!("{}_eq", field.as_ref()), value.into());
        self
    }

    /// Adds a greater-than-or-equal predicate: `q[<field>_gteq]=<value>`.
    ///
    /// Paired with [`lteq`](Self::lteq) this expresses date ranges.
    pub fn gteq(mut self, field: impl AsRef<str>, value: impl Into<FilterValue>) -> Self {
        self.entries
            .insert(format!("{}_gteq", field.as_ref()), value.into());
        self
    }

    /// Adds a less-than-or-equal predicate: `q[<field>_lteq]=<value>`.
    pub fn lteq(mut self, field: impl AsRef<str>, value: impl Into<FilterValue>) -> Self {
        self.entries
            .insert(format!("{}_lteq", field.as_ref()), value.into());
        self
    }

    /// Adds a membership predicate: repeated `q[<field>_in][]=<value>`.
    pub fn one_of<I, V>(mut self, field: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entries.insert(
            format!("{}_in", field.as_ref()),
            FilterValue::List(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Adds a predicate under its full name (escape hatch).
    ///
    /// Use this for predicates the typed constructors don't cover; the
    /// name is passed through as-is.
    pub fn raw(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Removes a predicate by its full name.
    pub fn remove(&mut self, name: &str) -> Option<FilterValue> {
        self.entries.remove(name)
    }

    /// Removes all predicates.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if no predicates are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of predicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes the set into `q[...]`-style query pairs.
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            match value {
                FilterValue::Str(s) => pairs.push((format!("q[{name}]"), s.clone())),
                FilterValue::Int(n) => pairs.push((format!("q[{name}]"), n.to_string())),
                FilterValue::List(items) => {
                    for item in items {
                        pairs.push((format!("q[{name}][]"), item.clone()));
                    }
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_names() {
        let filters = FilterSet::new()
            .contains("name", "acme")
            .eq("region_id", 3)
            .gteq("created_at", "2026-01-01");

        let names: Vec<_> = filters.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, ["created_at_gteq", "name_cont", "region_id_eq"]);
    }

    #[test]
    fn test_query_pairs() {
        let filters = FilterSet::new().contains("name", "acme").eq("zone_id", 7);
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("q[name_cont]".to_string(), "acme".to_string()),
                ("q[zone_id_eq]".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_values_repeat() {
        let filters = FilterSet::new().one_of("status", ["open", "assigned"]);
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("q[status_in][]".to_string(), "open".to_string()),
                ("q[status_in][]".to_string(), "assigned".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut filters = FilterSet::new().contains("name", "acme").eq("zone_id", 7);
        assert!(filters.remove("name_cont").is_some());
        assert_eq!(filters.len(), 1);
        filters.clear();
        assert!(filters.is_empty());
    }
}
