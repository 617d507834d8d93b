//! Filter mapping
//!
//! Ordered `field -> value` pairs. Only non-empty values reach the query
//! string; an all-empty filter yields the bare listing path. Two filters are
//! equal when their non-empty contents are equal, which is what decides
//! whether a list must be fetched again.

use urlencoding::encode;

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    fields: Vec<(String, String)>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ListFilter::set`]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder form for optional values; `None` clears the field
    pub fn with_opt<V: ToString>(mut self, field: impl Into<String>, value: Option<V>) -> Self {
        let value = value.map(|v| v.to_string()).unwrap_or_default();
        self.set(field, value);
        self
    }

    /// Set or replace a field, keeping its original position
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into().trim().to_string();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Non-empty value of a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, value)| name == field && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }

    /// Fields that will be serialized, in insertion order
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// `a=1&b=2`, URL-encoded, empty fields skipped
    pub fn to_query_string(&self) -> String {
        self.active()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the query string to a path, if there is one
    pub fn apply_to(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

impl PartialEq for ListFilter {
    fn eq(&self, other: &Self) -> bool {
        let mut mine: Vec<_> = self.active().collect();
        let mut theirs: Vec<_> = other.active().collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl Eq for ListFilter {}
