//! Ordered form parameters for POST bodies.
//!
//! # Design
//! Parameters are kept in a `Vec` of owned pairs rather than a hash map so
//! insertion order survives into the encoded body. `put` on an existing name
//! overwrites the value in place; the name keeps its original position.

use url::form_urlencoded;

/// Ordered name → value mapping used to populate a POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpParameters {
    entries: Vec<(String, String)>,
}

impl HttpParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name`, or overwrite its value if already present.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as `application/x-www-form-urlencoded`, in insertion order.
    pub fn to_form_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for HttpParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = HttpParameters::new();
        for (name, value) in iter {
            params.put(name, value);
        }
        params
    }
}
