use std::collections::BTreeMap;

/// The lines belonging to a single vCard record, before any content-line
/// parsing has taken place.
///
/// A raw record covers everything between a `BEGIN:VCARD` marker and the
/// following `END:VCARD` marker, both markers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub lines: Vec<String>,
}

impl RawRecord {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// A single parsed content line: a normalized property key and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One contact as a mapping from normalized property keys to values.
///
/// Keys are unique within a record. When the same key occurs on several
/// content lines the value parsed last wins. Iteration order is the sorted
/// key order, which keeps downstream column layouts stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    entries: BTreeMap<String, String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a field, replacing any value previously held under its key.
    pub fn insert(&mut self, field: Field) {
        self.entries.insert(field.key, field.value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The keys present in this record, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key/value pairs in sorted key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRecord, Field};

    #[test]
    fn insert_overwrites_existing_key() {
        let mut record = ContactRecord::new();
        record.insert(Field::new("TEL", "12345"));
        record.insert(Field::new("TEL", "67890"));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("TEL"), Some("67890"));
    }

    #[test]
    fn iteration_is_key_sorted() {
        let mut record = ContactRecord::new();
        record.insert(Field::new("TEL", "12345"));
        record.insert(Field::new("EMAIL", "john@x.com"));
        record.insert(Field::new("FN", "John Doe"));

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, ["EMAIL", "FN", "TEL"]);

        let pairs: Vec<(&str, &str)> = record.fields().collect();
        assert_eq!(
            pairs,
            [
                ("EMAIL", "john@x.com"),
                ("FN", "John Doe"),
                ("TEL", "12345"),
            ]
        );
    }

    #[test]
    fn missing_key_is_none() {
        let record = ContactRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.get("FN"), None);
    }
}
