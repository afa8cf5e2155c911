use std::collections::HashMap;

/// One theatre record: column name to raw cell value.
///
/// Columns the record is too short to reach are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TheatreRow {
    fields: HashMap<String, String>,
}

impl TheatreRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair headers with values; later duplicates of a header win
    pub fn from_record<'a, H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    pub fn with_field(mut self, column: &str, value: &str) -> Self {
        self.fields.insert(column.to_string(), value.to_string());
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Trimmed value, or "" when the column is absent
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }
}
