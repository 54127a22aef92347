use std::collections::HashMap;

/// In-progress field values for the active form, keyed by field name.
///
/// Values are plain strings regardless of field kind; the kind only affects
/// how the value is rendered and which keystrokes an input accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    /// Create an empty value map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the value for a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value for a field, if one was ever set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get the value for a field, or `""` if none was set.
    ///
    /// Renderers use this so inputs stay fully controlled by stored state.
    pub fn value_of(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Check if a field holds a non-empty value.
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get the number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all name-value pairs (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut values = FieldValues::new();
        values.set("full_name", "Ann");
        assert_eq!(values.get("full_name"), Some("Ann"));
        assert_eq!(values.get("email"), None);
    }

    #[test]
    fn value_of_defaults_to_empty() {
        let values = FieldValues::new();
        assert_eq!(values.value_of("missing"), "");
    }

    #[test]
    fn is_filled_requires_non_empty() {
        let mut values = FieldValues::new();
        values.set("email", "");
        assert!(!values.is_filled("email"));
        values.set("email", "a@b.com");
        assert!(values.is_filled("email"));
        assert!(!values.is_filled("never_set"));
    }

    #[test]
    fn clear_removes_everything() {
        let mut values = FieldValues::new();
        values.set("a", "1");
        values.set("b", "2");
        values.clear();
        assert!(values.is_empty());
    }
}
