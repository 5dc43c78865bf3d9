//! Per-field validation results.

use std::collections::BTreeMap;

/// Field-keyed validation messages for one form.
///
/// An empty set means the form may be submitted. Keys are the form's
/// field enum, so iteration follows field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// The message of the first failing field.
    ///
    /// Forms that show a single banner rather than inline messages use
    /// this as their error text.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        A,
        B,
    }

    #[test]
    fn test_empty_errors_are_submittable() {
        let errors: ValidationErrors<Field> = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.first_message().is_none());
    }

    #[test]
    fn test_first_message_follows_field_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::B, "second");
        errors.insert(Field::A, "first");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first_message(), Some("first"));
        assert_eq!(errors.get(Field::B), Some("second"));
    }

    #[test]
    fn test_clear() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::A, "x");
        errors.clear();
        assert!(!errors.contains(Field::A));
    }
}
