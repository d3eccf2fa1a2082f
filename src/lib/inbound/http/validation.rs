use std::collections::BTreeMap;
use std::fmt::Display;

/// Field name to violation message, sorted by field name. Only the first violation recorded for
/// a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Display) {
        self.0
            .entry(field.into())
            .or_insert_with(|| message.to_string());
    }

    /// Records the error of `result` under `field`, returning the value on success.
    pub fn check<T, E: Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e);
                None
            }
        }
    }

    /// Merges errors collected for a nested object, prefixing every key with `prefix.`.
    pub fn extend_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(format!("{}.{}", prefix, field), message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}
