use std::collections::BTreeMap;

use shared::domain::AnswerSet;
use views::form::{FieldControl, FormField};

/// Values the user has entered, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a radio value or replaces a text field's contents.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn clear(&mut self, field: &str) {
        self.values.remove(field);
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Answer set for the rendered `fields`. Text fields always contribute;
    /// a radio group contributes only when one of its values is selected.
    pub fn collect(&self, fields: &[FormField]) -> AnswerSet {
        fields
            .iter()
            .filter_map(|field| {
                let value = self.value(&field.name);
                match field.control {
                    FieldControl::Text => Some(value.unwrap_or_default().to_string()),
                    FieldControl::Choice(_) => value
                        .filter(|value| field.accepts(value))
                        .map(str::to_string),
                }
                .map(|value| (field.name.clone(), value))
            })
            .collect()
    }

    /// Required fields without a usable value, in form order.
    pub fn missing_required(&self, fields: &[FormField]) -> Vec<String> {
        fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                !self
                    .value(&field.name)
                    .is_some_and(|value| !value.is_empty() && field.accepts(value))
            })
            .map(|field| field.name.clone())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
