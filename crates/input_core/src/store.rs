//! Caller-side store of typed input values.
//!
//! Controlled inputs never keep their value; whoever renders them does. This
//! store is that owner for a set of named fields: it hands the current value
//! to each control and takes the emitted replacement back.

use std::collections::BTreeMap;

use crate::state::FieldState;
use crate::traits::ValueHolder;
use crate::value::InputValue;

/// Named field values with per-field revision tracking.
///
/// # Example
///
/// ```
/// use input_core::{InputValue, ValueStore};
///
/// let mut store = ValueStore::new();
/// store.ensure_initial("email", InputValue::text("a@b.c"));
/// store.set("email", InputValue::text("x@y.z"));
///
/// assert_eq!(store.get("email").and_then(InputValue::as_str), Some("x@y.z"));
/// assert_eq!(store.revision("email"), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ValueStore {
    fields: BTreeMap<String, FieldState>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns `true` if the field has ever been written or seeded.
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Current value of a field; `None` when absent or unknown.
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name).and_then(|st| st.value.as_ref())
    }

    /// Overwrite a field's value and bump its revision.
    ///
    /// The revision moves even when the new value equals the old one, so an
    /// observer can tell a re-emission from silence.
    pub fn set(&mut self, name: &str, value: Option<InputValue>) {
        let st = self.fields.entry(name.to_string()).or_default();
        st.value = value;
        st.value_rev = st.value_rev.wrapping_add(1);
    }

    /// Seed a field if it is missing. Existing fields are left untouched.
    pub fn ensure_initial(&mut self, name: &str, initial: Option<InputValue>) {
        self.fields
            .entry(name.to_string())
            .or_insert_with(|| FieldState {
                value: initial,
                value_rev: 0,
            });
    }

    /// Number of writes since the field was seeded. Unknown fields report 0.
    pub fn revision(&self, name: &str) -> u64 {
        self.fields.get(name).map(|st| st.value_rev).unwrap_or(0)
    }

    /// Forget a field, returning its last value.
    pub fn remove(&mut self, name: &str) -> Option<InputValue> {
        self.fields.remove(name).and_then(|st| st.value)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in name order as `(name, value, revision)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&InputValue>, u64)> {
        self.fields
            .iter()
            .map(|(name, st)| (name.as_str(), st.value.as_ref(), st.value_rev))
    }

    /// A [`ValueHolder`] view over one field.
    pub fn field<'a>(&'a mut self, name: &'a str) -> FieldHolder<'a> {
        FieldHolder { store: self, name }
    }
}

/// Borrowed view of a single [`ValueStore`] field.
pub struct FieldHolder<'a> {
    store: &'a mut ValueStore,
    name: &'a str,
}

impl ValueHolder for FieldHolder<'_> {
    fn value(&self) -> Option<&InputValue> {
        self.store.get(self.name)
    }

    fn set_value(&mut self, value: Option<InputValue>) {
        self.store.set(self.name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_initial_does_not_clobber() {
        let mut store = ValueStore::new();
        store.set("name", InputValue::text("typed"));
        store.ensure_initial("name", InputValue::text("seed"));

        assert_eq!(store.get("name"), Some(&InputValue::Text("typed".into())));
        assert_eq!(store.revision("name"), 1);
    }

    #[test]
    fn revision_counts_every_write() {
        let mut store = ValueStore::new();
        store.ensure_initial("n", None);
        assert_eq!(store.revision("n"), 0);

        store.set("n", InputValue::number(1.0));
        store.set("n", InputValue::number(1.0));
        assert_eq!(store.revision("n"), 2);

        store.set("n", None);
        assert_eq!(store.revision("n"), 3);
        assert!(store.has("n"));
        assert!(store.get("n").is_none());
    }

    #[test]
    fn unknown_fields_are_absent() {
        let store = ValueStore::new();
        assert!(store.get("missing").is_none());
        assert_eq!(store.revision("missing"), 0);
        assert!(!store.has("missing"));
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let mut store = ValueStore::new();
        store.set("b", InputValue::text("2"));
        store.set("a", InputValue::text("1"));

        let names: Vec<_> = store.iter().map(|(name, _, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn field_holder_writes_through() {
        let mut store = ValueStore::new();
        {
            let mut holder = store.field("q");
            holder.set_value(InputValue::text("rust"));
            assert_eq!(holder.value().and_then(InputValue::as_str), Some("rust"));
        }
        assert_eq!(store.revision("q"), 1);
        assert_eq!(store.remove("q"), InputValue::text("rust"));
        assert!(store.is_empty());
    }
}
