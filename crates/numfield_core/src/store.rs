//! Central store for numeric fields, keyed by opaque id.
//!
//! A host usually places several fields in one layout; the store owns them
//! and routes each notification to the right instance. It performs no
//! rendering or event capture itself.

use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::event::ScrollEvent;
use crate::field::NumericField;
use crate::id::FieldId;
use std::collections::HashMap;

/// Id-keyed collection of [`NumericField`]s.
///
/// # Example
///
/// ```
/// use numfield_core::{FieldConfig, FieldId, FieldStore, ScrollEvent};
///
/// let mut store = FieldStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.ensure_field(id, FieldConfig::new().initial_text("")).unwrap();
/// store.scroll(id, ScrollEvent::vertical(1.0));
///
/// assert_eq!(store.text(id), Some("1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, NumericField>,
}

impl FieldStore {
    /// Create a new, empty field store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if a field exists for this id.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Ensure a field exists; if missing, constructs one from `config`.
    ///
    /// An existing field is left untouched, so repeated calls from a
    /// per-frame UI loop are cheap and stable.
    pub fn ensure_field(&mut self, id: FieldId, config: FieldConfig) -> Result<(), ConfigError> {
        if self.fields.contains_key(&id) {
            return Ok(());
        }
        let field = NumericField::new(config)?;
        self.fields.insert(id, field);
        Ok(())
    }

    /// Remove a field from the store.
    pub fn remove(&mut self, id: FieldId) {
        self.fields.remove(&id);
    }

    /// Clear all stored fields. Typically called when the host tears down
    /// the layout that owned them.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// The held text for this field, if it exists.
    pub fn text(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|f| f.text())
    }

    /// The held numeric value, filling the default first when empty.
    pub fn number(&mut self, id: FieldId) -> Option<i64> {
        self.fields.get_mut(&id).map(|f| f.number())
    }

    /// Route the host set-text mechanism (validator, then truncator on
    /// growth) to this field. Returns the text held afterwards.
    pub fn set_text(&mut self, id: FieldId, proposed: &str) -> Option<&str> {
        self.fields.get_mut(&id).map(|f| {
            f.set_text(proposed);
            f.text()
        })
    }

    /// Route a scroll notification to this field. Returns the new value.
    pub fn scroll(&mut self, id: FieldId, event: ScrollEvent) -> Option<i64> {
        self.fields.get_mut(&id).map(|f| f.on_scroll(event))
    }

    /// Set the ctrl-modified step size. Returns `false` if the field does
    /// not exist.
    pub fn set_variation_step(&mut self, id: FieldId, step: i64) -> bool {
        match self.fields.get_mut(&id) {
            Some(f) => {
                f.set_variation_step(step);
                true
            }
            None => false,
        }
    }

    /// Set the shift-modified step size. Returns `false` if the field does
    /// not exist.
    pub fn set_large_variation_step(&mut self, id: FieldId, step: i64) -> bool {
        match self.fields.get_mut(&id) {
            Some(f) => {
                f.set_large_variation_step(step);
                true
            }
            None => false,
        }
    }

    /// Direct access to a field, for hosts that drive the notification
    /// hooks themselves.
    pub fn field(&self, id: FieldId) -> Option<&NumericField> {
        self.fields.get(&id)
    }

    /// Mutable direct access to a field.
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut NumericField> {
        self.fields.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_field_is_idempotent() {
        let mut store = FieldStore::new();
        let id = FieldId::from_raw(1);

        store.ensure_field(id, FieldConfig::new()).unwrap();
        store.set_text(id, "42");

        // Re-ensuring must not reset the held text.
        store.ensure_field(id, FieldConfig::new()).unwrap();
        assert_eq!(store.text(id), Some("42"));
    }

    #[test]
    fn ensure_field_surfaces_config_errors() {
        let mut store = FieldStore::new();
        let id = FieldId::from_raw(1);

        let result = store.ensure_field(id, FieldConfig::new().min(5).max(1));
        assert!(result.is_err());
        assert!(!store.has(id));
    }

    #[test]
    fn operations_on_missing_fields_return_none() {
        let mut store = FieldStore::new();
        let id = FieldId::from_raw(9);

        assert_eq!(store.text(id), None);
        assert_eq!(store.number(id), None);
        assert_eq!(store.scroll(id, ScrollEvent::vertical(1.0)), None);
        assert!(!store.set_variation_step(id, 2));
    }

    #[test]
    fn notifications_are_routed_per_field() {
        let mut store = FieldStore::new();
        let a = FieldId::from_raw(1);
        let b = FieldId::from_raw(2);

        store
            .ensure_field(a, FieldConfig::new().initial_text(""))
            .unwrap();
        store
            .ensure_field(b, FieldConfig::new().min(-50).max(50).initial_text("50"))
            .unwrap();

        assert_eq!(store.scroll(a, ScrollEvent::vertical(1.0)), Some(1));
        assert_eq!(store.scroll(b, ScrollEvent::vertical(1.0)), Some(50));

        assert_eq!(store.text(a), Some("1"));
        assert_eq!(store.text(b), Some("50"));
    }

    #[test]
    fn clear_and_remove_drop_state() {
        let mut store = FieldStore::new();
        let id = FieldId::from_raw(1);

        store.ensure_field(id, FieldConfig::new()).unwrap();
        store.remove(id);
        assert!(!store.has(id));

        store.ensure_field(id, FieldConfig::new()).unwrap();
        store.clear();
        assert!(!store.has(id));
    }
}
