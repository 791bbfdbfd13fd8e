//! Store trait defining the interface for numeric field management.
//!
//! Integration layers (an egui adapter, a test harness) should be generic
//! over this trait rather than the concrete [`FieldStore`](crate::FieldStore),
//! so alternative store implementations can be swapped in.

use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::event::ScrollEvent;
use crate::id::FieldId;

/// Trait over the field store operations an integration layer needs.
///
/// Uses [`FieldId`] as the identifier type, keeping the trait UI-agnostic;
/// callers convert their native widget/layout ids at the boundary.
pub trait NumericStore {
    /// Ensure a field exists; if missing, constructs one from `config`.
    /// Existing fields are left untouched.
    fn ensure_field(&mut self, id: FieldId, config: FieldConfig) -> Result<(), ConfigError>;

    /// The held text for this field, if it exists.
    fn text(&self, id: FieldId) -> Option<&str>;

    /// The held numeric value, filling the default first when empty.
    fn number(&mut self, id: FieldId) -> Option<i64>;

    /// Route the host set-text mechanism to this field; returns the text
    /// held afterwards (the proposal may have been rejected or truncated).
    fn set_text(&mut self, id: FieldId, proposed: &str) -> Option<&str>;

    /// Route a scroll notification to this field; returns the new value.
    fn scroll(&mut self, id: FieldId, event: ScrollEvent) -> Option<i64>;

    /// Set the ctrl-modified step size. Returns `false` if the field does
    /// not exist.
    fn set_variation_step(&mut self, id: FieldId, step: i64) -> bool;

    /// Set the shift-modified step size. Returns `false` if the field does
    /// not exist.
    fn set_large_variation_step(&mut self, id: FieldId, step: i64) -> bool;
}

impl NumericStore for crate::store::FieldStore {
    #[inline]
    fn ensure_field(&mut self, id: FieldId, config: FieldConfig) -> Result<(), ConfigError> {
        crate::store::FieldStore::ensure_field(self, id, config)
    }

    #[inline]
    fn text(&self, id: FieldId) -> Option<&str> {
        crate::store::FieldStore::text(self, id)
    }

    #[inline]
    fn number(&mut self, id: FieldId) -> Option<i64> {
        crate::store::FieldStore::number(self, id)
    }

    #[inline]
    fn set_text(&mut self, id: FieldId, proposed: &str) -> Option<&str> {
        crate::store::FieldStore::set_text(self, id, proposed)
    }

    #[inline]
    fn scroll(&mut self, id: FieldId, event: ScrollEvent) -> Option<i64> {
        crate::store::FieldStore::scroll(self, id, event)
    }

    #[inline]
    fn set_variation_step(&mut self, id: FieldId, step: i64) -> bool {
        crate::store::FieldStore::set_variation_step(self, id, step)
    }

    #[inline]
    fn set_large_variation_step(&mut self, id: FieldId, step: i64) -> bool {
        crate::store::FieldStore::set_large_variation_step(self, id, step)
    }
}
