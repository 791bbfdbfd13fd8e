//! Generic, UI-agnostic identifier for numeric fields.
//!
//! A plain `u64` wrapper so the store stays decoupled from any widget or
//! layout identifier type; integration layers convert their native ids at
//! the call boundary.

/// Opaque handle for a field within a [`FieldStore`](crate::FieldStore).
///
/// The raw value carries no meaning inside this crate; it is just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}
