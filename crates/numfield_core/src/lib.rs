//! # numfield_core
//!
//! UI-agnostic core of a numeric input field: a text-entry control whose
//! content is restricted to a signed integer within a configurable range.
//!
//! The crate provides:
//! - [`NumericField`]: held text plus the reactive rules — validation,
//!   length truncation, default-value fill, and scroll-driven stepping
//! - [`FieldStore`]: central id-keyed store routing host notifications to
//!   the right field instance
//! - [`ScrollEvent`]: the scroll notification payload with modifier flags
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! The host toolkit owns rendering, focus and event dispatch; the core
//! only reacts to three notifications (text changing, length changed,
//! scroll), each handled synchronously by a single state transition. That
//! keeps the semantics testable without a live UI loop.
//!
//! ## Integration
//!
//! To integrate with a widget system, convert its native id to [`FieldId`]
//! at the boundary:
//! ```ignore
//! // In your integration layer:
//! impl From<ui::WidgetId> for FieldId {
//!     fn from(id: ui::WidgetId) -> Self {
//!         FieldId::from_raw(id.0 as u64)
//!     }
//! }
//! ```

mod config;
mod error;
mod event;
mod field;
mod id;
mod store;
mod text;
mod traits;

pub use config::{FieldConfig, StepSizes};
pub use error::ConfigError;
pub use event::ScrollEvent;
pub use field::NumericField;
pub use id::FieldId;
pub use store::FieldStore;
pub use traits::NumericStore;

// Re-export text utilities for integration layers that want to pre-filter
// or measure proposed input themselves.
pub use text::{digit_bound, digit_count, is_numeric_text, truncate_to};
