//! egui integration for `numfield_core`.
//!
//! Translates egui's edit and scroll input into the core's notification
//! contract. The widget is generic over [`NumericStore`] so hosts can use
//! the stock [`FieldStore`](numfield_core::FieldStore) or their own store
//! implementation.
//!
//! The core owns all value semantics; this layer only ferries events. An
//! edit in the text box becomes a set-text proposal (validation, then
//! truncation on growth), and a scroll over the hovered field becomes a
//! [`ScrollEvent`] with the current modifier flags.

use egui::{Modifiers, Response, TextEdit, Ui, Vec2};
use numfield_core::{FieldConfig, FieldId, NumericStore, ScrollEvent};

/// Build a [`ScrollEvent`] from egui scroll and modifier state.
///
/// Kept separate from the widget so the mapping is testable without an
/// egui context.
pub fn scroll_event_from_input(delta: Vec2, modifiers: Modifiers) -> ScrollEvent {
    ScrollEvent {
        delta_x: delta.x,
        delta_y: delta.y,
        ctrl: modifiers.ctrl,
        shift: modifiers.shift,
    }
}

/// A numeric input field backed by a [`NumericStore`].
///
/// # Example
///
/// ```ignore
/// let mut store = FieldStore::new();
/// // Inside your update loop:
/// NumericFieldWidget::new(FieldId::from_raw(1))
///     .config(FieldConfig::new().min(-50).max(50))
///     .show(ui, &mut store);
/// let value = store.number(FieldId::from_raw(1));
/// ```
pub struct NumericFieldWidget {
    id: FieldId,
    config: FieldConfig,
    desired_width: Option<f32>,
}

impl NumericFieldWidget {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            config: FieldConfig::default(),
            desired_width: None,
        }
    }

    /// Configuration used the first time this id is seen; ignored once the
    /// field exists in the store.
    pub fn config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    /// Show the field and route this frame's input through the store.
    pub fn show<S: NumericStore>(self, ui: &mut Ui, store: &mut S) -> Response {
        if let Err(err) = store.ensure_field(self.id, self.config) {
            // A bad range is a host bug; surface it in place of the field.
            return ui.colored_label(ui.visuals().error_fg_color, err.to_string());
        }

        // Immediate-mode round trip: edit a local buffer, propose it to the
        // core, and let the next frame re-read whatever the rules accepted.
        let mut buf = store.text(self.id).unwrap_or_default().to_owned();

        let mut edit = TextEdit::singleline(&mut buf);
        if let Some(width) = self.desired_width {
            edit = edit.desired_width(width);
        }
        let response = ui.add(edit);

        if response.changed() {
            store.set_text(self.id, &buf);
        }

        if response.hovered() {
            let (delta, modifiers) = ui.input(|i| (i.raw_scroll_delta, i.modifiers));
            if delta != Vec2::ZERO {
                store.scroll(self.id, scroll_event_from_input(delta, modifiers));
            }
        }

        response
    }
}
