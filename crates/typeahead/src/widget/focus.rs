//! Focus management.
//!
//! This module provides [`FocusManager`], which tracks which widget has
//! keyboard focus and delivers [`FocusInEvent`]/[`FocusOutEvent`]s in the
//! correct order when focus changes.
//!
//! # Ordering Contract
//!
//! The interaction model depends on one ordering guarantee from the host
//! runtime: a pointer press on a popup row must be delivered and fully
//! handled *before* the focus-out caused by the resulting focus change
//! reaches the widget. `FocusManager` preserves this by construction —
//! focus changes happen only when the host explicitly calls
//! [`set_focus`](FocusManager::set_focus) or
//! [`clear_focus`](FocusManager::clear_focus), after the current event has
//! run to completion.
//!
//! Widgets request focus changes through their `focus_requested` /
//! `blur_requested` signals rather than mutating focus directly; the host
//! connects those signals to the manager (or its own focus system) and
//! applies the change once the emitting handler has returned.
//!
//! # Usage
//!
//! ```ignore
//! use typeahead::widget::{FocusManager, FocusReason};
//!
//! let mut focus = FocusManager::new();
//!
//! // Give the input focus (delivers FocusIn to the widget)
//! focus.set_focus(&mut widget, FocusReason::Pointer);
//!
//! // Later, remove it (delivers FocusOut)
//! focus.clear_focus(&mut widget, FocusReason::Other);
//! ```

use typeahead_core::ObjectId;

use super::events::{FocusInEvent, FocusOutEvent, FocusReason, WidgetEvent};
use super::traits::Widget;

/// Tracks keyboard focus and delivers focus events.
///
/// When focus changes, the focus manager:
/// 1. Updates the widget's focus state
/// 2. Sends the corresponding [`FocusInEvent`] or [`FocusOutEvent`]
///
/// Events are sent directly (without propagation) since focus events are
/// specific to the target widget.
#[derive(Debug, Default)]
pub struct FocusManager {
    /// The currently focused widget, if any.
    focused_widget: Option<ObjectId>,
}

impl FocusManager {
    /// Create a new focus manager.
    pub fn new() -> Self {
        Self {
            focused_widget: None,
        }
    }

    /// Get the currently focused widget.
    #[inline]
    pub fn focused_widget(&self) -> Option<ObjectId> {
        self.focused_widget
    }

    /// Check if a specific widget has focus.
    #[inline]
    pub fn has_focus(&self, widget_id: ObjectId) -> bool {
        self.focused_widget == Some(widget_id)
    }

    /// Set focus to a widget.
    ///
    /// If the widget is not focusable (wrong policy or disabled), this
    /// returns `false` and focus is unchanged. If the widget already has
    /// focus this is a no-op returning `true`.
    pub fn set_focus(&mut self, widget: &mut dyn Widget, reason: FocusReason) -> bool {
        if !widget.widget_base().is_focusable() {
            return false;
        }

        let widget_id = widget.object_id();
        if self.focused_widget == Some(widget_id) {
            return true;
        }

        self.focused_widget = Some(widget_id);
        widget.widget_base_mut().set_focused(true);

        let mut event = WidgetEvent::FocusIn(FocusInEvent::new(reason));
        widget.event(&mut event);

        true
    }

    /// Clear focus from a widget.
    ///
    /// Delivers a [`FocusOutEvent`] if the widget currently has focus;
    /// otherwise does nothing.
    pub fn clear_focus(&mut self, widget: &mut dyn Widget, reason: FocusReason) {
        let widget_id = widget.object_id();
        if self.focused_widget != Some(widget_id) {
            return;
        }

        self.focused_widget = None;
        widget.widget_base_mut().set_focused(false);

        let mut event = WidgetEvent::FocusOut(FocusOutEvent::new(reason));
        widget.event(&mut event);
    }
}
