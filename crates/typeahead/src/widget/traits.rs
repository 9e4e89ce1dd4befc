//! Core widget trait definitions.

use typeahead_core::Object;

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// The core trait for all widgets.
///
/// `Widget` extends [`Object`] to provide the fundamental interface for UI
/// elements: identity, common state via [`WidgetBase`], and event handling.
///
/// Presentation is not part of the trait. A widget exposes its renderable
/// state through pure accessors (see the popup view derivation on
/// [`Typeahead`](super::widgets::Typeahead)), and any rendering layer turns
/// that state into pixels, glyphs, or markup.
///
/// # Implementing
///
/// 1. Define a struct with a `WidgetBase` field
/// 2. Implement `Widget`, delegating `widget_base`/`widget_base_mut`
/// 3. Implement `event()` with the widget's transition logic
pub trait Widget: Object {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled. Handlers that consume an
    /// input event must also accept it so it does not propagate to the
    /// host's default handling.
    fn event(&mut self, event: &mut WidgetEvent) -> bool;

    // =========================================================================
    // Convenience delegations
    // =========================================================================

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Check if the widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    /// Check if the widget currently has keyboard focus.
    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }
}
