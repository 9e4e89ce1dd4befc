//! Common widget state shared by all widget types.

use typeahead_core::{Object, ObjectBase, ObjectId, Signal};

/// Common implementation for widget functionality.
///
/// `WidgetBase` handles the state every widget carries: object identity,
/// enabled and focus state, and the repaint flag the rendering layer polls.
/// Widgets include it as a field and delegate to it from their [`Widget`]
/// trait implementation.
///
/// Geometry is deliberately absent: presentation (and therefore layout and
/// hit-testing) is the rendering layer's concern, derived from widget state.
///
/// [`Widget`]: super::Widget
pub struct WidgetBase {
    /// The underlying object base for Object trait implementation.
    object_base: ObjectBase,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget can receive keyboard focus.
    focusable: bool,

    /// Whether the widget currently has focus.
    focused: bool,

    /// Whether the widget's state changed since it was last rendered.
    needs_repaint: bool,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            enabled: true,
            focusable: false,
            focused: false,
            needs_repaint: true,
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Object System Delegation
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the widget can receive keyboard focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable && self.enabled
    }

    /// Set whether the widget can receive keyboard focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the focus management system).
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called by the renderer after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeahead_core::init_global_registry;

    struct Probe {
        base: WidgetBase,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                base: WidgetBase::new::<Self>(),
            }
        }
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.object_id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_defaults() {
        setup();
        let probe = Probe::new();
        assert!(probe.base.is_enabled());
        assert!(!probe.base.is_focusable());
        assert!(!probe.base.has_focus());
        assert!(probe.base.needs_repaint());
    }

    #[test]
    fn test_disabled_is_not_focusable() {
        setup();
        let mut probe = Probe::new();
        probe.base.set_focusable(true);
        assert!(probe.base.is_focusable());

        probe.base.set_enabled(false);
        assert!(!probe.base.is_focusable());
    }

    #[test]
    fn test_repaint_flag() {
        setup();
        let mut probe = Probe::new();
        probe.base.clear_repaint_flag();
        assert!(!probe.base.needs_repaint());

        probe.base.update();
        assert!(probe.base.needs_repaint());
    }
}
