//! Widget-specific event types.
//!
//! This module defines the events the widget system handles: keyboard input,
//! host text-field edits, focus changes, and pointer interaction with the
//! popup.
//!
//! # Pointer Events Address Rows, Not Pixels
//!
//! Hit-testing belongs to the rendering layer, which owns geometry. Pointer
//! events therefore carry a [`PointerTarget`] naming the logical part that
//! was hit (a popup row or the toggle affordance) rather than coordinates.
//! The renderer maps its pixel-level hits to targets before dispatching.
//!
//! # Accepting Events
//!
//! Each event carries an [`EventBase`] with an accepted flag. A widget that
//! handles an event must accept it; accepted input events do not propagate,
//! which is how the widget suppresses the runtime's default text-field
//! behavior (cursor movement, form submission) for the keys it consumes.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Keyboard key codes.
///
/// A closed set of the non-printing keys the widget system dispatches on.
/// Printable input does not arrive as key events; it arrives as
/// [`TextInputEvent`]s carrying the full new field value, because the host
/// owns the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Backspace,
    Delete,
    Insert,
    Enter,
    Tab,

    // Whitespace
    Space,

    // Dismissal
    Escape,
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary = 0,
    /// Secondary button (usually right).
    Secondary = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// The logical part of the widget a pointer event refers to.
///
/// Produced by the rendering layer's hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A row in the popup list, by position in the currently visible rows.
    Row(usize),
    /// The dropdown toggle affordance (e.g. the arrow icon).
    Toggle,
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to a pointer press.
    Pointer,
    /// Focus changed due to Tab key navigation.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus in event, sent when a widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusInEvent {
    /// Create a new focus in event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when a widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a new focus out event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key press event.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat: false,
        }
    }
}

/// Text input event, sent when the user edits the input field.
///
/// Carries the full new field value rather than a delta: the host owns the
/// authoritative text, so the widget only forwards the value onward and
/// never applies the edit itself.
#[derive(Debug, Clone)]
pub struct TextInputEvent {
    /// Base event data.
    pub base: EventBase,
    /// The complete new value of the input field.
    pub value: String,
}

impl TextInputEvent {
    /// Create a new text input event.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            value: value.into(),
        }
    }
}

/// Pointer press event.
///
/// Dispatched on the press phase, not on release: the host runtime must
/// deliver and fully handle a press on a popup row *before* delivering the
/// blur that the resulting focus change causes.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: PointerButton,
    /// The logical part that was hit.
    pub target: PointerTarget,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: PointerButton, target: PointerTarget) -> Self {
        Self {
            base: EventBase::new(),
            button,
            target,
            modifiers: KeyboardModifiers::NONE,
        }
    }
}

/// Pointer hover event, sent when the pointer moves over a widget part.
#[derive(Debug, Clone, Copy)]
pub struct PointerHoverEvent {
    /// Base event data.
    pub base: EventBase,
    /// The logical part under the pointer.
    pub target: PointerTarget,
}

impl PointerHoverEvent {
    /// Create a new pointer hover event.
    pub fn new(target: PointerTarget) -> Self {
        Self {
            base: EventBase::new(),
            target,
        }
    }
}

/// Pointer leave event, sent when the pointer leaves the widget entirely.
#[derive(Debug, Clone, Copy)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

impl Default for LeaveEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// An event dispatched to a widget.
///
/// This allows passing events through a unified interface while preserving
/// type information for event handlers.
#[derive(Debug)]
pub enum WidgetEvent {
    /// Focus in event.
    FocusIn(FocusInEvent),
    /// Focus out event.
    FocusOut(FocusOutEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Text input event.
    TextInput(TextInputEvent),
    /// Pointer press event.
    PointerPress(PointerPressEvent),
    /// Pointer hover event.
    PointerHover(PointerHoverEvent),
    /// Pointer leave event.
    Leave(LeaveEvent),
}

impl WidgetEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::FocusIn(e) => e.base.is_accepted(),
            Self::FocusOut(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::TextInput(e) => e.base.is_accepted(),
            Self::PointerPress(e) => e.base.is_accepted(),
            Self::PointerHover(e) => e.base.is_accepted(),
            Self::Leave(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::FocusIn(e) => e.base.accept(),
            Self::FocusOut(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::TextInput(e) => e.base.accept(),
            Self::PointerPress(e) => e.base.accept(),
            Self::PointerHover(e) => e.base.accept(),
            Self::Leave(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::FocusIn(e) => e.base.ignore(),
            Self::FocusOut(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
            Self::TextInput(e) => e.base.ignore(),
            Self::PointerPress(e) => e.base.ignore(),
            Self::PointerHover(e) => e.base.ignore(),
            Self::Leave(e) => e.base.ignore(),
        }
    }

    /// Check if this event should propagate to the host's default handling.
    ///
    /// Focus and leave events are specific to the widget and never
    /// propagate. Input events propagate unless accepted, which lets
    /// unhandled keys fall through to the host's own text editing.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::FocusIn(_) | Self::FocusOut(_) | Self::Leave(_) => false,
            Self::KeyPress(_) | Self::TextInput(_) | Self::PointerPress(_)
            | Self::PointerHover(_) => !self.is_accepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accept_ignore() {
        let mut event = WidgetEvent::KeyPress(KeyPressEvent::new(
            Key::ArrowDown,
            KeyboardModifiers::NONE,
        ));

        assert!(!event.is_accepted());
        assert!(event.should_propagate());

        event.accept();
        assert!(event.is_accepted());
        assert!(!event.should_propagate());

        event.ignore();
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_focus_events_never_propagate() {
        let event = WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Pointer));
        assert!(!event.should_propagate());

        let event = WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Other));
        assert!(!event.should_propagate());
    }

    #[test]
    fn test_modifiers() {
        assert!(KeyboardModifiers::NONE.none());

        let shifted = KeyboardModifiers {
            shift: true,
            ..KeyboardModifiers::NONE
        };
        assert!(shifted.any());
        assert!(!shifted.none());
    }
}
