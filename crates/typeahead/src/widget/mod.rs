//! Widget system for Typeahead.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - Widget events for input handling and focus
//! - [`FocusManager`]: Focus tracking and event delivery
//! - The suggestion model contract and the [`Typeahead`] widget itself
//!
//! # Overview
//!
//! Each widget implements the [`Widget`] trait and contains a
//! [`WidgetBase`] that handles common functionality. Widgets are pure
//! interaction state machines: events go in through
//! [`Widget::event`], state comes out through signals and renderable
//! snapshots (see [`Typeahead::popup_view`]). No rendering technology is
//! assumed; any layer that can hit-test its own visuals into
//! [`PointerTarget`]s and draw a [`PopupView`](view::PopupView) can host
//! these widgets.
//!
//! # Driving a Widget
//!
//! ```ignore
//! use typeahead::widget::*;
//!
//! typeahead_core::init_global_registry();
//!
//! let mut input = Typeahead::new()
//!     .with_model(Box::new(StringListModel::from(["hey", "hoo", "holly"])));
//! let mut focus = FocusManager::new();
//!
//! // Focus opens the popup and highlights the first match.
//! focus.set_focus(&mut input, FocusReason::Pointer);
//!
//! // Keyboard events move the highlight.
//! let mut event = WidgetEvent::KeyPress(KeyPressEvent::new(
//!     Key::ArrowDown,
//!     KeyboardModifiers::NONE,
//! ));
//! input.event(&mut event);
//!
//! // The renderer draws whatever the snapshot says.
//! let view = input.popup_view();
//! for (position, row) in view.rows.iter().enumerate() {
//!     let marker = if view.is_highlighted(position) { ">" } else { " " };
//!     println!("{} {}", marker, row.value);
//! }
//! ```

pub mod base;
pub mod events;
pub mod focus;
pub mod model;
pub mod traits;
pub mod view;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    LeaveEvent, PointerButton, PointerHoverEvent, PointerPressEvent, PointerTarget,
    TextInputEvent, WidgetEvent,
};
pub use focus::FocusManager;
pub use model::{CaseSensitivity, MatchMode, StringListModel, SuggestionModel};
pub use traits::Widget;
pub use view::{PopupRow, PopupView};
pub use widgets::{Choice, Typeahead, UpArrowPolicy};
