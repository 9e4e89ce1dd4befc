//! Typeahead widget for filtered dropdown selection.
//!
//! The Typeahead widget pairs a host-owned text field with a popup of
//! filtered candidates:
//! - Filtering against a host-supplied [`SuggestionModel`]
//! - Keyboard navigation with clamped (non-wrapping) arrow movement
//! - Pointer hover and press selection on popup rows
//! - Careful disambiguation of self-inflicted vs. user-initiated blur
//!
//! # Example
//!
//! ```ignore
//! use typeahead::widget::{FocusManager, FocusReason, StringListModel, Typeahead};
//!
//! let mut input = Typeahead::new()
//!     .with_model(Box::new(StringListModel::from(["hey", "hoo", "holly"])))
//!     .with_max_options(4)
//!     .with_placeholder("Search for a hint");
//!
//! // The host owns the text; the widget reports edits and selections.
//! input.text_edited.connect(|term| {
//!     println!("host should set the term to: {}", term);
//! });
//! input.accepted.connect(|choice| {
//!     println!("committed: {:?}", choice);
//! });
//!
//! // Drive it through the focus manager and event dispatch.
//! let mut focus = FocusManager::new();
//! focus.set_focus(&mut input, FocusReason::Pointer);
//! ```
//!
//! # Signals
//!
//! - `text_edited(String)`: the visible text should change (typing
//!   passthrough, Escape revert, blur clear)
//! - `accepted(Option<Choice>)`: a candidate was committed, or the selection
//!   was explicitly cleared
//! - `highlighted(Choice)`: the highlighted candidate changed
//! - `focus_requested(())`: the widget wants the host to focus the input
//! - `blur_requested(())`: the widget wants the host to remove focus

use typeahead_core::{Object, ObjectId, Signal};

use crate::widget::events::{
    Key, KeyPressEvent, PointerButton, PointerHoverEvent, PointerPressEvent, PointerTarget,
    TextInputEvent, WidgetEvent,
};
use crate::widget::model::{take, SuggestionModel};
use crate::widget::view::{PopupRow, PopupView};
use crate::widget::{Widget, WidgetBase};

// ============================================================================
// Choice
// ============================================================================

/// A committed candidate: its model row and display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The row in the suggestion model this candidate came from.
    pub row: usize,
    /// The candidate's display value.
    pub value: String,
}

// ============================================================================
// Up-Arrow Policy
// ============================================================================

/// What ArrowUp does when no row is highlighted yet.
///
/// Both behaviors are legitimate; which one feels right depends on the host
/// application, so it is a configuration knob rather than a fixed choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpArrowPolicy {
    /// ArrowUp does nothing until the list has been engaged. Models "not
    /// yet interacting with the list": there is nothing to move up from.
    #[default]
    Inert,
    /// ArrowUp highlights the first row, symmetric with ArrowDown.
    EngageFirst,
}

// ============================================================================
// Typeahead Widget
// ============================================================================

/// A text input with a filtered dropdown of candidates.
///
/// The host owns the authoritative text. The widget never stores text edits
/// itself: user typing arrives as [`TextInputEvent`]s and is forwarded
/// through the `text_edited` signal; the host decides the new term and
/// pushes it back via [`set_search_term`](Self::set_search_term). Every
/// configuration setter revalidates the highlighted row, so the highlight
/// can never point outside the currently filtered list.
///
/// While focused the popup is open; it shows the model rows matching the
/// search term, truncated to [`max_options`](Self::max_options). Enter or a
/// pointer press commits the highlighted/pressed row, closes the popup, and
/// asks the host to remove focus. The blur that removal causes is flagged
/// beforehand so it is not mistaken for the user clicking away.
pub struct Typeahead {
    /// Widget base.
    base: WidgetBase,

    /// The suggestion model (candidate pool + filter).
    model: Option<Box<dyn SuggestionModel>>,

    /// Host-owned search term, mirrored here for filtering.
    search_term: String,

    /// Display limit on filtered rows. `None` = unlimited.
    max_options: Option<usize>,

    /// Popup height hint in pixels. Presentation only.
    max_height: Option<f32>,

    /// Placeholder text for the empty input. Presentation only.
    placeholder: String,

    /// What ArrowUp does from an unengaged list.
    up_arrow_policy: UpArrowPolicy,

    /// Whether the popup is open (tracks input focus).
    open: bool,

    /// Position of the highlighted row within the visible rows.
    highlighted_index: Option<usize>,

    /// Display value of the most recently committed candidate. Consulted
    /// only by the blur handler; never authoritative text.
    last_accepted: Option<String>,

    /// Set before a self-inflicted blur so the blur handler ignores it.
    discard_next_blur: bool,

    // Signals
    /// Signal emitted when the visible text should change.
    pub text_edited: Signal<String>,

    /// Signal emitted when a candidate is committed (`Some`) or the
    /// selection is explicitly cleared (`None`).
    pub accepted: Signal<Option<Choice>>,

    /// Signal emitted when the highlighted candidate changes.
    pub highlighted: Signal<Choice>,

    /// Signal emitted when the widget wants the input focused.
    pub focus_requested: Signal<()>,

    /// Signal emitted when the widget wants focus removed from the input.
    pub blur_requested: Signal<()>,
}

impl Typeahead {
    /// Create a new Typeahead with no model.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);

        Self {
            base,
            model: None,
            search_term: String::new(),
            max_options: None,
            max_height: None,
            placeholder: String::new(),
            up_arrow_policy: UpArrowPolicy::default(),
            open: false,
            highlighted_index: None,
            last_accepted: None,
            discard_next_blur: false,
            text_edited: Signal::new(),
            accepted: Signal::new(),
            highlighted: Signal::new(),
            focus_requested: Signal::new(),
            blur_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Model
    // =========================================================================

    /// Set the suggestion model.
    pub fn set_model(&mut self, model: Box<dyn SuggestionModel>) {
        self.model = Some(model);
        self.revalidate_highlight();
        self.base.update();
    }

    /// Set model using builder pattern.
    pub fn with_model(mut self, model: Box<dyn SuggestionModel>) -> Self {
        self.set_model(model);
        self
    }

    /// Get a reference to the model, if one is set.
    pub fn model(&self) -> Option<&dyn SuggestionModel> {
        self.model.as_deref()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Set the search term.
    ///
    /// The host calls this after handling a `text_edited` signal; the widget
    /// never updates the term on its own. The highlighted row is re-derived
    /// against the newly filtered list before the next transition can use it.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.revalidate_highlight();
        self.base.update();
    }

    /// Set the search term using builder pattern.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    /// Get the display limit on filtered rows.
    pub fn max_options(&self) -> Option<usize> {
        self.max_options
    }

    /// Set the display limit on filtered rows. `None` = unlimited;
    /// `Some(0)` = show nothing.
    pub fn set_max_options(&mut self, limit: Option<usize>) {
        self.max_options = limit;
        self.revalidate_highlight();
        self.base.update();
    }

    /// Set the display limit using builder pattern.
    pub fn with_max_options(mut self, limit: usize) -> Self {
        self.set_max_options(Some(limit));
        self
    }

    /// Get the popup height hint.
    pub fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    /// Set the popup height hint. Presentation only; never affects behavior.
    pub fn set_max_height(&mut self, height: Option<f32>) {
        self.max_height = height;
        self.base.update();
    }

    /// Set the popup height hint using builder pattern.
    pub fn with_max_height(mut self, height: f32) -> Self {
        self.set_max_height(Some(height));
        self
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text shown while the input is empty.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
        self.base.update();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Get the ArrowUp policy.
    pub fn up_arrow_policy(&self) -> UpArrowPolicy {
        self.up_arrow_policy
    }

    /// Set what ArrowUp does when no row is highlighted.
    pub fn set_up_arrow_policy(&mut self, policy: UpArrowPolicy) {
        self.up_arrow_policy = policy;
    }

    /// Set the ArrowUp policy using builder pattern.
    pub fn with_up_arrow_policy(mut self, policy: UpArrowPolicy) -> Self {
        self.up_arrow_policy = policy;
        self
    }

    // =========================================================================
    // Interaction State
    // =========================================================================

    /// Check if the popup is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Get the position of the highlighted row within the visible rows.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Get the display value of the most recently committed candidate.
    pub fn last_accepted(&self) -> Option<&str> {
        self.last_accepted.as_deref()
    }

    /// Explicitly clear the committed selection.
    ///
    /// Clears the remembered candidate, asks the host to clear the text,
    /// and emits `accepted(None)`. The popup and focus are left alone.
    pub fn clear_selection(&mut self) {
        self.last_accepted = None;
        self.text_edited.emit(String::new());
        self.accepted.emit(None);
        self.base.update();
    }

    // =========================================================================
    // Filtered Rows
    // =========================================================================

    /// The model rows currently offered, in filter order, truncated to the
    /// display limit.
    ///
    /// Derived from the current configuration on every call; the model and
    /// term may change between any two renders, so this is never cached.
    pub fn visible_rows(&self) -> Vec<usize> {
        let filtered = self
            .model
            .as_ref()
            .map(|model| model.filter(&self.search_term))
            .unwrap_or_default();
        take(self.max_options, filtered)
    }

    /// Re-derive the highlight after a configuration change.
    ///
    /// The highlight indexes into the filtered list, so any change to the
    /// term, model, or display limit can invalidate it. First row if the new
    /// list is non-empty, nothing otherwise.
    fn revalidate_highlight(&mut self) {
        self.highlighted_index = if self.visible_rows().is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Build the render-ready popup snapshot.
    pub fn popup_view(&self) -> PopupView {
        if !self.open {
            return PopupView::hidden();
        }

        let rows: Vec<PopupRow> = self
            .visible_rows()
            .into_iter()
            .filter_map(|row| {
                self.model
                    .as_ref()
                    .and_then(|model| model.value(row))
                    .map(|value| PopupRow { row, value })
            })
            .collect();

        let no_results = rows.is_empty();
        PopupView {
            visible: !no_results,
            highlighted: self.highlighted_index,
            max_height: self.max_height,
            rows,
            no_results,
        }
    }

    // =========================================================================
    // Selection and Close
    // =========================================================================

    /// Commit the row at `position` within the visible rows.
    ///
    /// Out-of-range positions are ignored; the caller's emptiness checks are
    /// the contract, this guard is the backstop.
    fn commit_at(&mut self, position: usize) {
        let rows = self.visible_rows();
        let Some(&row) = rows.get(position) else {
            return;
        };
        let Some(value) = self.model.as_ref().and_then(|model| model.value(row)) else {
            return;
        };

        tracing::trace!(target: "typeahead::widget", row, value = %value, "committing selection");

        self.last_accepted = Some(value.clone());
        self.discard_next_blur = true;
        self.accepted.emit(Some(Choice { row, value }));
        self.close_popup();
    }

    /// Close the popup: reset interaction state and ask the host to remove
    /// focus from the input.
    fn close_popup(&mut self) {
        self.open = false;
        self.highlighted_index = None;
        self.base.update();
        self.blur_requested.emit(());
    }

    /// Move the highlight to `position` and announce it if it changed.
    fn set_highlight(&mut self, position: usize) {
        if self.highlighted_index == Some(position) {
            return;
        }
        self.highlighted_index = Some(position);
        self.base.update();
        self.announce_highlight();
    }

    fn announce_highlight(&self) {
        let Some(position) = self.highlighted_index else {
            return;
        };
        let rows = self.visible_rows();
        let Some(&row) = rows.get(position) else {
            return;
        };
        if let Some(value) = self.model.as_ref().and_then(|model| model.value(row)) {
            self.highlighted.emit(Choice { row, value });
        }
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    fn handle_focus_in(&mut self) {
        tracing::trace!(target: "typeahead::widget", "focus gained, opening popup");
        self.open = true;
        self.revalidate_highlight();
        self.base.update();
        self.announce_highlight();
    }

    fn handle_focus_out(&mut self) {
        if self.discard_next_blur {
            // Self-inflicted blur from a commit, Escape, or toggle close.
            tracing::trace!(target: "typeahead::widget", "discarding self-inflicted blur");
            self.discard_next_blur = false;
            return;
        }

        tracing::trace!(target: "typeahead::widget", "focus lost, closing popup");
        self.open = false;
        self.highlighted_index = None;
        self.base.update();

        // Clear the text unless a candidate was accepted and the term still
        // matches its display value unmodified.
        if self.last_accepted.as_deref() != Some(self.search_term.as_str()) {
            self.text_edited.emit(String::new());
        }
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::ArrowDown => {
                let rows = self.visible_rows();
                if let Some(last) = rows.len().checked_sub(1) {
                    let next = match self.highlighted_index {
                        None => 0,
                        Some(position) => (position + 1).min(last),
                    };
                    self.set_highlight(next);
                }
                true
            }
            Key::ArrowUp => {
                match self.highlighted_index {
                    None => {
                        if self.up_arrow_policy == UpArrowPolicy::EngageFirst
                            && !self.visible_rows().is_empty()
                        {
                            self.set_highlight(0);
                        }
                    }
                    Some(position) => {
                        self.set_highlight(position.saturating_sub(1));
                    }
                }
                true
            }
            Key::Enter => {
                if self.visible_rows().is_empty() {
                    return true;
                }
                let Some(position) = self.highlighted_index else {
                    return true;
                };
                self.commit_at(position);
                true
            }
            Key::Escape => {
                let revert = self.last_accepted.clone().unwrap_or_default();
                self.text_edited.emit(revert);
                self.discard_next_blur = true;
                self.close_popup();
                true
            }
            _ => false,
        }
    }

    fn handle_text_input(&mut self, event: &TextInputEvent) -> bool {
        // Typing passthrough: the host owns the term and will push the new
        // value back through set_search_term.
        self.text_edited.emit(event.value.clone());
        true
    }

    fn handle_pointer_press(&mut self, event: &PointerPressEvent) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }

        match event.target {
            PointerTarget::Row(position) => {
                if !self.open || position >= self.visible_rows().len() {
                    return false;
                }
                self.commit_at(position);
                true
            }
            PointerTarget::Toggle => {
                if self.open {
                    // Close without committing. The blur is not discarded:
                    // the regular blur policy applies when focus leaves.
                    self.close_popup();
                } else {
                    self.focus_requested.emit(());
                }
                true
            }
        }
    }

    fn handle_pointer_hover(&mut self, event: &PointerHoverEvent) -> bool {
        let PointerTarget::Row(position) = event.target else {
            return false;
        };
        if !self.open || position >= self.visible_rows().len() {
            return false;
        }
        self.set_highlight(position);
        true
    }
}

impl Widget for Typeahead {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::FocusIn(_) => {
                self.handle_focus_in();
                return false;
            }
            WidgetEvent::FocusOut(_) => {
                self.handle_focus_out();
                return false;
            }
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::TextInput(e) => self.handle_text_input(e),
            WidgetEvent::PointerPress(e) => self.handle_pointer_press(e),
            WidgetEvent::PointerHover(e) => self.handle_pointer_hover(e),
            WidgetEvent::Leave(_) => false,
        };

        if handled {
            // The explicit contract: consumed input must not fall through to
            // the runtime's default text-field behavior.
            event.accept();
        }
        handled
    }
}

impl Object for Typeahead {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use typeahead_core::init_global_registry;

    use super::*;
    use crate::widget::model::StringListModel;
    use crate::widget::{FocusManager, FocusReason, KeyboardModifiers};

    fn setup() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        init_global_registry();
    }

    fn sample_widget() -> Typeahead {
        Typeahead::new().with_model(Box::new(StringListModel::from(["hey", "hoo", "holly"])))
    }

    fn press_key(widget: &mut Typeahead, key: Key) -> bool {
        let mut event =
            WidgetEvent::KeyPress(KeyPressEvent::new(key, KeyboardModifiers::NONE));
        widget.event(&mut event);
        event.is_accepted()
    }

    fn press_row(widget: &mut Typeahead, position: usize) -> bool {
        let mut event = WidgetEvent::PointerPress(PointerPressEvent::new(
            PointerButton::Primary,
            PointerTarget::Row(position),
        ));
        widget.event(&mut event);
        event.is_accepted()
    }

    fn hover_row(widget: &mut Typeahead, position: usize) {
        let mut event =
            WidgetEvent::PointerHover(PointerHoverEvent::new(PointerTarget::Row(position)));
        widget.event(&mut event);
    }

    fn press_toggle(widget: &mut Typeahead) {
        let mut event = WidgetEvent::PointerPress(PointerPressEvent::new(
            PointerButton::Primary,
            PointerTarget::Toggle,
        ));
        widget.event(&mut event);
    }

    fn capture_text(widget: &Typeahead) -> Arc<Mutex<Vec<String>>> {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let sink_clone = sink.clone();
        widget.text_edited.connect(move |text| {
            sink_clone.lock().push(text.clone());
        });
        sink
    }

    fn capture_accepted(widget: &Typeahead) -> Arc<Mutex<Vec<Option<Choice>>>> {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let sink_clone = sink.clone();
        widget.accepted.connect(move |choice| {
            sink_clone.lock().push(choice.clone());
        });
        sink
    }

    #[test]
    fn test_initial_state() {
        setup();
        let widget = sample_widget();
        assert!(!widget.is_open());
        assert_eq!(widget.highlighted_index(), None);
        assert_eq!(widget.last_accepted(), None);
        assert!(!widget.popup_view().visible);
    }

    #[test]
    fn test_focus_opens_and_highlights_first() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();

        assert!(focus.set_focus(&mut widget, FocusReason::Pointer));
        assert!(widget.is_open());
        assert!(widget.has_focus());
        assert_eq!(widget.highlighted_index(), Some(0));
        assert!(widget.popup_view().visible);
    }

    #[test]
    fn test_focus_with_no_matches_highlights_nothing() {
        setup();
        let mut widget = sample_widget().with_search_term("zzz");
        let mut focus = FocusManager::new();

        focus.set_focus(&mut widget, FocusReason::Pointer);
        assert!(widget.is_open());
        assert_eq!(widget.highlighted_index(), None);

        let view = widget.popup_view();
        assert!(!view.visible);
        assert!(view.no_results);
    }

    #[test]
    fn test_arrow_down_pins_at_last() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        // Three rows; repeated presses converge to and stay at the last.
        for _ in 0..5 {
            assert!(press_key(&mut widget, Key::ArrowDown));
        }
        assert_eq!(widget.highlighted_index(), Some(2));
    }

    #[test]
    fn test_arrow_down_from_none_engages_first() {
        setup();
        let mut widget = sample_widget();
        widget.open = true; // focused, but highlight lost (e.g. term change)
        widget.highlighted_index = None;

        press_key(&mut widget, Key::ArrowDown);
        assert_eq!(widget.highlighted_index(), Some(0));
    }

    #[test]
    fn test_arrow_down_with_empty_list_stays_none() {
        setup();
        let mut widget = sample_widget().with_search_term("zzz");
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        assert!(press_key(&mut widget, Key::ArrowDown));
        assert_eq!(widget.highlighted_index(), None);
    }

    #[test]
    fn test_arrow_up_pins_at_zero() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        press_key(&mut widget, Key::ArrowDown);
        press_key(&mut widget, Key::ArrowDown);
        assert_eq!(widget.highlighted_index(), Some(2));

        for _ in 0..5 {
            assert!(press_key(&mut widget, Key::ArrowUp));
        }
        assert_eq!(widget.highlighted_index(), Some(0));
    }

    #[test]
    fn test_arrow_up_from_none_is_inert_by_default() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);
        widget.highlighted_index = None;

        // Handled (accepted) but no movement.
        assert!(press_key(&mut widget, Key::ArrowUp));
        assert_eq!(widget.highlighted_index(), None);
    }

    #[test]
    fn test_arrow_up_engage_first_policy() {
        setup();
        let mut widget = sample_widget().with_up_arrow_policy(UpArrowPolicy::EngageFirst);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);
        widget.highlighted_index = None;

        press_key(&mut widget, Key::ArrowUp);
        assert_eq!(widget.highlighted_index(), Some(0));
    }

    #[test]
    fn test_enter_commits_highlighted() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let accepted = capture_accepted(&widget);
        let mut focus = FocusManager::new();

        // Filtered rows are [hoo, holly]; focus highlights hoo.
        focus.set_focus(&mut widget, FocusReason::Pointer);
        assert_eq!(widget.highlighted_index(), Some(0));

        press_key(&mut widget, Key::ArrowDown);
        assert_eq!(widget.highlighted_index(), Some(1));

        press_key(&mut widget, Key::Enter);
        assert_eq!(
            *accepted.lock(),
            vec![Some(Choice {
                row: 2,
                value: "holly".to_string(),
            })]
        );

        // Interaction state is back to initial and the widget asked for blur.
        assert!(!widget.is_open());
        assert_eq!(widget.highlighted_index(), None);
        assert_eq!(widget.last_accepted(), Some("holly"));
    }

    #[test]
    fn test_enter_is_noop_without_highlight() {
        setup();
        let mut widget = sample_widget();
        let accepted = capture_accepted(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);
        widget.highlighted_index = None;

        assert!(press_key(&mut widget, Key::Enter));
        assert!(accepted.lock().is_empty());
        assert!(widget.is_open());
    }

    #[test]
    fn test_enter_is_noop_with_no_matches() {
        setup();
        let mut widget = sample_widget().with_search_term("zzz");
        let accepted = capture_accepted(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        assert!(press_key(&mut widget, Key::Enter));
        assert!(accepted.lock().is_empty());
    }

    #[test]
    fn test_commit_suppresses_following_blur() {
        setup();
        let mut widget = sample_widget();
        let texts = capture_text(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        press_key(&mut widget, Key::Enter); // commits "hey"
        assert!(!widget.is_open());

        // The runtime now delivers the blur the widget itself caused.
        focus.clear_focus(&mut widget, FocusReason::Other);
        assert!(texts.lock().is_empty());

        // A later, genuine blur is handled normally again.
        focus.set_focus(&mut widget, FocusReason::Pointer);
        focus.clear_focus(&mut widget, FocusReason::Other);
        assert_eq!(*texts.lock(), vec!["".to_string()]);
    }

    #[test]
    fn test_press_commits_before_blur() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let accepted = capture_accepted(&widget);
        let texts = capture_text(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        // Press on the second visible row (holly).
        assert!(press_row(&mut widget, 1));
        assert_eq!(
            *accepted.lock(),
            vec![Some(Choice {
                row: 2,
                value: "holly".to_string(),
            })]
        );

        // The press already ran to completion; the blur it caused is a no-op.
        focus.clear_focus(&mut widget, FocusReason::Pointer);
        assert!(texts.lock().is_empty());
    }

    #[test]
    fn test_press_outside_visible_rows_is_ignored() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let accepted = capture_accepted(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        assert!(!press_row(&mut widget, 5));
        assert!(accepted.lock().is_empty());
        assert!(widget.is_open());
    }

    #[test]
    fn test_secondary_button_does_not_commit() {
        setup();
        let mut widget = sample_widget();
        let accepted = capture_accepted(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        let mut event = WidgetEvent::PointerPress(PointerPressEvent::new(
            PointerButton::Secondary,
            PointerTarget::Row(0),
        ));
        widget.event(&mut event);
        assert!(!event.is_accepted());
        assert!(accepted.lock().is_empty());
    }

    #[test]
    fn test_escape_reverts_to_accepted_value() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();

        // Accept "holly" by pressing its row, then simulate the host
        // echoing the selection into the term and the user editing it.
        focus.set_focus(&mut widget, FocusReason::Pointer);
        press_row(&mut widget, 2);
        focus.clear_focus(&mut widget, FocusReason::Other); // discarded
        widget.set_search_term("holl");

        focus.set_focus(&mut widget, FocusReason::Pointer);
        let texts = capture_text(&widget);
        press_key(&mut widget, Key::Escape);

        assert_eq!(*texts.lock(), vec!["holly".to_string()]);
        assert!(!widget.is_open());

        // Escape's programmatic blur is discarded, so no clear follows.
        focus.clear_focus(&mut widget, FocusReason::Other);
        assert_eq!(*texts.lock(), vec!["holly".to_string()]);
    }

    #[test]
    fn test_escape_without_accepted_clears_text() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let texts = capture_text(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        press_key(&mut widget, Key::Escape);
        assert_eq!(*texts.lock(), vec!["".to_string()]);
    }

    #[test]
    fn test_blur_keeps_unmodified_accepted_text() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();

        focus.set_focus(&mut widget, FocusReason::Pointer);
        press_row(&mut widget, 2); // accepts "holly"
        focus.clear_focus(&mut widget, FocusReason::Other); // discarded
        widget.set_search_term("holly"); // host echoes the selection

        // Focus and click away without editing: text stays.
        focus.set_focus(&mut widget, FocusReason::Pointer);
        let texts = capture_text(&widget);
        focus.clear_focus(&mut widget, FocusReason::Pointer);
        assert!(texts.lock().is_empty());

        // Edit the term, then click away: text clears.
        widget.set_search_term("holl");
        focus.set_focus(&mut widget, FocusReason::Pointer);
        focus.clear_focus(&mut widget, FocusReason::Pointer);
        assert_eq!(*texts.lock(), vec!["".to_string()]);
    }

    #[test]
    fn test_hover_moves_highlight_idempotently() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        let moves = Arc::new(Mutex::new(Vec::new()));
        let moves_clone = moves.clone();
        widget.highlighted.connect(move |choice| {
            moves_clone.lock().push(choice.value.clone());
        });

        hover_row(&mut widget, 1);
        assert_eq!(widget.highlighted_index(), Some(1));

        hover_row(&mut widget, 1);
        hover_row(&mut widget, 1);
        assert_eq!(widget.highlighted_index(), Some(1));
        assert_eq!(*moves.lock(), vec!["hoo".to_string()]);
    }

    #[test]
    fn test_hover_when_closed_is_ignored() {
        setup();
        let mut widget = sample_widget();

        hover_row(&mut widget, 1);
        assert_eq!(widget.highlighted_index(), None);
    }

    #[test]
    fn test_toggle_press_requests_focus_when_closed() {
        setup();
        let mut widget = sample_widget();

        let requested = Arc::new(Mutex::new(0));
        let requested_clone = requested.clone();
        widget.focus_requested.connect(move |_| {
            *requested_clone.lock() += 1;
        });

        press_toggle(&mut widget);
        assert_eq!(*requested.lock(), 1);
        assert!(!widget.is_open()); // opens only once the host focuses us
    }

    #[test]
    fn test_toggle_press_closes_when_open() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let texts = capture_text(&widget);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        press_toggle(&mut widget);
        assert!(!widget.is_open());
        assert_eq!(widget.highlighted_index(), None);

        // No commit happened, so the following blur applies the normal
        // policy and clears the unaccepted text.
        focus.clear_focus(&mut widget, FocusReason::Other);
        assert_eq!(*texts.lock(), vec!["".to_string()]);
    }

    #[test]
    fn test_text_input_is_forwarded_not_stored() {
        setup();
        let mut widget = sample_widget();
        let texts = capture_text(&widget);

        let mut event = WidgetEvent::TextInput(TextInputEvent::new("hol"));
        widget.event(&mut event);
        assert!(event.is_accepted());

        assert_eq!(*texts.lock(), vec!["hol".to_string()]);
        // The widget's own term is untouched until the host pushes it back.
        assert_eq!(widget.search_term(), "");
    }

    #[test]
    fn test_term_change_revalidates_highlight() {
        setup();
        let mut widget = sample_widget().with_search_term("ho");
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        press_key(&mut widget, Key::ArrowDown);
        assert_eq!(widget.highlighted_index(), Some(1));

        // Narrowing the term shrinks the list; the highlight resets to 0.
        widget.set_search_term("holly");
        assert_eq!(widget.highlighted_index(), Some(0));

        // No matches at all: highlight is dropped.
        widget.set_search_term("zzz");
        assert_eq!(widget.highlighted_index(), None);
    }

    #[test]
    fn test_max_options_truncates_navigation_range() {
        setup();
        let mut widget = sample_widget().with_search_term("ho").with_max_options(1);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        assert_eq!(widget.visible_rows(), vec![1]); // only hoo

        for _ in 0..3 {
            press_key(&mut widget, Key::ArrowDown);
        }
        assert_eq!(widget.highlighted_index(), Some(0));
    }

    #[test]
    fn test_max_options_zero_shows_nothing() {
        setup();
        let mut widget = sample_widget().with_max_options(0);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        assert!(widget.visible_rows().is_empty());
        assert_eq!(widget.highlighted_index(), None);
        assert!(widget.popup_view().no_results);
    }

    #[test]
    fn test_popup_view_contents() {
        setup();
        let mut widget = sample_widget().with_search_term("ho").with_max_height(120.0);
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        let view = widget.popup_view();
        assert!(view.visible);
        assert!(!view.no_results);
        assert_eq!(view.max_height, Some(120.0));
        assert_eq!(
            view.rows,
            vec![
                PopupRow {
                    row: 1,
                    value: "hoo".to_string(),
                },
                PopupRow {
                    row: 2,
                    value: "holly".to_string(),
                },
            ]
        );
        assert!(view.is_highlighted(0));
    }

    #[test]
    fn test_clear_selection_emits_none() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);
        press_row(&mut widget, 0); // accept "hey"
        assert_eq!(widget.last_accepted(), Some("hey"));

        let accepted = capture_accepted(&widget);
        let texts = capture_text(&widget);
        widget.clear_selection();

        assert_eq!(widget.last_accepted(), None);
        assert_eq!(*accepted.lock(), vec![None]);
        assert_eq!(*texts.lock(), vec!["".to_string()]);
    }

    #[test]
    fn test_unhandled_key_propagates() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();
        focus.set_focus(&mut widget, FocusReason::Pointer);

        let mut event =
            WidgetEvent::KeyPress(KeyPressEvent::new(Key::Tab, KeyboardModifiers::NONE));
        assert!(!widget.event(&mut event));
        assert!(!event.is_accepted());
        assert!(event.should_propagate());
    }

    #[test]
    fn test_disabled_widget_refuses_focus() {
        setup();
        let mut widget = sample_widget();
        widget.set_enabled(false);
        let mut focus = FocusManager::new();

        assert!(!focus.set_focus(&mut widget, FocusReason::Pointer));
        assert!(!widget.is_open());
    }

    #[test]
    fn test_commit_requests_blur() {
        setup();
        let mut widget = sample_widget();
        let mut focus = FocusManager::new();

        let blurs = Arc::new(Mutex::new(0));
        let blurs_clone = blurs.clone();
        widget.blur_requested.connect(move |_| {
            *blurs_clone.lock() += 1;
        });

        focus.set_focus(&mut widget, FocusReason::Pointer);
        press_key(&mut widget, Key::Enter);
        assert_eq!(*blurs.lock(), 1);
    }
}
