//! Suggestion model contract for autocomplete widgets.
//!
//! The host supplies the candidate pool and the matching logic; the widget
//! only invokes them. [`SuggestionModel`] is the contract: a model exposes
//! its rows and a `filter` that maps the current search term to the rows
//! that should be offered, in display order.

// ============================================================================
// Match Mode
// ============================================================================

/// Controls how [`StringListModel`] matches the search term against values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The value must contain the term anywhere (e.g. "oll" matches "holly").
    #[default]
    Contains,
    /// The value must start with the term.
    Prefix,
}

/// Controls how matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "App" won't match "apple").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "App" will match "apple").
    #[default]
    CaseInsensitive,
}

// ============================================================================
// Suggestion Model Trait
// ============================================================================

/// Trait for providing autocomplete candidates.
///
/// Implement this trait to provide custom data sources and matching. The
/// widget treats rows as opaque beyond their display value and imposes no
/// contract on `filter`'s output: a model may rank, reorder, or return
/// duplicate rows, and the widget will display them as given.
pub trait SuggestionModel: Send + Sync {
    /// Get the number of rows in the model (before filtering).
    fn row_count(&self) -> usize;

    /// Get the display value of the row at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn value(&self, row: usize) -> Option<String>;

    /// Get the rows matching the search term, in display order.
    ///
    /// The default implementation does case-insensitive substring matching
    /// against each row's display value. Models override this to supply the
    /// host's own matching or ranking.
    fn filter(&self, term: &str) -> Vec<usize> {
        let term_lower = term.to_lowercase();
        (0..self.row_count())
            .filter(|&row| {
                self.value(row)
                    .is_some_and(|value| value.to_lowercase().contains(&term_lower))
            })
            .collect()
    }
}

// ============================================================================
// String List Model
// ============================================================================

/// A suggestion model backed by a list of strings.
///
/// This is the common model for simple autocomplete scenarios where the
/// candidates are known ahead of time. Matching behavior is configured via
/// [`MatchMode`] and [`CaseSensitivity`].
#[derive(Debug, Clone, Default)]
pub struct StringListModel {
    items: Vec<String>,
    match_mode: MatchMode,
    case_sensitivity: CaseSensitivity,
}

impl StringListModel {
    /// Create a new string list model with the given items.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            match_mode: MatchMode::default(),
            case_sensitivity: CaseSensitivity::default(),
        }
    }

    /// Create an empty string list model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the match mode using builder pattern.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Get a reference to the items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Set the items.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Add an item to the list.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove an item from the list by value.
    pub fn remove_item(&mut self, item: &str) {
        self.items.retain(|i| i != item);
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn matches(&self, value: &str, term: &str) -> bool {
        let (value, term) = match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => (value.to_string(), term.to_string()),
            CaseSensitivity::CaseInsensitive => (value.to_lowercase(), term.to_lowercase()),
        };
        match self.match_mode {
            MatchMode::Contains => value.contains(&term),
            MatchMode::Prefix => value.starts_with(&term),
        }
    }
}

impl SuggestionModel for StringListModel {
    fn row_count(&self) -> usize {
        self.items.len()
    }

    fn value(&self, row: usize) -> Option<String> {
        self.items.get(row).cloned()
    }

    fn filter(&self, term: &str) -> Vec<usize> {
        (0..self.items.len())
            .filter(|&row| self.matches(&self.items[row], term))
            .collect()
    }
}

impl From<Vec<String>> for StringListModel {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<Vec<&str>> for StringListModel {
    fn from(items: Vec<&str>) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StringListModel {
    fn from(items: [&str; N]) -> Self {
        Self::new(items.into_iter().map(String::from).collect())
    }
}

// ============================================================================
// Truncation
// ============================================================================

/// Truncate a filtered row list to a display limit.
///
/// `None` means unlimited. A limit larger than the list returns the whole
/// list; the filter's order is preserved. `Some(0)` yields an empty list.
pub(crate) fn take<T>(limit: Option<usize>, mut rows: Vec<T>) -> Vec<T> {
    if let Some(n) = limit {
        rows.truncate(n);
    }
    rows
}
