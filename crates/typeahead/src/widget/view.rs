//! Pure render-time view of the popup.
//!
//! The widget never paints. Instead it derives a [`PopupView`] snapshot from
//! its current configuration and interaction state, and any rendering layer
//! turns the snapshot into visuals. Snapshots are cheap, derived on demand,
//! and never cached — the filtered rows depend on configuration the host may
//! change between any two renders.

/// One visible row of the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRow {
    /// The model row this entry came from.
    pub row: usize,
    /// The row's display value.
    pub value: String,
}

/// A render-ready description of the popup surface.
///
/// The popup is visible iff the widget is open *and* the filtered row list
/// is non-empty. When the widget is open over an empty list the renderer
/// should instead style the input itself with a "no results" affordance,
/// signalled by [`no_results`](Self::no_results).
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    /// Whether the popup should be shown at all.
    pub visible: bool,
    /// The rows to display, in filter order, already truncated to the
    /// configured display limit.
    pub rows: Vec<PopupRow>,
    /// Position of the highlighted row within `rows`, if any.
    pub highlighted: Option<usize>,
    /// Maximum popup height in pixels. Presentation hint only.
    pub max_height: Option<f32>,
    /// True while the widget is open but nothing matches the search term.
    pub no_results: bool,
}

impl PopupView {
    /// A view for a closed popup.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            rows: Vec::new(),
            highlighted: None,
            max_height: None,
            no_results: false,
        }
    }

    /// Check whether a given row position is the highlighted one.
    #[inline]
    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted == Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_view() {
        let view = PopupView::hidden();
        assert!(!view.visible);
        assert!(view.rows.is_empty());
        assert!(!view.no_results);
    }

    #[test]
    fn test_is_highlighted() {
        let view = PopupView {
            visible: true,
            rows: vec![
                PopupRow {
                    row: 0,
                    value: "a".into(),
                },
                PopupRow {
                    row: 2,
                    value: "b".into(),
                },
            ],
            highlighted: Some(1),
            max_height: None,
            no_results: false,
        };

        assert!(!view.is_highlighted(0));
        assert!(view.is_highlighted(1));
    }
}
