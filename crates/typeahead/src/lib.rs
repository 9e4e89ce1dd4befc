//! Typeahead - a rendering-agnostic autocomplete/combobox widget.
//!
//! This is the main umbrella crate. It re-exports the core systems and
//! provides the widget module.
//!
//! # Example
//!
//! ```
//! use typeahead::widget::{StringListModel, Typeahead};
//!
//! typeahead::init_global_registry();
//!
//! let mut input = Typeahead::new()
//!     .with_model(Box::new(StringListModel::from(["hey", "hoo", "holly"])))
//!     .with_max_options(4)
//!     .with_placeholder("Search for a hint");
//!
//! input.accepted.connect(|choice| {
//!     println!("committed: {:?}", choice);
//! });
//!
//! input.set_search_term("ho");
//! assert_eq!(input.visible_rows(), vec![1, 2]);
//! ```

pub use typeahead_core::*;

pub mod widget;
