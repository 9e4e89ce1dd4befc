//! Concrete widget implementations.

mod typeahead;

pub use typeahead::{Choice, Typeahead, UpArrowPolicy};
