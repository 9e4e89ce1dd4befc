//! Logging facilities for Typeahead.
//!
//! Typeahead uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All spans and events carry explicit targets so individual subsystems can
//! be filtered with `tracing` directives, e.g.
//! `RUST_LOG=typeahead_core::signal=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeahead_core::signal";
    /// Object registry target.
    pub const OBJECT: &str = "typeahead_core::object";
    /// Widget interaction target.
    pub const WIDGET: &str = "typeahead::widget";
}
