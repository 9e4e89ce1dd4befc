//! Core systems for Typeahead.
//!
//! This crate provides the foundational components of the Typeahead widget
//! library:
//!
//! - **Object Model**: Object identity, naming, and the global registry
//! - **Signal/Slot System**: Type-safe widget-to-host communication
//! - **Errors**: The crate-wide error types
//! - **Logging**: `tracing` targets and subscriber guidance
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{CoreError, ObjectError, Result, SignalError};
pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectId, ObjectRegistry,
    ObjectResult, SharedObjectRegistry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
