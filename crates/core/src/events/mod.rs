//! Store change events.
//!
//! Stores emit a [`StoreEvent`] through a [`StoreEventSink`] after every
//! mutation. Views subscribe through whatever adapter the runtime installs
//! (the web server fans them out over SSE).

mod sink;
mod store_event;

pub use sink::*;
pub use store_event::*;
