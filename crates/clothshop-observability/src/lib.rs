//! Structured logging for the clothshop widget and tools.
//!
//! Library crates only emit `tracing` events. This crate turns them into
//! [`LogEntry`] records and hands the rendered line to a [`LogSink`]:
//!
//! - `StructuredLayer` - `tracing_subscriber` layer producing `LogEntry` values
//! - `LogSink` - Where rendered lines go (stderr, memory, browser console)
//! - `init` / `init_with_sink` - Install the layer as the global subscriber

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;
