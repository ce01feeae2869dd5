//! Capture filter: session-bracketed request recording

mod entry;
mod filter;

pub use entry::{LogEntry, ObservedRequest};
pub use filter::CaptureFilter;
