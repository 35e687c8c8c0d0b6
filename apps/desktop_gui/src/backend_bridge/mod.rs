//! Bridge between runtime tasks and the UI thread.

pub mod runtime;
pub mod sink;
