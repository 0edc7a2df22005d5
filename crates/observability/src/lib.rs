//! Process-wide logging setup shared by stockroom binaries.

pub mod tracing;

pub use crate::tracing::{DEFAULT_FILTER, LogFormat};
