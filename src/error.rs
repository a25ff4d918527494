//! Error handling for IS3 extraction operations
//!
//! This module re-exports the error types defined in [`crate::common`].
//! The crate uses thiserror for ergonomic error handling.

pub use crate::common::Is3Error;
pub use crate::common::Result;
