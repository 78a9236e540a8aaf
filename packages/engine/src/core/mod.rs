//! Engine-wide plumbing: error type and logging glue.

pub mod error;
pub mod logging;

pub use error::{EngineError, EngineResult};
