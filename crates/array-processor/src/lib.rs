//! array-processor: small array and matrix manipulation utilities.
//!
//! The operations (matching, filtering, rearranging, searching, merging and
//! matrix multiplication) live behind the `ArrayProcessor` trait. Two
//! implementations agree on every input: `LoopProcessor` uses explicit index
//! loops and `IterProcessor` uses iterator adaptors. `build_processor` picks
//! one from a `ProcessorConfig`.
pub mod config;
pub mod error;
pub mod math;
pub mod processor;
pub mod sorting;

pub use config::{FilterMode, ProcessorConfig, ProcessorKind};
pub use error::{ArrayError, Result};
pub use processor::factory::build_processor;
pub use processor::{ArrayProcessor, IterProcessor, LoopProcessor};
