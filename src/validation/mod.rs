//! Link validation logic
//!
//! This module holds the cheap syntactic check applied to every cell and
//! the network probe run for cells that pass it.

pub mod format;
pub mod probe;

// Re-export commonly used items
pub use format::is_well_formed;
pub use probe::{HttpProbe, ProbeLink};
