//! Structured logging
//!
//! Message shapes for the `log` facade live here so library and CLI code
//! report scans the same way.

pub mod logging;
