//! ui
//!
//! Terminal output helpers.
//!
//! # Modules
//!
//! - [`output`] - Verbosity levels and message printing

pub mod output;
