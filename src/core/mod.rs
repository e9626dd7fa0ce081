//! core
//!
//! Core domain types and tree construction for Kindred.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PersonId
//! - [`record`] - Register line parsing
//! - [`tree`] - The family tree arena and its nested node form
//! - [`builder`] - One-pass tree construction with gap checking
//! - [`discrepancy`] - Missing-child-number findings
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for input and artifacts
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Construction is a single deterministic pass over the input
//! - Parsing and rendering never touch the filesystem

pub mod builder;
pub mod config;
pub mod discrepancy;
pub mod paths;
pub mod record;
pub mod tree;
pub mod types;
