//! render
//!
//! Pure artifact rendering. Every function here takes the built tree (or
//! the discrepancy list) and returns the artifact's full text; nothing in
//! this module touches the filesystem.
//!
//! # Modules
//!
//! - [`json`] - The pretty-printed JSON artifact
//! - [`html`] - The static d3 viewer page
//! - [`report`] - The plain-text discrepancy report

pub mod html;
pub mod json;
pub mod report;
