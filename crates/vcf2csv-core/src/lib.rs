//! Shared building blocks for the vCard to CSV converter.
//!
//! Holds the settings model, the text codec used for every file the
//! pipeline touches, and the error type the other crates wrap.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
