#![allow(clippy::expect_used, clippy::unwrap_used)]
//! End-to-end tests for the conversion pipeline.
//!
//! Every test works inside its own temporary directory, so tests run in
//! parallel without sharing files.

mod convert;
mod failures;
mod fix;
mod helpers;
