//! Core domain types
//!
//! Read-only structures decoded from gate responses. Nothing in this crate
//! persists or mutates them after decoding.

pub mod pipeline;
