//! Gantry Core
//!
//! Core types for the Gantry pipeline CLI.
//!
//! This crate contains:
//! - Domain types: pipeline configurations as the gate service reports them
//! - Decoding: strict conversion of gate response bodies into domain types

pub mod decode;
pub mod domain;

pub use decode::{DecodeError, decode_pipeline_configs, encode_pipeline_configs};
