//! # AVLDB Configuration Module
//!
//! This module centralizes the configuration constants for AVLDB. Constants
//! are grouped by functional area and interdependencies are documented and
//! enforced through compile-time assertions.
//!
//! ## Why Centralization?
//!
//! The snapshot format is defined by a handful of values (magic bytes,
//! version, header size, node tags) that the encoder, the decoder, and the
//! header struct must all agree on. Co-locating them keeps the on-disk
//! format defined in exactly one place.
//!
//! ## Module Organization
//!
//! - [`constants`]: All configuration values with dependency documentation

pub mod constants;
pub use constants::*;
