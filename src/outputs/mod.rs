//! Transcript rendering and persistence.
//!
//! This module contains the two ways results leave the program:
//!
//! # Submodules
//!
//! - [`console`]: Renders per-method sections of the stdout transcript
//! - [`json`]: Saves one result set to a pretty-printed JSON file
//!
//! The stdout transcript is the program's product; everything else the run
//! has to say goes through `tracing` on stderr.

pub mod console;
pub mod json;
