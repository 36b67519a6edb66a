//! CLI utilities for the Folio spotlight tools
//!
//! Provides shared CLI functionality:
//! - Ranked result rendering with match highlighting
//! - Status messages

#![warn(missing_docs)]

pub mod output;
