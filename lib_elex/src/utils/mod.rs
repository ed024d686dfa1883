//! # Utilities Module
//!
//! Small helpers shared by the recorder and the requester.

/// Clock helpers.
pub mod time;
