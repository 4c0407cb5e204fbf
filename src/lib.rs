//! AI service for the pet diary app
//!
//! Accepts a photo upload and answers with what was detected in it plus a
//! short diary entry written from the pet's point of view. Detection is
//! currently mocked; see [`analysis::MockAnalyzer`].

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
