//! Syllabus Core Library
//!
//! Domain logic for the BGFC syllabus generator: the curriculum record, its
//! edits and validators, and the canonical text every export derives from.

pub mod config;
pub mod edit;
pub mod error;
pub mod format;
pub mod logging;
pub mod record;
pub mod render;
pub mod snapshot;
pub mod validation;
