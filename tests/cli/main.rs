//! Integration tests for the syllabus CLI
//!
//! Each test runs the binary inside a temporary directory with its own config
//! directory, so the working record and exports never touch the real home.

mod check;
mod edit;
mod export;
mod init;
mod logging;
mod references;
mod render;
mod support;
