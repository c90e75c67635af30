//! gitai - GitHub automation CLI
//!
//! This library provides the command-line interface for interacting with
//! the GitHub REST API: listing and creating repositories, browsing
//! branches and commits, and managing issues.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;

pub use error::{GitaiError, Result};
