//! Shared test utilities for the Wrench workspace.
//!
//! This crate provides resource-tree fixtures so crate test suites do not
//! each hand-roll temporary directories. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`resources`]: [`TestResources`] builder for temporary resource roots
//! - [`scenario`]: the `com.example.app` deployment used across suites

pub mod resources;
pub mod scenario;

pub use resources::TestResources;
