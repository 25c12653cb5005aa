//! # Registry Server Library
//!
//! Dependency injection wiring, logging setup and startup utilities for
//! the user registry server.

pub mod di;
pub mod logging;
pub mod startup;
