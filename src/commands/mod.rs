//! Command handlers
//!
//! This module contains the command handlers an embedding shell invokes.

pub mod comments;

// Re-export all command functions for easy access
pub use comments::*;
