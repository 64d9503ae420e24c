//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Vector math
//! - Fixed-step time accumulation
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
