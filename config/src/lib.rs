//! # Config Crate
//!
//! Centralized configuration constants for the thread mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, compute_thread_facets};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Derive facet counts for helical tessellation
//! let facets = compute_thread_facets(3.0);
//! assert!(facets >= 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure Data**: No I/O, no platform-specific values, no mutable state
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod standards;
