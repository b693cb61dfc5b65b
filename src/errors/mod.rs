//! Error types for the tracker
//!
//! Resolver logic produces a single domain failure: a referenced organization,
//! project or task does not exist. Everything else is a storage failure passed
//! through from sea-orm.
//!
//! # Examples
//!
//! ```rust
//! use taskboard::errors::{EntityKind, TrackerError};
//!
//! let err = TrackerError::not_found(EntityKind::Project, 42);
//! assert!(err.is_not_found());
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! ```

pub mod common;
pub mod tracker;

pub use tracker::{EntityKind, TrackerError};

#[cfg(feature = "graphql")]
pub use common::ToGraphQLError;

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
