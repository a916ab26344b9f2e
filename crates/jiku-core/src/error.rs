//! Unified error types for named-dimension operations
//!
//! Every fallible operation in this crate reports a `SchemaError`. Name-level
//! failures (unknown, duplicate, or misordered dimension names) are detected
//! eagerly, before any positional kernel runs; kernel failures that slip
//! through nest under [`SchemaError::Kernel`].
//!
//! # Examples
//!
//! ```
//! use jiku_core::error::{SchemaError, SchemaResult};
//!
//! fn require_unique(names: &[&str]) -> SchemaResult<()> {
//!     for (i, name) in names.iter().enumerate() {
//!         if names[i + 1..].contains(name) {
//!             return Err(SchemaError::duplicate_name(*name));
//!         }
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_unique(&["i", "j"]).is_ok());
//! assert!(require_unique(&["i", "i"]).is_err());
//! ```

use jiku_kernels::KernelError;
use thiserror::Error;

/// Top-level error type for all named-dimension operations
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Target names are not a permutation of the current names
    #[error("Schema mismatch: cannot reorder {current:?} as {target:?}")]
    SchemaMismatch {
        target: Vec<String>,
        current: Vec<String>,
    },

    /// A dimension name would appear more than once in one schema
    #[error("Duplicate dimension name '{name}'")]
    DuplicateName { name: String },

    /// A dimension name the operation requires is absent
    #[error("No dimension '{name}' in schema")]
    UnknownDimension { name: String },

    /// Rank disagreement between a buffer or index structure and its schema
    #[error("Rank mismatch in {context}: expected {expected}, got {actual}")]
    RankMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Operand schemas that must agree exactly do not
    #[error("Schema match failed: expected {expected:?}, got {actual:?}")]
    SchemaMatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Registry lookup for an operation name failed
    #[error("Unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// Positional kernel failure below the naming layer
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
}

/// Result type alias for named-dimension operations
pub type SchemaResult<T> = Result<T, SchemaError>;

// Convenience constructors for common error patterns
impl SchemaError {
    /// Create a schema mismatch error from name slices
    pub fn schema_mismatch(target: &[String], current: &[String]) -> Self {
        SchemaError::SchemaMismatch {
            target: target.to_vec(),
            current: current.to_vec(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        SchemaError::DuplicateName { name: name.into() }
    }

    /// Create an unknown dimension error
    pub fn unknown_dimension(name: impl Into<String>) -> Self {
        SchemaError::UnknownDimension { name: name.into() }
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        SchemaError::RankMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a schema match error from name slices
    pub fn schema_match(expected: &[String], actual: &[String]) -> Self {
        SchemaError::SchemaMatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        SchemaError::UnknownOperation { name: name.into() }
    }
}
