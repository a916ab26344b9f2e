//! Error types for positional kernel operations
//!
//! This module provides structured error types for the kernels, so callers
//! can match on failure causes instead of parsing message strings.

use std::fmt;

/// Error type for positional kernel operations
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Shape mismatch between operands
    ShapeMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// Axis outside the operand's rank
    InvalidAxis {
        operation: String,
        axis: usize,
        rank: usize,
    },

    /// Conflicting sizes bound to the same contraction index
    SizeConflict {
        operation: String,
        id: usize,
        first: usize,
        second: usize,
    },

    /// Subscript count does not match operand rank
    SubscriptMismatch {
        operation: String,
        subscripts: usize,
        rank: usize,
    },

    /// Output subscript that no operand provides
    UnknownId { operation: String, id: usize },

    /// Index value outside the addressed axis
    IndexOutOfBounds {
        operation: String,
        index: usize,
        axis: usize,
        bound: usize,
    },

    /// Range falls outside the addressed axis
    InvalidRange {
        operation: String,
        start: usize,
        len: usize,
        size: usize,
    },

    /// Empty input not allowed
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// Generic operation error with context
    OperationError { operation: String, message: String },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ShapeMismatch {
                operation,
                expected,
                actual,
                context,
            } => write!(
                f,
                "{}: shape mismatch - expected {:?}, got {:?}. {}",
                operation, expected, actual, context
            ),

            KernelError::InvalidAxis {
                operation,
                axis,
                rank,
            } => write!(
                f,
                "{}: invalid axis {}: tensor has rank {}",
                operation, axis, rank
            ),

            KernelError::SizeConflict {
                operation,
                id,
                first,
                second,
            } => write!(
                f,
                "{}: size conflict for index {}: bound to {} then {}",
                operation, id, first, second
            ),

            KernelError::SubscriptMismatch {
                operation,
                subscripts,
                rank,
            } => write!(
                f,
                "{}: operand of rank {} labeled with {} subscripts",
                operation, rank, subscripts
            ),

            KernelError::UnknownId { operation, id } => write!(
                f,
                "{}: output index {} does not appear in any operand",
                operation, id
            ),

            KernelError::IndexOutOfBounds {
                operation,
                index,
                axis,
                bound,
            } => write!(
                f,
                "{}: index {} out of bounds for axis {} of size {}",
                operation, index, axis, bound
            ),

            KernelError::InvalidRange {
                operation,
                start,
                len,
                size,
            } => write!(
                f,
                "{}: range starting at {} with length {} exceeds axis size {}",
                operation, start, len, size
            ),

            KernelError::EmptyInput {
                operation,
                parameter,
            } => write!(
                f,
                "{}: empty input not allowed for parameter '{}'",
                operation, parameter
            ),

            KernelError::OperationError { operation, message } => {
                write!(f, "{}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KernelError::ShapeMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an invalid axis error
    pub fn invalid_axis(operation: impl Into<String>, axis: usize, rank: usize) -> Self {
        KernelError::InvalidAxis {
            operation: operation.into(),
            axis,
            rank,
        }
    }

    /// Create a size conflict error
    pub fn size_conflict(
        operation: impl Into<String>,
        id: usize,
        first: usize,
        second: usize,
    ) -> Self {
        KernelError::SizeConflict {
            operation: operation.into(),
            id,
            first,
            second,
        }
    }

    /// Create a subscript mismatch error
    pub fn subscript_mismatch(
        operation: impl Into<String>,
        subscripts: usize,
        rank: usize,
    ) -> Self {
        KernelError::SubscriptMismatch {
            operation: operation.into(),
            subscripts,
            rank,
        }
    }

    /// Create an unknown output id error
    pub fn unknown_id(operation: impl Into<String>, id: usize) -> Self {
        KernelError::UnknownId {
            operation: operation.into(),
            id,
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(
        operation: impl Into<String>,
        index: usize,
        axis: usize,
        bound: usize,
    ) -> Self {
        KernelError::IndexOutOfBounds {
            operation: operation.into(),
            index,
            axis,
            bound,
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(
        operation: impl Into<String>,
        start: usize,
        len: usize,
        size: usize,
    ) -> Self {
        KernelError::InvalidRange {
            operation: operation.into(),
            start,
            len,
            size,
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a generic operation error
    pub fn operation_error(operation: impl Into<String>, message: impl Into<String>) -> Self {
        KernelError::OperationError {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
