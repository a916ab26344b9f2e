//! # jiku-kernels
//!
//! Positional tensor kernels for Jiku.
//!
//! ## Overview
//!
//! This crate provides the raw, name-free primitives the `jiku-core` naming
//! layer dispatches to. Everything here works on dynamic-rank views and
//! integer axes; dimension names never appear below this line.
//!
//! **Key Features:**
//! - ✅ **Integer-subscript einsum** - Contraction over labeled axes, any operand count
//! - ✅ **Gather / scatter** - Index-array addressing along one axis, with full pre-validation
//! - ✅ **Masked select** - Broadcastable boolean selection in row-major order
//! - ✅ **Nonzero** - Coordinate tables of non-zero elements
//! - ✅ **Row indexing** - Sub-tensor lookup through leading-axis coordinate rows
//! - ✅ **Narrow / stack / concat** - Range and combining primitives
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//! use jiku_kernels::{einsum, narrow};
//!
//! let a = Array::from_shape_vec(IxDyn(&[2, 3]), (0..6).map(|x| x as f64).collect()).unwrap();
//! let b = Array::from_shape_vec(IxDyn(&[3, 2]), (0..6).map(|x| x as f64).collect()).unwrap();
//!
//! // Matrix multiplication through integer-subscript einsum
//! let ops = [(a.view(), &[0, 1][..]), (b.view(), &[1, 2][..])];
//! let c = einsum(&ops, &[0, 2]).unwrap();
//! assert_eq!(c.shape(), &[2, 2]);
//!
//! // Contiguous range along an axis
//! let first_row = narrow(&a.view(), 0, 0, 1).unwrap();
//! assert_eq!(first_row.shape(), &[1, 3]);
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and numerical
//! computations. Direct use of `ndarray`, `rand`, or `num-traits` is not
//! permitted. See `SCIRS2_INTEGRATION_POLICY.md` for details.

#![deny(warnings)]

pub mod einsum;
pub mod error;
pub mod indexing;
pub mod shape;


// Re-exports
pub use einsum::*;
pub use error::{KernelError, KernelResult};
pub use indexing::*;
pub use shape::*;
