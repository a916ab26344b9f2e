//! # Jiku (軸) - Named-Dimension Tensors
//!
//! **Tensor algebra addressed by dimension name** instead of axis position:
//! contraction, indexing, and combining that never depend on how an operand
//! happens to be laid out in memory.
//!
//! This is the **meta crate** that re-exports all Jiku components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use jiku::prelude::*;
//!
//! let a = NamedTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2], &["i", "k"]).unwrap();
//! let b = NamedTensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2], &["k", "j"]).unwrap();
//!
//! // Matrix multiplication is "contract over k" - no axis numbers anywhere
//! let c = dot(&["k"], &[&a, &b]).unwrap();
//! assert_eq!(c.schema().names(), &["i", "j"]);
//! ```
//!
//! ## Components
//!
//! ### Named Layer ([`core`])
//!
//! Schemas, named tensors, contraction, name-addressed indexing, stacking.
//!
//! ```
//! use jiku::core::NamedTensor;
//!
//! let t = NamedTensor::from_vec(vec![1.0, -2.0], &[2], &["x"]).unwrap();
//! let doubled = t.map(|v| v * 2.0);
//! assert_eq!(doubled.values().as_slice().unwrap(), &[2.0, -4.0]);
//! assert_eq!(doubled.schema().names(), &["x"]);
//! ```
//!
//! ### Positional Kernels ([`kernels`])
//!
//! The raw, name-free primitives the named layer dispatches to:
//! integer-subscript einsum, gather/scatter, masked select, narrow.
//!
//! ```ignore
//! use jiku::kernels::narrow;
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//!
//! let a = Array::from_shape_vec(IxDyn(&[4]), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
//! let mid = narrow(&a.view(), 0, 1, 2).unwrap();
//! assert_eq!(mid.as_slice().unwrap(), &[1.0, 2.0]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable schema serialization in `jiku-core`
//!
//! ## Documentation
//!
//! - [GitHub Repository](https://github.com/cool-japan/jiku)

#![deny(warnings)]

// Re-export all components
pub use jiku_core as core;
pub use jiku_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use jiku::prelude::*;
    //!
    //! let t = NamedTensor::<f64>::zeros(&[("batch", 4), ("feat", 8)]).unwrap();
    //! assert_eq!(t.schema().names(), &["batch", "feat"]);
    //! ```

    // Core types
    pub use crate::core::{NamedTensor, Schema, SchemaError, SchemaResult};

    // Contraction and combining
    pub use crate::core::{cat, dot, stack};

    // Name-addressed indexing
    pub use crate::core::{
        gather, masked_select, multi_index_select, narrow, nonzero, scatter_,
    };

    // Registry dispatch
    pub use crate::core::{build, build_full, elementwise, lookup};
}
