//! # jiku-core
//!
//! Named-dimension tensor algebra for Jiku.
//!
//! ## Overview
//!
//! This crate pairs every tensor with a [`Schema`]: an ordered,
//! duplicate-free list of dimension names, one per axis. Operations address
//! dimensions by those names instead of axis positions, so the memory
//! layout of an operand never changes a result — only its names do.
//!
//! **Key Features:**
//! - ✅ **Named schemas** - Ordered, duplicate-free dimension names validated at construction
//! - ✅ **Order-insensitive contraction** - [`dot`] pairs axes by name across any operand count
//! - ✅ **Name-addressed indexing** - gather / scatter / masked select / coordinate tables
//! - ✅ **Combining** - [`stack`] and [`cat`] under exact schema agreement
//! - ✅ **Operation registry** - builders and elementwise maps dispatchable by name
//! - ✅ **Serde support** - optional schema serialization behind the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use jiku_core::{dot, NamedTensor};
//!
//! let a = NamedTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2], &["i", "k"]).unwrap();
//! let b = NamedTensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2], &["k", "j"]).unwrap();
//!
//! // Contract over "k" by name; axis positions never matter
//! let c = dot(&["k"], &[&a, &b]).unwrap();
//! assert_eq!(c.schema().names(), &["i", "j"]);
//! assert_eq!(c.get(&[0, 0]), Some(&19.0));
//!
//! // The same call with b's axes flipped gives the same answer
//! let b_flipped = b.force_order(&["j", "k"]).unwrap();
//! let c_flipped = dot(&["k"], &[&a, &b_flipped]).unwrap();
//! assert_eq!(c_flipped, c);
//! ```
//!
//! ## SciRS2 Integration
//!
//! This crate uses `scirs2-core` for all array operations and numerical
//! computations. Direct use of `ndarray`, `rand`, or `num-traits` is not
//! permitted. See `SCIRS2_INTEGRATION_POLICY.md` for details.

#![deny(warnings)]

pub mod align;
pub mod collect;
pub mod contract;
pub mod error;
pub mod indexed;
pub mod registry;
pub mod schema;
pub mod tensor;


// Re-exports
pub use align::{broadcast_order, substituted_order};
pub use collect::{cat, stack};
pub use contract::dot;
pub use error::{SchemaError, SchemaResult};
pub use indexed::{
    gather, masked_select, multi_index_select, narrow, nonzero, nonzero_named, scatter_,
};
pub use registry::{build, build_full, elementwise, lookup, OpSpec, REGISTRY};
pub use schema::{Axis, Names, Rank, Schema, Shape};
pub use tensor::NamedTensor;
