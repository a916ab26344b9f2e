//! Collective operations: combining equally-named tensors.
//!
//! [`stack`] joins operands along a brand-new named dimension; [`cat`]
//! extends one they already have. Both demand exactly matching schemas,
//! order included. Operands whose axes merely *permute* each other's names
//! are rejected; align them first with
//! [`NamedTensor::force_order`](crate::NamedTensor::force_order).

use crate::error::{SchemaError, SchemaResult};
use crate::tensor::NamedTensor;
use jiku_kernels::{self as kernels, KernelError};

/// Stack tensors along a new leading dimension called `name`.
///
/// All operands must share one schema exactly. The result's schema is that
/// schema with `name` prepended; the new dimension's size is the operand
/// count.
///
/// # Errors
///
/// Returns [`SchemaError::SchemaMatch`] on any schema disagreement,
/// [`SchemaError::DuplicateName`] if `name` is already one of the operand
/// dimensions, and a kernel error for an empty operand list or size
/// disagreement.
///
/// # Examples
///
/// ```
/// use jiku_core::{collect::stack, NamedTensor};
///
/// let a = NamedTensor::from_vec(vec![1.0, 2.0], &[2], &["x"]).unwrap();
/// let b = NamedTensor::from_vec(vec![3.0, 4.0], &[2], &["x"]).unwrap();
///
/// let s = stack(&[&a, &b], "pair").unwrap();
/// assert_eq!(s.schema().names(), &["pair", "x"]);
/// assert_eq!(s.get(&[1, 0]), Some(&3.0));
/// ```
pub fn stack<T>(tensors: &[&NamedTensor<T>], name: &str) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    let first = tensors
        .first()
        .ok_or_else(|| KernelError::empty_input("stack", "tensors"))?;
    for tensor in &tensors[1..] {
        if tensor.schema() != first.schema() {
            return Err(SchemaError::schema_match(
                first.schema().names(),
                tensor.schema().names(),
            ));
        }
    }

    // Name-level failures fire before any buffer work
    let schema = first.schema().prepended(name)?;

    let views: Vec<_> = tensors.iter().map(|t| t.view()).collect();
    let values = kernels::stack(&views)?;
    NamedTensor::with_schema(values, schema)
}

/// Concatenate tensors along the existing dimension called `dim`.
///
/// All operands must share one schema exactly; `dim` is resolved against
/// it. The result keeps that schema, with the addressed dimension's size
/// summed across the operands.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] if `dim` is not an operand
/// dimension, [`SchemaError::SchemaMatch`] on schema disagreement, and a
/// kernel error for an empty list or off-axis size disagreement.
pub fn cat<T>(tensors: &[&NamedTensor<T>], dim: &str) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    let first = tensors
        .first()
        .ok_or_else(|| KernelError::empty_input("cat", "tensors"))?;
    let axis = first.schema().index_of(dim)?;
    for tensor in &tensors[1..] {
        if tensor.schema() != first.schema() {
            return Err(SchemaError::schema_match(
                first.schema().names(),
                tensor.schema().names(),
            ));
        }
    }

    let views: Vec<_> = tensors.iter().map(|t| t.view()).collect();
    let values = kernels::concat(&views, axis)?;
    NamedTensor::with_schema(values, first.schema().clone())
}
