//! Name-order computation for operand alignment.
//!
//! Indexed operations pair tensors whose schemas must agree up to
//! substitution or broadcasting. The helpers here compute the target name
//! orders; the actual permutation happens through
//! [`NamedTensor::force_order`](crate::NamedTensor::force_order).

use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;

/// Name order aligning a boolean mask with a tensor for broadcasting.
///
/// Every mask dimension must also be a tensor dimension; the returned order
/// is the tensor's own name order. The mask is expected to be permuted to
/// the subsequence of this order it shares, with size-1 axes standing in for
/// the dimensions it lacks.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] naming the first mask dimension
/// the tensor does not have.
///
/// # Examples
///
/// ```
/// use jiku_core::{align, Schema};
///
/// let tensor = Schema::new(["batch", "time", "features"]).unwrap();
/// let mask = Schema::new(["time"]).unwrap();
///
/// let order = align::broadcast_order(&mask, &tensor).unwrap();
/// assert_eq!(order, vec!["batch", "time", "features"]);
/// ```
pub fn broadcast_order(mask: &Schema, tensor: &Schema) -> SchemaResult<Vec<String>> {
    for name in mask.names() {
        if !tensor.contains(name) {
            return Err(SchemaError::unknown_dimension(name.as_str()));
        }
    }
    Ok(tensor.names().to_vec())
}

/// A schema's name order with one name substituted.
///
/// Used by gather and scatter: the index tensor is aligned to the data
/// tensor's order, except that the addressed dimension `from` is replaced by
/// the index tensor's own dimension `to`.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] if `from` is not in the schema.
pub fn substituted_order(schema: &Schema, from: &str, to: &str) -> SchemaResult<Vec<String>> {
    let pos = schema.index_of(from)?;
    let mut order: Vec<String> = schema.names().to_vec();
    order[pos] = to.to_string();
    Ok(order)
}
