//! Integer-subscript einsum over dynamic-rank arrays
//!
//! This module provides the contraction primitive behind named-dimension
//! products. Each operand axis is labeled with an integer id; axes sharing an
//! id are constrained to run together, ids absent from the output list are
//! summed over, and the output axes appear in the order the caller lists them.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Direct use of `ndarray` is forbidden per SCIRS2_INTEGRATION_POLICY.md

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::{Num, Zero};

/// Contract labeled operands down to the requested output axes
///
/// Generalizes matrix multiplication, batched products, traces, and full
/// reductions. Every operand pairs a view with one subscript id per axis;
/// `output` lists the ids (and order) of the result axes. Ids appearing in
/// the inputs but not in `output` are summed away.
///
/// # Arguments
///
/// * `operands` - Views paired with per-axis subscript ids
/// * `output` - Subscript ids of the result, in result-axis order
///
/// # Returns
///
/// The contracted tensor, with one axis per entry of `output`
///
/// # Errors
///
/// Returns error if:
/// - `operands` is empty
/// - An operand's subscript count differs from its rank
/// - Two axes bound to the same id have different sizes
/// - `output` repeats an id or names one no operand provides
///
/// # Complexity
///
/// Time: O(∏(output_dims) × ∏(summed_dims) × operands)
/// Space: O(∏(output_dims))
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array;
/// use jiku_kernels::einsum;
///
/// let a = Array::from_shape_vec(vec![2, 3], (0..6).map(|x| x as f64).collect()).unwrap();
/// let b = Array::from_shape_vec(vec![3, 4], (0..12).map(|x| x as f64).collect()).unwrap();
///
/// // Matrix multiplication: axis id 1 is shared and summed away
/// let ops = [(a.view(), &[0, 1][..]), (b.view(), &[1, 2][..])];
/// let c = einsum(&ops, &[0, 2]).unwrap();
/// assert_eq!(c.shape(), &[2, 4]);
/// ```
pub fn einsum<T>(
    operands: &[(ArrayView<T, IxDyn>, &[usize])],
    output: &[usize],
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num + Zero,
{
    if operands.is_empty() {
        return Err(KernelError::empty_input("einsum", "operands"));
    }

    // Bind each id to a size, in first-appearance order
    let mut ids: Vec<usize> = Vec::new();
    let mut sizes: Vec<usize> = Vec::new();
    for (view, subs) in operands {
        if subs.len() != view.ndim() {
            return Err(KernelError::subscript_mismatch(
                "einsum",
                subs.len(),
                view.ndim(),
            ));
        }
        for (axis, &id) in subs.iter().enumerate() {
            let dim = view.shape()[axis];
            match ids.iter().position(|&known| known == id) {
                Some(pos) => {
                    if sizes[pos] != dim {
                        return Err(KernelError::size_conflict("einsum", id, sizes[pos], dim));
                    }
                }
                None => {
                    ids.push(id);
                    sizes.push(dim);
                }
            }
        }
    }

    // The output may only rearrange known ids, each at most once
    for (i, &id) in output.iter().enumerate() {
        if !ids.contains(&id) {
            return Err(KernelError::unknown_id("einsum", id));
        }
        if output[i + 1..].contains(&id) {
            return Err(KernelError::operation_error(
                "einsum",
                format!("output index {} listed more than once", id),
            ));
        }
    }

    // Loop order: output ids first, then the summed ids
    let summed: Vec<usize> = ids
        .iter()
        .copied()
        .filter(|id| !output.contains(id))
        .collect();
    let size_of = |id: usize| -> usize {
        let pos = ids.iter().position(|&known| known == id).unwrap();
        sizes[pos]
    };
    let out_shape: Vec<usize> = output.iter().map(|&id| size_of(id)).collect();
    let summed_shape: Vec<usize> = summed.iter().map(|&id| size_of(id)).collect();

    // Per-operand map from axis to position in (output ++ summed)
    let loop_ids: Vec<usize> = output.iter().chain(summed.iter()).copied().collect();
    let slot_maps: Vec<Vec<usize>> = operands
        .iter()
        .map(|(_, subs)| {
            subs.iter()
                .map(|id| loop_ids.iter().position(|known| known == id).unwrap())
                .collect()
        })
        .collect();

    let mut result = Array::<T, IxDyn>::zeros(IxDyn(&out_shape));
    let out_size: usize = out_shape.iter().product();
    let summed_size: usize = summed_shape.iter().product();

    let mut loop_coord = vec![0usize; loop_ids.len()];
    for out_idx in 0..out_size {
        let out_coord = linear_to_coord(out_idx, &out_shape);
        loop_coord[..out_coord.len()].copy_from_slice(&out_coord);

        let mut sum = T::zero();
        for sum_idx in 0..summed_size {
            let sum_coord = linear_to_coord(sum_idx, &summed_shape);
            loop_coord[out_coord.len()..].copy_from_slice(&sum_coord);

            let mut term = T::one();
            for ((view, _), slots) in operands.iter().zip(slot_maps.iter()) {
                let coord: Vec<usize> = slots.iter().map(|&slot| loop_coord[slot]).collect();
                term = term * view[&coord[..]].clone();
            }
            sum = sum + term;
        }
        result[&out_coord[..]] = sum;
    }

    Ok(result)
}

/// Convert linear index to multi-dimensional coordinates
fn linear_to_coord(mut linear_idx: usize, shape: &[usize]) -> Vec<usize> {
    let mut coord = vec![0; shape.len()];
    for i in (0..shape.len()).rev() {
        coord[i] = linear_idx % shape[i];
        linear_idx /= shape[i];
    }
    coord
}
