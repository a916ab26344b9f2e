//! Index-driven kernels: gather, scatter, masked selection, coordinate lookup
//!
//! These primitives address elements through integer or boolean index arrays
//! rather than contiguous ranges. All of them validate fully before touching
//! any output, so a failed call never leaves partial writes behind.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Direct use of `ndarray` is forbidden per SCIRS2_INTEGRATION_POLICY.md

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::Zero;

/// Gather values along one axis through an index array
///
/// The output has the index array's shape. Each output element is read from
/// the input at the output's own coordinate, with the `axis` component
/// replaced by the index value stored there:
/// `out[c] = input[c with c[axis] = index[c]]`.
///
/// # Arguments
///
/// * `input` - Source tensor
/// * `axis` - Axis whose coordinate comes from the index array
/// * `index` - Same rank as `input`; off-axis sizes must not exceed the input's
///
/// # Errors
///
/// Returns error if the axis is out of range, the index rank or off-axis
/// sizes disagree with the input, or any index value is out of bounds.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{array, Array, IxDyn};
/// use jiku_kernels::gather;
///
/// let input = array![[10.0, 20.0], [30.0, 40.0]].into_dyn();
/// let index = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1usize, 0, 0, 0]).unwrap();
///
/// let out = gather(&input.view(), 1, &index.view()).unwrap();
/// assert_eq!(out[&[0, 0][..]], 20.0);
/// assert_eq!(out[&[0, 1][..]], 10.0);
/// assert_eq!(out[&[1, 0][..]], 30.0);
/// ```
pub fn gather<T>(
    input: &ArrayView<T, IxDyn>,
    axis: usize,
    index: &ArrayView<usize, IxDyn>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    let rank = input.ndim();
    if axis >= rank {
        return Err(KernelError::invalid_axis("gather", axis, rank));
    }
    if index.ndim() != rank {
        return Err(KernelError::shape_mismatch(
            "gather",
            input.shape().to_vec(),
            index.shape().to_vec(),
            "Index must have the same rank as the input",
        ));
    }
    for d in 0..rank {
        if d != axis && index.shape()[d] > input.shape()[d] {
            return Err(KernelError::shape_mismatch(
                "gather",
                input.shape().to_vec(),
                index.shape().to_vec(),
                "Index sizes off the gather axis must not exceed the input's",
            ));
        }
    }

    let bound = input.shape()[axis];
    for &picked in index.iter() {
        if picked >= bound {
            return Err(KernelError::index_out_of_bounds(
                "gather", picked, axis, bound,
            ));
        }
    }

    let result = Array::from_shape_fn(IxDyn(index.shape()), |ix| {
        let mut coord: Vec<usize> = (0..rank).map(|d| ix[d]).collect();
        coord[axis] = index[&coord[..]];
        input[&coord[..]].clone()
    });

    Ok(result)
}

/// Scatter source values into a target along one axis, in place
///
/// The inverse of [`gather`]: for every coordinate `c` of the index array,
/// `target[c with c[axis] = index[c]] = src[c]`. Coordinates are visited in
/// row-major order, so when two index entries address the same target cell
/// the later one wins.
///
/// Index and source must have identical shapes, matching the target's rank,
/// with off-axis sizes not exceeding the target's. All validation happens
/// before the first write.
///
/// # Errors
///
/// Returns error if the axis is out of range, shapes disagree, or any index
/// value is out of bounds. On error the target is untouched.
pub fn scatter_into<T>(
    target: &mut Array<T, IxDyn>,
    axis: usize,
    index: &ArrayView<usize, IxDyn>,
    src: &ArrayView<T, IxDyn>,
) -> KernelResult<()>
where
    T: Clone,
{
    let rank = target.ndim();
    if axis >= rank {
        return Err(KernelError::invalid_axis("scatter_into", axis, rank));
    }
    if index.shape() != src.shape() {
        return Err(KernelError::shape_mismatch(
            "scatter_into",
            index.shape().to_vec(),
            src.shape().to_vec(),
            "Index and source must have identical shapes",
        ));
    }
    if index.ndim() != rank {
        return Err(KernelError::shape_mismatch(
            "scatter_into",
            target.shape().to_vec(),
            index.shape().to_vec(),
            "Index must have the same rank as the target",
        ));
    }
    for d in 0..rank {
        if d != axis && index.shape()[d] > target.shape()[d] {
            return Err(KernelError::shape_mismatch(
                "scatter_into",
                target.shape().to_vec(),
                index.shape().to_vec(),
                "Index sizes off the scatter axis must not exceed the target's",
            ));
        }
    }

    let bound = target.shape()[axis];
    for &picked in index.iter() {
        if picked >= bound {
            return Err(KernelError::index_out_of_bounds(
                "scatter_into",
                picked,
                axis,
                bound,
            ));
        }
    }

    for (pat, &picked) in index.indexed_iter() {
        let coord: Vec<usize> = (0..rank).map(|d| pat[d]).collect();
        let mut dst = coord.clone();
        dst[axis] = picked;
        target[&dst[..]] = src[&coord[..]].clone();
    }

    Ok(())
}

/// Select elements where a broadcastable boolean mask is true
///
/// The mask must have the input's rank, and each of its sizes must either
/// equal the input's or be 1 (in which case it is broadcast along that axis).
/// Selected elements are returned as a rank-1 array in row-major order of the
/// input.
///
/// # Errors
///
/// Returns error if the mask rank differs from the input's or a mask size is
/// neither 1 nor the input's size.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{array, Array, IxDyn};
/// use jiku_kernels::masked_select;
///
/// let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
/// let mask = Array::from_shape_vec(IxDyn(&[1, 2]), vec![true, false]).unwrap();
///
/// // The mask row broadcasts over both input rows: column 0 survives
/// let picked = masked_select(&input.view(), &mask.view()).unwrap();
/// assert_eq!(picked.shape(), &[2]);
/// assert_eq!(picked[&[0][..]], 1.0);
/// assert_eq!(picked[&[1][..]], 3.0);
/// ```
pub fn masked_select<T>(
    input: &ArrayView<T, IxDyn>,
    mask: &ArrayView<bool, IxDyn>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    let rank = input.ndim();
    if mask.ndim() != rank {
        return Err(KernelError::shape_mismatch(
            "masked_select",
            input.shape().to_vec(),
            mask.shape().to_vec(),
            "Mask must have the same rank as the input",
        ));
    }
    for d in 0..rank {
        let m = mask.shape()[d];
        if m != input.shape()[d] && m != 1 {
            return Err(KernelError::shape_mismatch(
                "masked_select",
                input.shape().to_vec(),
                mask.shape().to_vec(),
                "Mask sizes must equal the input's or be 1",
            ));
        }
    }

    let broadcast = mask.broadcast(IxDyn(input.shape())).ok_or_else(|| {
        KernelError::shape_mismatch(
            "masked_select",
            input.shape().to_vec(),
            mask.shape().to_vec(),
            "Mask does not broadcast to the input shape",
        )
    })?;

    let mut picked: Vec<T> = Vec::new();
    for (pat, &keep) in broadcast.indexed_iter() {
        if keep {
            let coord: Vec<usize> = (0..rank).map(|d| pat[d]).collect();
            picked.push(input[&coord[..]].clone());
        }
    }

    Ok(Array::from_vec(picked).into_dyn())
}

/// Coordinates of every non-zero element, as a `(count, rank)` table
///
/// Row `i` of the result holds the full coordinate of the i-th non-zero
/// element in row-major order. A tensor with no non-zero elements yields a
/// `(0, rank)` table.
pub fn nonzero<T>(input: &ArrayView<T, IxDyn>) -> KernelResult<Array<usize, IxDyn>>
where
    T: Zero + PartialEq,
{
    let rank = input.ndim();
    let mut coords: Vec<usize> = Vec::new();
    let mut count = 0usize;
    for (pat, value) in input.indexed_iter() {
        if *value != T::zero() {
            count += 1;
            for d in 0..rank {
                coords.push(pat[d]);
            }
        }
    }

    Array::from_shape_vec(IxDyn(&[count, rank]), coords)
        .map_err(|e| KernelError::operation_error("nonzero", e.to_string()))
}

/// Select sub-tensors addressed by rows of leading-axis coordinates
///
/// `rows` is a `(n, k)` table; row `i` fixes the first `k` axes of the input,
/// and the result stacks the `n` addressed sub-tensors along a fresh leading
/// axis: output shape `(n, input.shape[k..])`. With `k == rank` each row
/// picks a single element; with `k == 0` every row replicates the whole
/// input.
///
/// # Errors
///
/// Returns error if `rows` is not rank 2, is wider than the input's rank, or
/// holds a coordinate outside its axis.
pub fn index_rows<T>(
    input: &ArrayView<T, IxDyn>,
    rows: &ArrayView<usize, IxDyn>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    let rank = input.ndim();
    if rows.ndim() != 2 {
        return Err(KernelError::operation_error(
            "index_rows",
            format!("Row table must be rank 2, got rank {}", rows.ndim()),
        ));
    }
    let n = rows.shape()[0];
    let k = rows.shape()[1];
    if k > rank {
        return Err(KernelError::operation_error(
            "index_rows",
            format!("Row width {} exceeds input rank {}", k, rank),
        ));
    }
    for r in 0..n {
        for j in 0..k {
            let picked = rows[&[r, j][..]];
            if picked >= input.shape()[j] {
                return Err(KernelError::index_out_of_bounds(
                    "index_rows",
                    picked,
                    j,
                    input.shape()[j],
                ));
            }
        }
    }

    let out_shape: Vec<usize> = std::iter::once(n)
        .chain(input.shape()[k..].iter().copied())
        .collect();
    let result = Array::from_shape_fn(IxDyn(&out_shape), |ix| {
        let row = ix[0];
        let mut coord = Vec::with_capacity(rank);
        for j in 0..k {
            coord.push(rows[&[row, j][..]]);
        }
        for d in k..rank {
            coord.push(ix[d - k + 1]);
        }
        input[&coord[..]].clone()
    });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    fn index_2x2(values: [usize; 4]) -> Array<usize, IxDyn> {
        Array::from_shape_vec(IxDyn(&[2, 2]), values.to_vec()).unwrap()
    }

    #[test]
    fn test_gather_along_columns() {
        let input = array![[10.0, 20.0], [30.0, 40.0]].into_dyn();
        let index = index_2x2([1, 0, 0, 1]);

        let out = gather(&input.view(), 1, &index.view()).unwrap();

        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out[&[0, 0][..]], 20.0);
        assert_eq!(out[&[0, 1][..]], 10.0);
        assert_eq!(out[&[1, 0][..]], 30.0);
        assert_eq!(out[&[1, 1][..]], 40.0);
    }

    #[test]
    fn test_gather_along_rows() {
        let input = array![[10.0, 20.0], [30.0, 40.0]].into_dyn();
        let index = index_2x2([1, 1, 0, 0]);

        let out = gather(&input.view(), 0, &index.view()).unwrap();

        assert_eq!(out[&[0, 0][..]], 30.0);
        assert_eq!(out[&[0, 1][..]], 40.0);
        assert_eq!(out[&[1, 0][..]], 10.0);
        assert_eq!(out[&[1, 1][..]], 20.0);
    }

    #[test]
    fn test_gather_with_narrower_index() {
        let input = array![[10.0, 20.0, 30.0], [40.0, 50.0, 60.0]].into_dyn();
        let index = Array::from_shape_vec(IxDyn(&[2, 1]), vec![2usize, 0]).unwrap();

        let out = gather(&input.view(), 1, &index.view()).unwrap();

        assert_eq!(out.shape(), &[2, 1]);
        assert_eq!(out[&[0, 0][..]], 30.0);
        assert_eq!(out[&[1, 0][..]], 40.0);
    }

    #[test]
    fn test_gather_rank_mismatch_rejected() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let index = array![0usize, 1].into_dyn();

        let err = gather(&input.view(), 0, &index.view()).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_gather_index_out_of_bounds() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let index = index_2x2([0, 2, 0, 0]);

        let err = gather(&input.view(), 1, &index.view()).unwrap_err();
        assert!(matches!(
            err,
            KernelError::IndexOutOfBounds {
                index: 2,
                bound: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_scatter_writes_through_index() {
        let mut target = Array::<f64, IxDyn>::zeros(IxDyn(&[2, 3]));
        let index = index_2x2([0, 2, 1, 0]);
        let src = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();

        scatter_into(&mut target, 1, &index.view(), &src.view()).unwrap();

        assert_eq!(target[&[0, 0][..]], 1.0);
        assert_eq!(target[&[0, 2][..]], 2.0);
        assert_eq!(target[&[1, 1][..]], 3.0);
        assert_eq!(target[&[1, 0][..]], 4.0);
        assert_eq!(target[&[0, 1][..]], 0.0);
    }

    #[test]
    fn test_scatter_duplicate_targets_last_write_wins() {
        let mut target = Array::<f64, IxDyn>::zeros(IxDyn(&[1, 3]));
        let index = Array::from_shape_vec(IxDyn(&[1, 2]), vec![1usize, 1]).unwrap();
        let src = Array::from_shape_vec(IxDyn(&[1, 2]), vec![5.0, 9.0]).unwrap();

        scatter_into(&mut target, 1, &index.view(), &src.view()).unwrap();

        assert_eq!(target[&[0, 1][..]], 9.0);
    }

    #[test]
    fn test_scatter_shape_mismatch_rejected() {
        let mut target = Array::<f64, IxDyn>::zeros(IxDyn(&[2, 2]));
        let index = index_2x2([0, 0, 0, 0]);
        let src = Array::from_shape_vec(IxDyn(&[2, 1]), vec![1.0, 2.0]).unwrap();

        let err = scatter_into(&mut target, 1, &index.view(), &src.view()).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_scatter_leaves_target_untouched_on_error() {
        let mut target = Array::<f64, IxDyn>::zeros(IxDyn(&[2, 2]));
        // Second index value is out of bounds; the first is valid
        let index = index_2x2([0, 3, 0, 0]);
        let src = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();

        let err = scatter_into(&mut target, 1, &index.view(), &src.view()).unwrap_err();
        assert!(matches!(err, KernelError::IndexOutOfBounds { .. }));
        assert!(target.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_masked_select_exact_mask() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let mask = Array::from_shape_vec(IxDyn(&[2, 2]), vec![true, false, false, true]).unwrap();

        let picked = masked_select(&input.view(), &mask.view()).unwrap();

        assert_eq!(picked.shape(), &[2]);
        assert_eq!(picked[&[0][..]], 1.0);
        assert_eq!(picked[&[1][..]], 4.0);
    }

    #[test]
    fn test_masked_select_broadcast_mask() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let mask = Array::from_shape_vec(IxDyn(&[2, 1]), vec![false, true]).unwrap();

        let picked = masked_select(&input.view(), &mask.view()).unwrap();

        assert_eq!(picked.shape(), &[2]);
        assert_eq!(picked[&[0][..]], 3.0);
        assert_eq!(picked[&[1][..]], 4.0);
    }

    #[test]
    fn test_masked_select_nothing_selected() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let mask = Array::from_shape_vec(IxDyn(&[1, 1]), vec![false]).unwrap();

        let picked = masked_select(&input.view(), &mask.view()).unwrap();
        assert_eq!(picked.shape(), &[0]);
    }

    #[test]
    fn test_masked_select_bad_mask_size_rejected() {
        let input = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
        let mask = Array::from_shape_vec(IxDyn(&[2, 2]), vec![true; 4]).unwrap();

        let err = masked_select(&input.view(), &mask.view()).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_nonzero_coordinates_row_major() {
        let input = array![[0.0, 1.0], [2.0, 0.0]].into_dyn();

        let coords = nonzero(&input.view()).unwrap();

        assert_eq!(coords.shape(), &[2, 2]);
        assert_eq!(coords[&[0, 0][..]], 0);
        assert_eq!(coords[&[0, 1][..]], 1);
        assert_eq!(coords[&[1, 0][..]], 1);
        assert_eq!(coords[&[1, 1][..]], 0);
    }

    #[test]
    fn test_nonzero_all_zero() {
        let input = Array::<f64, IxDyn>::zeros(IxDyn(&[2, 3]));

        let coords = nonzero(&input.view()).unwrap();
        assert_eq!(coords.shape(), &[0, 2]);
    }

    #[test]
    fn test_index_rows_full_coordinates() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[3, 2]), vec![0usize, 1, 1, 0, 1, 1]).unwrap();

        let out = index_rows(&input.view(), &rows.view()).unwrap();

        assert_eq!(out.shape(), &[3]);
        assert_eq!(out[&[0][..]], 2.0);
        assert_eq!(out[&[1][..]], 3.0);
        assert_eq!(out[&[2][..]], 4.0);
    }

    #[test]
    fn test_index_rows_partial_coordinates() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[2, 1]), vec![1usize, 0]).unwrap();

        let out = index_rows(&input.view(), &rows.view()).unwrap();

        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out[&[0, 0][..]], 3.0);
        assert_eq!(out[&[0, 1][..]], 4.0);
        assert_eq!(out[&[1, 0][..]], 1.0);
    }

    #[test]
    fn test_index_rows_zero_width_replicates() {
        let input = array![5.0, 6.0].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[2, 0]), vec![]).unwrap();

        let out = index_rows(&input.view(), &rows.view()).unwrap();

        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out[&[0, 0][..]], 5.0);
        assert_eq!(out[&[1, 1][..]], 6.0);
    }

    #[test]
    fn test_index_rows_empty_table() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[0, 2]), vec![]).unwrap();

        let out = index_rows(&input.view(), &rows.view()).unwrap();
        assert_eq!(out.shape(), &[0]);
    }

    #[test]
    fn test_index_rows_too_wide_rejected() {
        let input = array![1.0, 2.0].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[1, 2]), vec![0usize, 0]).unwrap();

        let err = index_rows(&input.view(), &rows.view()).unwrap_err();
        assert!(matches!(err, KernelError::OperationError { .. }));
    }

    #[test]
    fn test_index_rows_out_of_bounds_rejected() {
        let input = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let rows = Array::from_shape_vec(IxDyn(&[1, 2]), vec![0usize, 5]).unwrap();

        let err = index_rows(&input.view(), &rows.view()).unwrap_err();
        assert!(matches!(err, KernelError::IndexOutOfBounds { index: 5, .. }));
    }
}
