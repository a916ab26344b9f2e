//! Range and combining kernels: narrow, stack, concat
//!
//! Thin positional wrappers over the array engine, with the validation the
//! naming layer relies on surfaced as structured errors.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.
//! Direct use of `ndarray` is forbidden per SCIRS2_INTEGRATION_POLICY.md

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, Axis, IxDyn};

/// Copy a contiguous range along one axis
///
/// The result keeps the input's rank; the addressed axis shrinks to `len`
/// elements starting at `start`. A zero-length range is valid and yields an
/// empty axis.
///
/// # Errors
///
/// Returns error if the axis is out of range or `start + len` exceeds the
/// axis size.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use jiku_kernels::narrow;
///
/// let input = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
/// let mid = narrow(&input.view(), 1, 1, 2).unwrap();
///
/// assert_eq!(mid.shape(), &[2, 2]);
/// assert_eq!(mid[&[0, 0][..]], 2.0);
/// assert_eq!(mid[&[1, 1][..]], 6.0);
/// ```
pub fn narrow<T>(
    input: &ArrayView<T, IxDyn>,
    axis: usize,
    start: usize,
    len: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    let rank = input.ndim();
    if axis >= rank {
        return Err(KernelError::invalid_axis("narrow", axis, rank));
    }
    let size = input.shape()[axis];
    let end = start
        .checked_add(len)
        .ok_or_else(|| KernelError::invalid_range("narrow", start, len, size))?;
    if end > size {
        return Err(KernelError::invalid_range("narrow", start, len, size));
    }

    let mut out_shape = input.shape().to_vec();
    out_shape[axis] = len;
    let result = Array::from_shape_fn(IxDyn(&out_shape), |ix| {
        let mut coord: Vec<usize> = (0..rank).map(|d| ix[d]).collect();
        coord[axis] += start;
        input[&coord[..]].clone()
    });

    Ok(result)
}

/// Stack equally-shaped views along a fresh leading axis
///
/// The result has rank one higher than the inputs, with the new axis first
/// and size equal to the number of views.
///
/// # Errors
///
/// Returns error if the view list is empty or any view's shape differs from
/// the first's.
pub fn stack<T>(views: &[ArrayView<T, IxDyn>]) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    if views.is_empty() {
        return Err(KernelError::empty_input("stack", "views"));
    }

    let reference = views[0].shape();
    for (i, view) in views.iter().enumerate().skip(1) {
        if view.shape() != reference {
            return Err(KernelError::shape_mismatch(
                "stack",
                reference.to_vec(),
                view.shape().to_vec(),
                format!("Operand {} differs from the first", i),
            ));
        }
    }

    // Stack by unsqueezing each view, then concatenating along the new axis
    let lifted: Vec<ArrayView<T, IxDyn>> = views
        .iter()
        .map(|view| view.view().insert_axis(Axis(0)))
        .collect();
    scirs2_core::ndarray::concatenate(Axis(0), &lifted)
        .map_err(|e| KernelError::operation_error("stack", e.to_string()))
}

/// Concatenate views along an existing axis
///
/// All views must agree on every size except the concatenation axis, which
/// sums across the inputs.
///
/// # Errors
///
/// Returns error if the view list is empty, the axis is out of range, or any
/// off-axis size disagrees with the first view's.
pub fn concat<T>(views: &[ArrayView<T, IxDyn>], axis: usize) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone,
{
    if views.is_empty() {
        return Err(KernelError::empty_input("concat", "views"));
    }

    let rank = views[0].ndim();
    if axis >= rank {
        return Err(KernelError::invalid_axis("concat", axis, rank));
    }

    let reference = views[0].shape();
    for (i, view) in views.iter().enumerate().skip(1) {
        if view.ndim() != rank {
            return Err(KernelError::shape_mismatch(
                "concat",
                reference.to_vec(),
                view.shape().to_vec(),
                format!("Operand {} has a different rank", i),
            ));
        }
        for d in 0..rank {
            if d != axis && view.shape()[d] != reference[d] {
                return Err(KernelError::shape_mismatch(
                    "concat",
                    reference.to_vec(),
                    view.shape().to_vec(),
                    format!("Operand {} differs off the concat axis", i),
                ));
            }
        }
    }

    scirs2_core::ndarray::concatenate(Axis(axis), views)
        .map_err(|e| KernelError::operation_error("concat", e.to_string()))
}
