//! Index-driven operations addressed by dimension name.
//!
//! Each operation here pairs a data tensor with an index or mask tensor.
//! The index operand is aligned to the data tensor's name order before the
//! positional kernel runs, so callers never reason about axis positions:
//!
//! - [`gather`] / [`scatter_`] route values along one named dimension
//!   through an integer index tensor;
//! - [`masked_select`] / [`nonzero`] reduce to flat selections and
//!   coordinate tables;
//! - [`multi_index_select`] picks sub-tensors by multi-dimensional
//!   coordinate rows;
//! - [`narrow`] restricts one named dimension to a contiguous range.
//!
//! All name-level validation happens before any kernel work, so a failed
//! call never computes (or, for [`scatter_`], writes) anything.

use crate::align;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;
use crate::tensor::NamedTensor;
use jiku_kernels as kernels;
use scirs2_core::ndarray_ext::Axis;
use scirs2_core::numeric::Zero;

/// Gather values along the dimension `dim` through an integer index tensor.
///
/// The index tensor carries the same dimensions as the input, except that
/// `dim` is replaced by the index tensor's own dimension `index_dim` (the
/// two may coincide). Its axis order is irrelevant; it is aligned to the
/// input's order first. Each element of the result reads the input at its
/// own coordinate, with the `dim` component replaced by the index value.
///
/// The result keeps the input's schema with `dim` renamed to `index_dim`.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] if `dim` is not an input
/// dimension, [`SchemaError::DuplicateName`] if `index_dim` collides with a
/// surviving input dimension, [`SchemaError::SchemaMismatch`] if the index
/// tensor's dimensions are not exactly the substituted set, and a kernel
/// error for size or bound violations.
///
/// # Examples
///
/// ```
/// use jiku_core::{indexed::gather, NamedTensor};
///
/// let input = NamedTensor::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3], &["i", "j"])
///     .unwrap();
/// let index =
///     NamedTensor::from_vec(vec![2usize, 0, 1, 1], &[2, 2], &["i", "picks"]).unwrap();
///
/// let picked = gather(&input, "j", &index, "picks").unwrap();
/// assert_eq!(picked.schema().names(), &["i", "picks"]);
/// assert_eq!(picked.get(&[0, 0]), Some(&2.0));
/// assert_eq!(picked.get(&[1, 1]), Some(&4.0));
/// ```
pub fn gather<T>(
    input: &NamedTensor<T>,
    dim: &str,
    index: &NamedTensor<usize>,
    index_dim: &str,
) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    let axis = input.schema().index_of(dim)?;
    let result_schema = input.schema().renamed(dim, index_dim)?;

    let order = align::substituted_order(input.schema(), dim, index_dim)?;
    let aligned = index.force_order(&order)?;

    let values = kernels::gather(&input.view(), axis, &aligned.view())?;
    NamedTensor::with_schema(values, result_schema)
}

/// Scatter source values into `input` along the dimension `dim`, in place.
///
/// The inverse of [`gather`]. Both the index and the source tensor carry
/// the input's dimensions with `dim` replaced by `index_dim`; both are
/// aligned to that order before writing. For every index coordinate, the
/// input element at that coordinate-with-`dim`-replaced-by-the-index-value
/// is overwritten by the matching source element. When two index entries
/// address the same input cell, the later one (in row-major order of the
/// aligned index) wins.
///
/// The input's schema is untouched; only the buffer changes. On error the
/// buffer is untouched as well.
pub fn scatter_<T>(
    input: &mut NamedTensor<T>,
    dim: &str,
    index: &NamedTensor<usize>,
    src: &NamedTensor<T>,
    index_dim: &str,
) -> SchemaResult<()>
where
    T: Clone,
{
    let axis = input.schema().index_of(dim)?;
    let order = align::substituted_order(input.schema(), dim, index_dim)?;

    let index_aligned = index.force_order(&order)?;
    let src_aligned = src.force_order(&order)?;

    kernels::scatter_into(
        input.values_mut(),
        axis,
        &index_aligned.view(),
        &src_aligned.view(),
    )?;
    Ok(())
}

/// Select elements of `input` where a boolean mask holds, as a rank-1
/// tensor named `name`.
///
/// Every mask dimension must be an input dimension; input dimensions the
/// mask lacks are broadcast. The mask's axis order is irrelevant. Selected
/// elements appear in row-major order of the input.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] naming any mask dimension the
/// input lacks.
///
/// # Examples
///
/// ```
/// use jiku_core::{indexed::masked_select, NamedTensor};
///
/// let input = NamedTensor::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3], &["i", "j"])
///     .unwrap();
/// let mask = NamedTensor::from_vec(vec![true, false, true], &[3], &["j"]).unwrap();
///
/// // Columns 0 and 2 survive, for every row
/// let picked = masked_select(&input, &mask, "hits").unwrap();
/// assert_eq!(picked.schema().names(), &["hits"]);
/// assert_eq!(picked.values().as_slice().unwrap(), &[0.0, 2.0, 3.0, 5.0]);
/// ```
pub fn masked_select<T>(
    input: &NamedTensor<T>,
    mask: &NamedTensor<bool>,
    name: &str,
) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    let order = align::broadcast_order(mask.schema(), input.schema())?;
    let schema = Schema::new([name])?;

    // Align the mask to the subsequence of the input's order it shares,
    // then stand in size-1 axes for the dimensions it lacks
    let mask_order: Vec<&str> = order
        .iter()
        .filter(|n| mask.schema().contains(n))
        .map(|s| s.as_str())
        .collect();
    let aligned = mask.force_order(&mask_order)?;

    let mut mask_view = aligned.view();
    for (pos, dim_name) in order.iter().enumerate() {
        if !mask.schema().contains(dim_name) {
            mask_view = mask_view.insert_axis(Axis(pos));
        }
    }

    let values = kernels::masked_select(&input.view(), &mask_view)?;
    NamedTensor::with_schema(values, schema)
}

/// Coordinates of every non-zero element, under default dimension names.
///
/// Equivalent to [`nonzero_named`] with the names `"elementsdim"` (one per
/// hit) and `"inputdims"` (one per input axis).
pub fn nonzero<T>(tensor: &NamedTensor<T>) -> SchemaResult<NamedTensor<usize>>
where
    T: Zero + PartialEq,
{
    nonzero_named(tensor, "elementsdim", "inputdims")
}

/// Coordinates of every non-zero element, as a rank-2 coordinate table.
///
/// Row `e` of the result is the full coordinate (in the tensor's own axis
/// order) of the e-th non-zero element, scanning in row-major order. The
/// first result dimension (`elements_dim`) counts hits; the second
/// (`dims_dim`) spans the input's rank.
///
/// # Errors
///
/// Returns [`SchemaError::DuplicateName`] if the two names coincide.
pub fn nonzero_named<T>(
    tensor: &NamedTensor<T>,
    elements_dim: &str,
    dims_dim: &str,
) -> SchemaResult<NamedTensor<usize>>
where
    T: Zero + PartialEq,
{
    let schema = Schema::new([elements_dim, dims_dim])?;
    let values = kernels::nonzero(&tensor.view())?;
    NamedTensor::with_schema(values, schema)
}

/// Select sub-tensors addressed by rows of a coordinate table.
///
/// `indices` is rank 2: its first dimension counts selections, its second
/// spans `dims`. Row `e` fixes the dimensions named in `dims` to the
/// coordinates it holds; the sub-tensor over the remaining dimensions is
/// the e-th entry of the result. The result's first dimension inherits the
/// name of the indices tensor's first dimension, followed by the input's
/// remaining dimensions in their original order.
///
/// # Errors
///
/// Returns [`SchemaError::RankMismatch`] if `indices` is not rank 2, its
/// width differs from `dims`, or `dims` outnumbers the input's dimensions;
/// [`SchemaError::DuplicateName`] for repeated `dims` entries (or a result
/// name collision); [`SchemaError::UnknownDimension`] for a `dims` entry
/// the input lacks.
///
/// # Examples
///
/// ```
/// use jiku_core::{indexed::multi_index_select, NamedTensor};
///
/// let input = NamedTensor::from_vec(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3], &["i", "j"])
///     .unwrap();
/// let rows = NamedTensor::from_vec(vec![1usize, 0], &[2, 1], &["sel", "coord"]).unwrap();
///
/// let picked = multi_index_select(&input, &["i"], &rows).unwrap();
/// assert_eq!(picked.schema().names(), &["sel", "j"]);
/// assert_eq!(picked.get(&[0, 0]), Some(&3.0));
/// assert_eq!(picked.get(&[1, 2]), Some(&2.0));
/// ```
pub fn multi_index_select<T>(
    tensor: &NamedTensor<T>,
    dims: &[&str],
    indices: &NamedTensor<usize>,
) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    if indices.rank() != 2 {
        return Err(SchemaError::rank_mismatch(
            "multi_index_select indices",
            2,
            indices.rank(),
        ));
    }
    let width = indices.shape()[1];
    if width != dims.len() {
        return Err(SchemaError::rank_mismatch(
            "multi_index_select index width",
            dims.len(),
            width,
        ));
    }
    if dims.len() > tensor.rank() {
        return Err(SchemaError::rank_mismatch(
            "multi_index_select dims",
            tensor.rank(),
            dims.len(),
        ));
    }
    // The duplicate scan completes before membership, so a repeated entry
    // reports as a duplicate even when another entry is unknown
    for (i, dim) in dims.iter().enumerate() {
        if dims[i + 1..].contains(dim) {
            return Err(SchemaError::duplicate_name(*dim));
        }
    }
    for dim in dims {
        if !tensor.schema().contains(dim) {
            return Err(SchemaError::unknown_dimension(*dim));
        }
    }

    // Addressed dimensions first, survivors after, in their original order
    let remaining: Vec<&str> = tensor
        .schema()
        .names()
        .iter()
        .map(|s| s.as_str())
        .filter(|n| !dims.contains(n))
        .collect();
    let match_order: Vec<&str> = dims.iter().copied().chain(remaining.iter().copied()).collect();

    let elements_dim = indices.schema().names()[0].as_str();
    let result_names: Vec<&str> = std::iter::once(elements_dim)
        .chain(remaining.iter().copied())
        .collect();
    let schema = Schema::new(result_names)?;

    let permuted = tensor.force_order(&match_order)?;
    let values = kernels::index_rows(&permuted.view(), &indices.view())?;
    NamedTensor::with_schema(values, schema)
}

/// Restrict the dimension `dim` to `len` elements starting at `start`.
///
/// The schema is unchanged; only the addressed dimension's size shrinks. A
/// zero-length range is valid.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] if `dim` is absent, and a
/// kernel error if the range exceeds the dimension's size.
pub fn narrow<T>(
    tensor: &NamedTensor<T>,
    dim: &str,
    start: usize,
    len: usize,
) -> SchemaResult<NamedTensor<T>>
where
    T: Clone,
{
    let axis = tensor.schema().index_of(dim)?;
    let values = kernels::narrow(&tensor.view(), axis, start, len)?;
    NamedTensor::with_schema(values, tensor.schema().clone())
}
