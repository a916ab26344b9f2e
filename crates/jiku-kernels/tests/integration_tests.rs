//! Integration tests for jiku-kernels
//!
//! These tests chain the positional primitives the way the naming layer does:
//! contract, then slice, then route values through index arrays.

use jiku_kernels::{
    concat, einsum, gather, index_rows, masked_select, narrow, nonzero, scatter_into, stack,
};
use scirs2_core::ndarray_ext::{Array, IxDyn};

fn iota(shape: &[usize]) -> Array<f64, IxDyn> {
    let total: usize = shape.iter().product();
    Array::from_shape_vec(IxDyn(shape), (0..total).map(|x| x as f64).collect()).unwrap()
}

#[test]
fn test_contract_then_narrow() {
    let a = iota(&[2, 3]);
    let b = iota(&[3, 4]);

    let ops = [(a.view(), &[0, 1][..]), (b.view(), &[1, 2][..])];
    let product = einsum(&ops, &[0, 2]).unwrap();
    assert_eq!(product.shape(), &[2, 4]);

    let tail = narrow(&product.view(), 1, 2, 2).unwrap();
    assert_eq!(tail.shape(), &[2, 2]);
    assert_eq!(tail[&[0, 0][..]], product[&[0, 2][..]]);
}

#[test]
fn test_stack_feeds_batched_einsum() {
    let a = iota(&[2, 2]);
    let b = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, 0.0, 0.0, 1.0]).unwrap();

    // Batch of two matrices, then a batched square against the identity batch
    let batch = stack(&[a.view(), b.view()]).unwrap();
    assert_eq!(batch.shape(), &[2, 2, 2]);

    let eye = stack(&[b.view(), b.view()]).unwrap();
    let ops = [(batch.view(), &[0, 1, 2][..]), (eye.view(), &[0, 2, 3][..])];
    let out = einsum(&ops, &[0, 1, 3]).unwrap();

    // Multiplying by the identity leaves each batch entry unchanged
    assert_eq!(out, batch);
}

#[test]
fn test_gather_scatter_pipeline() {
    let table = iota(&[4, 3]);

    // Pick rows 2, 0, 2 into a new table
    let picks = Array::from_shape_vec(
        IxDyn(&[3, 3]),
        vec![2usize, 2, 2, 0, 0, 0, 2, 2, 2],
    )
    .unwrap();
    let picked = gather(&table.view(), 0, &picks.view()).unwrap();
    assert_eq!(picked.shape(), &[3, 3]);
    assert_eq!(picked[&[0, 1][..]], table[&[2, 1][..]]);

    // Scatter the picked rows back into an empty table at rows 1 and 3
    let mut target = Array::<f64, IxDyn>::zeros(IxDyn(&[4, 3]));
    let dest = Array::from_shape_vec(
        IxDyn(&[2, 3]),
        vec![1usize, 1, 1, 3, 3, 3],
    )
    .unwrap();
    let src = narrow(&picked.view(), 0, 0, 2).unwrap();
    scatter_into(&mut target, 0, &dest.view(), &src.view()).unwrap();

    assert_eq!(target[&[1, 0][..]], table[&[2, 0][..]]);
    assert_eq!(target[&[3, 2][..]], table[&[0, 2][..]]);
    assert_eq!(target[&[0, 0][..]], 0.0);
}

#[test]
fn test_masked_select_agrees_with_nonzero() {
    let data = Array::from_shape_vec(
        IxDyn(&[2, 3]),
        vec![0.0, 5.0, 0.0, 7.0, 0.0, 9.0],
    )
    .unwrap();
    let mask = data.mapv(|v| v != 0.0);

    let picked = masked_select(&data.view(), &mask.view()).unwrap();
    let coords = nonzero(&data.view()).unwrap();

    assert_eq!(picked.shape(), &[3]);
    assert_eq!(coords.shape(), &[3, 2]);
    // Both walk the tensor in row-major order, so they line up
    for i in 0..3 {
        let coord = [coords[&[i, 0][..]], coords[&[i, 1][..]]];
        assert_eq!(data[&coord[..]], picked[&[i][..]]);
    }
}

#[test]
fn test_nonzero_rows_drive_index_rows() {
    let data = Array::from_shape_vec(
        IxDyn(&[2, 3]),
        vec![0.0, 5.0, 0.0, 7.0, 0.0, 9.0],
    )
    .unwrap();

    let coords = nonzero(&data.view()).unwrap();
    let values = index_rows(&data.view(), &coords.view()).unwrap();

    assert_eq!(values.shape(), &[3]);
    assert_eq!(values[&[0][..]], 5.0);
    assert_eq!(values[&[1][..]], 7.0);
    assert_eq!(values[&[2][..]], 9.0);
}

#[test]
fn test_concat_of_narrowed_halves_roundtrips() {
    let data = iota(&[4, 2]);

    let top = narrow(&data.view(), 0, 0, 2).unwrap();
    let bottom = narrow(&data.view(), 0, 2, 2).unwrap();
    let joined = concat(&[top.view(), bottom.view()], 0).unwrap();

    assert_eq!(joined, data);
}
