//! Named contraction: generalized dot products addressed by dimension name.
//!
//! [`dot`] is the workhorse of the naming layer. Operands are aligned by
//! name, not position: every occurrence of a name, in any operand and at any
//! axis, refers to the same index. Contracted names are summed away; the
//! remaining names survive in first-appearance order.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::Schema;
use crate::tensor::NamedTensor;
use jiku_kernels::{self as kernels, KernelError};
use scirs2_core::ndarray_ext::{ArrayView, IxDyn};
use scirs2_core::numeric::Num;

/// Contract tensors along the given dimension names.
///
/// Generalizes matrix multiplication, batched products, outer products, and
/// full reductions:
///
/// - names shared between operands pair those axes elementwise;
/// - names listed in `contract_names` are summed away;
/// - all other names survive, ordered by first appearance across the
///   operands (left to right).
///
/// Axis order within each operand is irrelevant; only names matter.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownDimension`] if a contraction name occurs in
/// no operand, and a kernel error if two axes sharing a name disagree on
/// size or the operand list is empty.
///
/// # Examples
///
/// ```
/// use jiku_core::{dot, NamedTensor};
///
/// let a = NamedTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &["i", "j"])
///     .unwrap();
/// let b = NamedTensor::from_vec(vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0], &[3, 2], &["j", "k"])
///     .unwrap();
///
/// // Matrix multiply: sum over "j", keep "i" then "k"
/// let c = dot(&["j"], &[&a, &b]).unwrap();
/// assert_eq!(c.schema().names(), &["i", "k"]);
/// assert_eq!(c.get(&[0, 0]), Some(&4.0));
///
/// // Reduce everything to a scalar
/// let s = dot(&["i", "k"], &[&c]).unwrap();
/// assert_eq!(s.rank(), 0);
/// ```
pub fn dot<T, S>(contract_names: &[S], tensors: &[&NamedTensor<T>]) -> SchemaResult<NamedTensor<T>>
where
    T: Clone + Num,
    S: AsRef<str>,
{
    if tensors.is_empty() {
        return Err(KernelError::empty_input("dot", "tensors").into());
    }

    // Per-call arena: a name's id is its first-appearance rank across the
    // operand list, scanned left to right
    let mut seen: Vec<String> = Vec::new();
    let mut programs: Vec<Vec<usize>> = Vec::with_capacity(tensors.len());
    for tensor in tensors {
        let program = tensor
            .schema()
            .names()
            .iter()
            .map(|name| match seen.iter().position(|s| s == name) {
                Some(id) => id,
                None => {
                    seen.push(name.clone());
                    seen.len() - 1
                }
            })
            .collect();
        programs.push(program);
    }

    // Every contraction name must occur in some operand
    for name in contract_names {
        if !seen.iter().any(|s| s == name.as_ref()) {
            return Err(SchemaError::unknown_dimension(name.as_ref()));
        }
    }

    // Surviving names keep their first-appearance order
    let mut keep_names: Vec<String> = Vec::new();
    let mut output_ids: Vec<usize> = Vec::new();
    for (id, name) in seen.iter().enumerate() {
        if !contract_names.iter().any(|c| c.as_ref() == name.as_str()) {
            keep_names.push(name.clone());
            output_ids.push(id);
        }
    }

    let operands: Vec<(ArrayView<'_, T, IxDyn>, &[usize])> = tensors
        .iter()
        .zip(programs.iter())
        .map(|(tensor, program)| (tensor.view(), program.as_slice()))
        .collect();
    let values = kernels::einsum(&operands, &output_ids)?;

    let schema = Schema::new(keep_names)?;
    NamedTensor::with_schema(values, schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(shape: &[usize], names: &[&str]) -> NamedTensor<f64> {
        let total: usize = shape.iter().product();
        NamedTensor::from_vec((0..total).map(|i| i as f64).collect(), shape, names).unwrap()
    }

    #[test]
    fn test_matrix_multiply_by_name() {
        let a = named(&[2, 3], &["i", "j"]);
        let b = named(&[3, 4], &["j", "k"]);

        let c = dot(&["j"], &[&a, &b]).unwrap();

        assert_eq!(c.schema().names(), &["i", "k"]);
        assert_eq!(c.shape().as_slice(), &[2, 4]);
        // Row 0 of a is [0, 1, 2]; column 0 of b is [0, 4, 8]
        assert_eq!(c.get(&[0, 0]), Some(&20.0));
        assert_eq!(c.get(&[1, 3]), Some(&92.0));
    }

    #[test]
    fn test_operand_axis_order_is_irrelevant() {
        let a = named(&[2, 3], &["i", "j"]);
        let b = named(&[3, 4], &["j", "k"]);
        let a_flipped = a.force_order(&["j", "i"]).unwrap();

        let c = dot(&["j"], &[&a, &b]).unwrap();
        let c_flipped = dot(&["j"], &[&a_flipped, &b]).unwrap();

        // Same names survive, modulo their first-appearance order
        assert_eq!(c_flipped.schema().names(), &["i", "k"]);
        assert_eq!(c_flipped, c);
    }

    #[test]
    fn test_keep_order_is_first_appearance() {
        let a = named(&[2, 3], &["j", "k"]);
        let b = named(&[3, 4], &["k", "i"]);

        let c = dot(&["k"], &[&a, &b]).unwrap();
        assert_eq!(c.schema().names(), &["j", "i"]);
    }

    #[test]
    fn test_outer_product_keeps_all_names() {
        let a = named(&[2], &["i"]);
        let b = named(&[3], &["j"]);

        let c = dot::<f64, &str>(&[], &[&a, &b]).unwrap();

        assert_eq!(c.schema().names(), &["i", "j"]);
        assert_eq!(c.get(&[1, 2]), Some(&2.0));

        // Mixed ranks pass through the same way
        let m = named(&[2, 3], &["a", "b"]);
        let v = named(&[4], &["c"]);

        let outer = dot::<f64, &str>(&[], &[&m, &v]).unwrap();

        assert_eq!(outer.schema().names(), &["a", "b", "c"]);
        assert_eq!(outer.shape().as_slice(), &[2, 3, 4]);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    let expected = m.get(&[i, j]).unwrap() * v.get(&[k]).unwrap();
                    assert_eq!(outer.get(&[i, j, k]), Some(&expected));
                }
            }
        }
    }

    #[test]
    fn test_batch_dimension_survives() {
        let a = named(&[2, 2, 3], &["batch", "i", "j"]);
        let b = named(&[2, 3, 2], &["batch", "j", "k"]);

        let c = dot(&["j"], &[&a, &b]).unwrap();

        assert_eq!(c.schema().names(), &["batch", "i", "k"]);
        assert_eq!(c.shape().as_slice(), &[2, 2, 2]);
        // Batch 0: [[0,1,2],[3,4,5]] @ [[0,1],[2,3],[4,5]]
        assert_eq!(c.get(&[0, 0, 0]), Some(&10.0));
        assert_eq!(c.get(&[0, 1, 1]), Some(&40.0));
    }

    #[test]
    fn test_three_operand_contraction() {
        let a = named(&[2, 3], &["i", "j"]);
        let b = named(&[3, 4], &["j", "k"]);
        let c = named(&[4, 2], &["k", "l"]);

        let chained = dot(&["j", "k"], &[&a, &b, &c]).unwrap();

        let ab = dot(&["j"], &[&a, &b]).unwrap();
        let expected = dot(&["k"], &[&ab, &c]).unwrap();
        assert_eq!(chained, expected);
    }

    #[test]
    fn test_full_reduction_to_scalar() {
        let a = named(&[2, 3], &["i", "j"]);

        let s = dot(&["i", "j"], &[&a]).unwrap();

        assert_eq!(s.rank(), 0);
        assert_eq!(s.get(&[]), Some(&15.0));
    }

    #[test]
    fn test_shared_uncontracted_name_joins() {
        let a = named(&[2, 2], &["i", "j"]);
        let b = named(&[2], &["j"]);

        // "j" is shared but kept: an elementwise join, no summation
        let c = dot::<f64, &str>(&[], &[&a, &b]).unwrap();

        assert_eq!(c.schema().names(), &["i", "j"]);
        for i in 0..2 {
            for j in 0..2 {
                let expected = a.get(&[i, j]).unwrap() * b.get(&[j]).unwrap();
                assert_eq!(c.get(&[i, j]), Some(&expected));
            }
        }
    }

    #[test]
    fn test_unknown_contraction_name_rejected() {
        let a = named(&[2, 3], &["i", "j"]);

        let err = dot(&["z"], &[&a]).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownDimension { name } if name == "z"));
    }

    #[test]
    fn test_conflicting_shared_sizes_rejected() {
        let a = named(&[2, 3], &["i", "j"]);
        let b = named(&[4, 2], &["j", "k"]);

        let err = dot(&["j"], &[&a, &b]).unwrap_err();
        assert!(matches!(err, SchemaError::Kernel(_)));
    }

    #[test]
    fn test_empty_operand_list_rejected() {
        let err = dot::<f64, &str>(&["i"], &[]).unwrap_err();
        assert!(matches!(err, SchemaError::Kernel(_)));
    }
}
