//! Static registry of named-tensor operations for dispatch by name.
//!
//! Two families of operations are registered:
//!
//! - **Builders** (`requires_names: true`) construct a tensor from scratch
//!   and therefore take dimension name/size pairs: `zeros`, `ones`, `full`.
//! - **Elementwise maps** (`requires_names: false`) transform an existing
//!   tensor value by value and leave its schema untouched: `abs`, `exp`,
//!   `ln`, `sqrt`, `neg`, `recip`.
//!
//! [`lookup`] answers whether a name is registered and which family it
//! belongs to; [`build`], [`build_full`], and [`elementwise`] dispatch the
//! actual work.

use crate::error::{SchemaError, SchemaResult};
use crate::tensor::NamedTensor;
use scirs2_core::numeric::{Float, Num};

/// One registered operation: its name and whether it constructs a tensor
/// (and therefore takes dimension names) or maps an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSpec {
    pub name: &'static str,
    pub requires_names: bool,
}

/// Every operation dispatchable by name.
pub const REGISTRY: &[OpSpec] = &[
    OpSpec { name: "zeros", requires_names: true },
    OpSpec { name: "ones", requires_names: true },
    OpSpec { name: "full", requires_names: true },
    OpSpec { name: "abs", requires_names: false },
    OpSpec { name: "exp", requires_names: false },
    OpSpec { name: "ln", requires_names: false },
    OpSpec { name: "sqrt", requires_names: false },
    OpSpec { name: "neg", requires_names: false },
    OpSpec { name: "recip", requires_names: false },
];

/// Look up a registered operation by name.
pub fn lookup(name: &str) -> Option<&'static OpSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Dispatch a builder operation by name.
///
/// Handles the value-free builders `zeros` and `ones`. The `full` builder
/// carries a fill value and therefore has its own entry point,
/// [`build_full`].
///
/// # Errors
///
/// Returns [`SchemaError::UnknownOperation`] for any other name, and
/// [`SchemaError::DuplicateName`] for repeated dimension names.
pub fn build<T>(op: &str, entries: &[(&str, usize)]) -> SchemaResult<NamedTensor<T>>
where
    T: Clone + Num,
{
    match op {
        "zeros" => NamedTensor::zeros(entries),
        "ones" => NamedTensor::ones(entries),
        _ => Err(SchemaError::unknown_operation(op)),
    }
}

/// Build a tensor filled with one value over the given named dimensions.
pub fn build_full<T>(entries: &[(&str, usize)], value: T) -> SchemaResult<NamedTensor<T>>
where
    T: Clone + Num,
{
    NamedTensor::full(entries, value)
}

/// Dispatch an elementwise operation by name.
///
/// The result keeps the input's schema; only the values change.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownOperation`] if `op` is not a registered
/// elementwise operation.
///
/// # Examples
///
/// ```
/// use jiku_core::{registry::elementwise, NamedTensor};
///
/// let t = NamedTensor::from_vec(vec![-1.0, 4.0], &[2], &["x"]).unwrap();
/// let a = elementwise("abs", &t).unwrap();
/// assert_eq!(a.values().as_slice().unwrap(), &[1.0, 4.0]);
/// assert_eq!(a.schema(), t.schema());
/// ```
pub fn elementwise<T>(op: &str, tensor: &NamedTensor<T>) -> SchemaResult<NamedTensor<T>>
where
    T: Float + Clone,
{
    let f: fn(T) -> T = match op {
        "abs" => |x: T| x.abs(),
        "exp" => |x: T| x.exp(),
        "ln" => |x: T| x.ln(),
        "sqrt" => |x: T| x.sqrt(),
        "neg" => |x: T| -x,
        "recip" => |x: T| x.recip(),
        _ => return Err(SchemaError::unknown_operation(op)),
    };
    Ok(tensor.map(f))
}
