//! Named tensors: a dynamic-rank value buffer bound to a [`Schema`].
//!
//! [`NamedTensor`] pairs a `scirs2_core` dynamic-rank array with the schema
//! naming its axes. The pairing is validated at every construction site, so
//! a live tensor always satisfies `values.ndim() == schema.len()`; axis `i`
//! of the buffer is the dimension `schema.names()[i]`.
//!
//! Operations never address axes by position. Callers name dimensions, and
//! the schema translates names to the positional form the kernels expect.
//!
//! # Examples
//!
//! ```
//! use jiku_core::NamedTensor;
//!
//! let t = NamedTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2], &["i", "j"]).unwrap();
//! assert_eq!(t.size("i").unwrap(), 2);
//!
//! // Axis order is a presentation detail: force any permutation by name
//! let flipped = t.force_order(&["j", "i"]).unwrap();
//! assert_eq!(flipped.schema().names(), &["j", "i"]);
//! assert_eq!(flipped.get(&[0, 1]), Some(&3.0));
//! assert_eq!(flipped.get(&[1, 0]), Some(&2.0));
//! ```

use crate::error::SchemaResult;
use crate::schema::{Rank, Schema, Shape};
use jiku_kernels::KernelError;
use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::Num;

/// A dynamic-rank tensor whose axes carry dimension names.
///
/// The buffer and schema are private; both are only ever replaced together,
/// through constructors that re-validate the rank pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTensor<T> {
    values: Array<T, IxDyn>,
    schema: Schema,
}

impl<T> NamedTensor<T> {
    /// Bind an existing buffer to a schema.
    ///
    /// This is the funnel every other constructor goes through.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SchemaError::RankMismatch`] if the buffer rank
    /// differs from the schema length.
    pub fn with_schema(values: Array<T, IxDyn>, schema: Schema) -> SchemaResult<Self> {
        if values.ndim() != schema.len() {
            return Err(crate::error::SchemaError::rank_mismatch(
                "with_schema",
                schema.len(),
                values.ndim(),
            ));
        }
        Ok(Self { values, schema })
    }

    /// Bind an existing buffer to freshly validated names.
    pub fn from_array<S: AsRef<str>>(values: Array<T, IxDyn>, names: &[S]) -> SchemaResult<Self> {
        let schema = Schema::new(names.iter().map(|s| s.as_ref()))?;
        Self::with_schema(values, schema)
    }

    /// Build a tensor from a flat row-major value vector.
    ///
    /// # Errors
    ///
    /// Fails if the value count differs from the shape product, names repeat,
    /// or the name count differs from the shape rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiku_core::NamedTensor;
    ///
    /// let t = NamedTensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3], &["i", "j"]).unwrap();
    /// assert_eq!(t.get(&[1, 2]), Some(&6));
    /// ```
    pub fn from_vec<S: AsRef<str>>(
        data: Vec<T>,
        shape: &[usize],
        names: &[S],
    ) -> SchemaResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(KernelError::shape_mismatch(
                "from_vec",
                shape.to_vec(),
                vec![data.len()],
                "Value count must equal the shape product",
            )
            .into());
        }
        let values = Array::from_shape_vec(IxDyn(shape), data)
            .map_err(|e| KernelError::operation_error("from_vec", e.to_string()))?;
        Self::from_array(values, names)
    }

    /// The schema naming this tensor's axes.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The raw value buffer. Axis `i` is named `schema().names()[i]`.
    pub fn values(&self) -> &Array<T, IxDyn> {
        &self.values
    }

    /// A positional view of the buffer, for handing to kernels.
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.values.view()
    }

    /// Mutable buffer access for in-place kernels. Crate-internal: the
    /// schema must stay untouched while the buffer is borrowed.
    pub(crate) fn values_mut(&mut self) -> &mut Array<T, IxDyn> {
        &mut self.values
    }

    /// Consume the tensor, returning the raw buffer.
    pub fn into_values(self) -> Array<T, IxDyn> {
        self.values
    }

    /// Sizes of all axes, in schema order.
    pub fn shape(&self) -> Shape {
        self.values.shape().iter().copied().collect()
    }

    /// Number of named dimensions.
    pub fn rank(&self) -> Rank {
        self.schema.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the tensor holds no elements (some axis has size 0).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Size of the dimension called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SchemaError::UnknownDimension`] if absent.
    pub fn size(&self, name: &str) -> SchemaResult<usize> {
        let axis = self.schema.index_of(name)?;
        Ok(self.values.shape()[axis])
    }

    /// Element at a full positional coordinate, or `None` out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.values.get(index)
    }
}

impl<T> NamedTensor<T>
where
    T: Clone,
{
    /// A copy of this tensor with its axes permuted to the target name order.
    ///
    /// The returned tensor holds the same elements; only the axis order (and
    /// therefore the schema) changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SchemaError::SchemaMismatch`] unless `target`
    /// is exactly a permutation of the current names.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiku_core::NamedTensor;
    ///
    /// let t = NamedTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], &["i", "j"])
    ///     .unwrap();
    /// let jt = t.force_order(&["j", "i"]).unwrap();
    ///
    /// assert_eq!(jt.shape().as_slice(), &[3, 2]);
    /// assert_eq!(jt.get(&[2, 0]), t.get(&[0, 2]));
    /// ```
    pub fn force_order<S: AsRef<str>>(&self, target: &[S]) -> SchemaResult<Self> {
        let perm = self.schema.permutation_to(target)?;
        let values = self.values.clone().permuted_axes(IxDyn(&perm));
        let schema = Schema::new(target.iter().map(|s| s.as_ref()))?;
        Self::with_schema(values, schema)
    }

    /// A copy of this tensor with one dimension renamed, order preserved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SchemaError::UnknownDimension`] if `old` is
    /// absent or [`crate::error::SchemaError::DuplicateName`] if `new`
    /// collides with another dimension.
    pub fn rename(&self, old: &str, new: &str) -> SchemaResult<Self> {
        let schema = self.schema.renamed(old, new)?;
        Ok(Self {
            values: self.values.clone(),
            schema,
        })
    }

    /// Apply `f` to every element, keeping the schema.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            values: self.values.mapv(f),
            schema: self.schema.clone(),
        }
    }
}

impl<T> NamedTensor<T>
where
    T: Clone + Num,
{
    /// A rank-0 tensor holding a single value, with the empty schema.
    pub fn scalar(value: T) -> Self {
        Self {
            values: Array::from_elem(IxDyn(&[]), value),
            schema: Schema::empty(),
        }
    }

    /// A tensor of zeros over named dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiku_core::NamedTensor;
    ///
    /// let z = NamedTensor::<f64>::zeros(&[("batch", 2), ("dim", 3)]).unwrap();
    /// assert_eq!(z.schema().names(), &["batch", "dim"]);
    /// assert_eq!(z.shape().as_slice(), &[2, 3]);
    /// ```
    pub fn zeros(entries: &[(&str, usize)]) -> SchemaResult<Self> {
        let schema = Schema::new(entries.iter().map(|(name, _)| *name))?;
        let shape: Vec<usize> = entries.iter().map(|(_, size)| *size).collect();
        Self::with_schema(Array::zeros(IxDyn(&shape)), schema)
    }

    /// A tensor of ones over named dimensions.
    pub fn ones(entries: &[(&str, usize)]) -> SchemaResult<Self> {
        let schema = Schema::new(entries.iter().map(|(name, _)| *name))?;
        let shape: Vec<usize> = entries.iter().map(|(_, size)| *size).collect();
        Self::with_schema(Array::ones(IxDyn(&shape)), schema)
    }

    /// A tensor filled with one value over named dimensions.
    pub fn full(entries: &[(&str, usize)], value: T) -> SchemaResult<Self> {
        let schema = Schema::new(entries.iter().map(|(name, _)| *name))?;
        let shape: Vec<usize> = entries.iter().map(|(_, size)| *size).collect();
        Self::with_schema(Array::from_elem(IxDyn(&shape), value), schema)
    }
}
