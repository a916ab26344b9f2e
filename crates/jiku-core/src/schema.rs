//! Schemas: ordered, duplicate-free dimension names bound to tensor axes.
//!
//! A [`Schema`] is the naming layer's core invariant carrier. The position of
//! a name in the schema is the physical axis it describes, so reordering
//! names and permuting axes are the same operation. Schemas are cheap to
//! clone and compare; all mutation is by construction of a new schema, with
//! the duplicate-free invariant re-checked on every path.
//!
//! # Examples
//!
//! ```
//! use jiku_core::Schema;
//!
//! let schema = Schema::new(["batch", "time", "features"]).unwrap();
//! assert_eq!(schema.len(), 3);
//! assert_eq!(schema.position("time"), Some(1));
//! assert!(schema.contains("batch"));
//!
//! // Reordering is expressed as a permutation of axis positions
//! let perm = schema.permutation_to(&["features", "batch", "time"]).unwrap();
//! assert_eq!(perm, vec![2, 0, 1]);
//! ```

use crate::error::{SchemaError, SchemaResult};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// Type alias for a physical axis index.
///
/// Zero-indexed (0 is the first axis). In this crate an axis index is always
/// derived from a name via [`Schema::position`] or [`Schema::index_of`].
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions; higher ranks spill to the
/// heap automatically.
pub type Shape = SmallVec<[usize; 6]>;

/// Ordered dimension-name list, inline up to 6 names.
pub type Names = SmallVec<[String; 6]>;

/// An ordered, duplicate-free list of dimension names.
///
/// The i-th name describes the i-th axis of the tensor the schema is bound
/// to. Two schemas are equal only when they hold the same names in the same
/// order; operations that tolerate reordering say so explicitly and go
/// through [`Schema::permutation_to`].
///
/// # Examples
///
/// ```
/// use jiku_core::Schema;
///
/// let schema = Schema::new(["i", "j"]).unwrap();
/// assert_eq!(schema.names(), &["i", "j"]);
///
/// // Duplicates are rejected at construction
/// assert!(Schema::new(["i", "i"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    names: Names,
}

impl Schema {
    /// Create a schema from an ordered list of names.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateName`] if any name appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiku_core::Schema;
    ///
    /// let schema = Schema::new(["row", "col"]).unwrap();
    /// assert_eq!(schema.len(), 2);
    /// ```
    pub fn new<I, S>(names: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Names = names.into_iter().map(Into::into).collect();
        let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::duplicate_name(name.as_str()));
            }
        }
        Ok(Self { names })
    }

    /// The empty schema, describing a rank-0 (scalar) tensor.
    pub fn empty() -> Self {
        Self {
            names: Names::new(),
        }
    }

    /// Number of named dimensions. Equals the rank of any bound tensor.
    pub fn len(&self) -> Rank {
        self.names.len()
    }

    /// True for the rank-0 schema.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names in axis order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` is one of this schema's dimensions.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Physical axis of `name`, or `None` if absent.
    pub fn position(&self, name: &str) -> Option<Axis> {
        self.names.iter().position(|n| n == name)
    }

    /// Physical axis of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownDimension`] if the name is absent.
    pub fn index_of(&self, name: &str) -> SchemaResult<Axis> {
        self.position(name)
            .ok_or_else(|| SchemaError::unknown_dimension(name))
    }

    /// Axis permutation that reorders this schema as `target`.
    ///
    /// `perm[i]` is the current axis holding `target[i]`, so applying the
    /// permutation to a bound tensor's axes yields a tensor whose i-th axis
    /// is named `target[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaMismatch`] unless `target` is exactly a
    /// permutation of the current names: same length, every name present,
    /// no repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiku_core::Schema;
    ///
    /// let schema = Schema::new(["i", "j", "k"]).unwrap();
    /// assert_eq!(schema.permutation_to(&["k", "i", "j"]).unwrap(), vec![2, 0, 1]);
    /// assert!(schema.permutation_to(&["i", "j"]).is_err());
    /// assert!(schema.permutation_to(&["i", "j", "z"]).is_err());
    /// ```
    pub fn permutation_to<S: AsRef<str>>(&self, target: &[S]) -> SchemaResult<Vec<Axis>> {
        let mismatch = || {
            let target: Vec<String> = target.iter().map(|s| s.as_ref().to_string()).collect();
            SchemaError::schema_mismatch(&target, self.names())
        };

        if target.len() != self.len() {
            return Err(mismatch());
        }
        let mut perm = Vec::with_capacity(target.len());
        let mut used = vec![false; self.len()];
        for name in target {
            let pos = self.position(name.as_ref()).ok_or_else(mismatch)?;
            if used[pos] {
                return Err(mismatch());
            }
            used[pos] = true;
            perm.push(pos);
        }
        Ok(perm)
    }

    /// A copy of this schema with `old` renamed to `new`, order preserved.
    ///
    /// Renaming a dimension to itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownDimension`] if `old` is absent, or
    /// [`SchemaError::DuplicateName`] if `new` is already taken.
    pub fn renamed(&self, old: &str, new: &str) -> SchemaResult<Self> {
        if old == new {
            return Ok(self.clone());
        }
        let pos = self.index_of(old)?;
        if self.contains(new) {
            return Err(SchemaError::duplicate_name(new));
        }
        let mut names = self.names.clone();
        names[pos] = new.to_string();
        Ok(Self { names })
    }

    /// A copy of this schema with `name` inserted as the first dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateName`] if `name` is already present.
    pub fn prepended(&self, name: &str) -> SchemaResult<Self> {
        if self.contains(name) {
            return Err(SchemaError::duplicate_name(name));
        }
        let mut names = Names::with_capacity(self.len() + 1);
        names.push(name.to_string());
        names.extend(self.names.iter().cloned());
        Ok(Self { names })
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, ")")
    }
}
