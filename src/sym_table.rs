//! The contract shared by every symbol table backend.

use crate::error::PutError;

/// A string-keyed table of caller-supplied values.
///
/// Keys are unique and copied into the table on `put`. Values are stored as
/// given and handed back on `replace`/`remove`; the table never clones or
/// inspects them. Iteration order is unspecified and differs per backend.
pub trait SymTable: Sized {
    /// The caller-owned value type stored against each key.
    type Value;

    /// Shared iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (&'a str, &'a Self::Value)>
    where
        Self: 'a;

    /// Iterator over `(key, &mut value)` pairs. Keys are never mutable.
    type IterMut<'a>: Iterator<Item = (&'a str, &'a mut Self::Value)>
    where
        Self: 'a;

    /// Create an empty table.
    fn new() -> Self;

    /// Number of bindings, in O(1).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a binding for `key`.
    ///
    /// Fails with `DuplicateKey` if `key` is already bound, or with
    /// `AllocationFailure` if the key could not be copied. On failure the
    /// table is unchanged and `value` is dropped.
    fn put(&mut self, key: &str, value: Self::Value) -> Result<(), PutError>;

    /// Swap in `value` for an existing binding and return the previous value.
    /// Returns `None` and leaves the table alone if `key` is absent.
    fn replace(&mut self, key: &str, value: Self::Value) -> Option<Self::Value> {
        self.get_mut(key)
            .map(|slot| core::mem::replace(slot, value))
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get(&self, key: &str) -> Option<&Self::Value>;

    fn get_mut(&mut self, key: &str) -> Option<&mut Self::Value>;

    /// Remove the binding for `key`, returning its value.
    fn remove(&mut self, key: &str) -> Option<Self::Value>;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Call `apply(key, value, extra)` once for every binding.
    ///
    /// The table stays mutably borrowed for the whole walk, so `apply`
    /// cannot add or remove bindings; it may update values in place.
    fn for_each<X, F>(&mut self, mut apply: F, extra: &mut X)
    where
        X: ?Sized,
        F: FnMut(&str, &mut Self::Value, &mut X),
    {
        for (key, value) in self.iter_mut() {
            apply(key, value, extra);
        }
    }
}
