//! HashTable: chained buckets that grow through a fixed prime sequence.
//!
//! Bindings are placed in bucket `hash_index(key, bucket_count)` at the head
//! of that bucket's chain. When an insert leaves more bindings than buckets,
//! the table moves to the next bucket count in `BUCKET_COUNTS` and relinks
//! every binding into a fresh bucket vector. The bucket count never shrinks.

use crate::binding::{self, Binding, Chain};
use crate::error::PutError;
use crate::hash::hash_index;
use crate::sym_table::SymTable;
use core::fmt;
use log::{debug, warn};
use std::collections::TryReserveError;

/// Bucket counts the table steps through as it grows. The last entry is a
/// hard cap: past it, chains simply get longer.
pub const BUCKET_COUNTS: [usize; 8] = [509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

pub struct HashTable<V> {
    buckets: Vec<Chain<V>>,
    // Index into BUCKET_COUNTS; buckets.len() == BUCKET_COUNTS[size_index].
    size_index: usize,
    len: usize,
}

fn alloc_buckets<V>(count: usize) -> Result<Vec<Chain<V>>, TryReserveError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(count)?;
    buckets.resize_with(count, Chain::new);
    Ok(buckets)
}

impl<V> HashTable<V> {
    /// Create an empty table, reporting failure to allocate the initial
    /// bucket array instead of aborting.
    pub fn try_new() -> Result<Self, TryReserveError> {
        Ok(Self {
            buckets: alloc_buckets(BUCKET_COUNTS[0])?,
            size_index: 0,
            len: 0,
        })
    }

    /// Current number of buckets; always an entry of `BUCKET_COUNTS`.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_of(&self, key: &str) -> usize {
        hash_index(key, self.bucket_count())
    }

    /// Move every binding into a bucket vector of the next size.
    ///
    /// No-op at the last size. If the new vector cannot be reserved the
    /// table is left exactly as it was.
    fn grow(&mut self) {
        let next = self.size_index + 1;
        let Some(&new_count) = BUCKET_COUNTS.get(next) else {
            return;
        };
        let mut buckets = match alloc_buckets(new_count) {
            Ok(b) => b,
            Err(e) => {
                warn!(
                    "symtable resize {} -> {} skipped: {}",
                    self.bucket_count(),
                    new_count,
                    e
                );
                return;
            }
        };
        for chain in &mut self.buckets {
            while let Some(b) = chain.pop_front() {
                let i = hash_index(&b.key, new_count);
                buckets[i].push_front(b);
            }
        }
        let old_count = self.bucket_count();
        self.buckets = buckets;
        self.size_index = next;
        debug!(
            "symtable resized {} -> {} buckets ({} bindings)",
            old_count, new_count, self.len
        );
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.buckets.len(), BUCKET_COUNTS[self.size_index]);
        let mut n = 0;
        for (i, chain) in self.buckets.iter().enumerate() {
            for (k, _) in chain.iter() {
                assert_eq!(hash_index(k, self.bucket_count()), i, "{k:?} misplaced");
                n += 1;
            }
        }
        assert_eq!(n, self.len);
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        <Self as SymTable>::new()
    }
}

impl<V> SymTable for HashTable<V> {
    type Value = V;
    type Iter<'a>
        = Iter<'a, V>
    where
        Self: 'a;
    type IterMut<'a>
        = IterMut<'a, V>
    where
        Self: 'a;

    /// Create an empty table with `BUCKET_COUNTS[0]` buckets.
    ///
    /// # Panics
    ///
    /// Panics if the initial bucket array cannot be allocated; see `try_new`.
    fn new() -> Self {
        Self::try_new().unwrap_or_else(|e| {
            panic!("symtable: cannot allocate {} buckets: {e}", BUCKET_COUNTS[0])
        })
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, key: &str, value: V) -> Result<(), PutError> {
        let i = self.bucket_of(key);
        let chain = &mut self.buckets[i];
        if chain.find(key).is_some() {
            return Err(PutError::DuplicateKey);
        }
        chain.push_front(Binding::new(key, value)?);
        self.len += 1;
        if self.len > self.bucket_count() {
            self.grow();
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_of(key)]
            .find(key)
            .map(|b| &b.value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.bucket_of(key);
        self.buckets[i].find_mut(key).map(|b| &mut b.value)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.bucket_of(key);
        let binding = self.buckets[i].unlink(key)?;
        self.len -= 1;
        Some(binding.into_value())
    }

    fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: None,
            remaining: self.len,
        }
    }
}

/// Iterator over a `HashTable` in bucket order, then chain order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Chain<V>>,
    chain: Option<binding::Iter<'a, V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            if self.remaining == 0 {
                return None;
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Mutable iterator over a `HashTable` in bucket order, then chain order.
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Chain<V>>,
    chain: Option<binding::IterMut<'a, V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            if self.remaining == 0 {
                return None;
            }
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
