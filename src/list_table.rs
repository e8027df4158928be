//! ListTable: a single chain of bindings, newest first.
//!
//! Every operation is a linear scan. It is the baseline backend and the
//! reference the hash table is checked against.

use crate::binding::{self, Binding, Chain};
use crate::error::PutError;
use crate::sym_table::SymTable;
use core::fmt;

pub struct ListTable<V> {
    chain: Chain<V>,
    len: usize,
}

impl<V> Default for ListTable<V> {
    fn default() -> Self {
        <Self as SymTable>::new()
    }
}

impl<V> SymTable for ListTable<V> {
    type Value = V;
    type Iter<'a>
        = Iter<'a, V>
    where
        Self: 'a;
    type IterMut<'a>
        = IterMut<'a, V>
    where
        Self: 'a;

    fn new() -> Self {
        Self {
            chain: Chain::new(),
            len: 0,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn put(&mut self, key: &str, value: V) -> Result<(), PutError> {
        if self.chain.find(key).is_some() {
            return Err(PutError::DuplicateKey);
        }
        self.chain.push_front(Binding::new(key, value)?);
        self.len += 1;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.chain.find(key).map(|b| &b.value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain.find_mut(key).map(|b| &mut b.value)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let binding = self.chain.unlink(key)?;
        self.len -= 1;
        Some(binding.into_value())
    }

    fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.chain.iter(),
        }
    }

    fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.chain.iter_mut(),
        }
    }
}

/// Iterator over a `ListTable`, most recently inserted first.
pub struct Iter<'a, V> {
    it: binding::Iter<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

/// Mutable iterator over a `ListTable`, most recently inserted first.
pub struct IterMut<'a, V> {
    it: binding::IterMut<'a, V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

impl<'a, V> IntoIterator for &'a ListTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ListTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V: fmt::Debug> fmt::Debug for ListTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
