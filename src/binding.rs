//! Bindings and the owned singly-linked chains that hold them.
//!
//! Both backends store their entries in `Chain`s: the list table keeps one
//! chain for the whole table, the hash table keeps one per bucket. A chain
//! owns each binding through a `Box`, so moving a binding between chains is
//! a pointer relink and never reallocates.

use crate::error::PutError;

pub(crate) type Link<V> = Option<Box<Binding<V>>>;

/// One key/value association.
pub(crate) struct Binding<V> {
    pub(crate) key: Box<str>,
    pub(crate) value: V,
    next: Link<V>,
}

impl<V> Binding<V> {
    /// Build an unlinked binding, copying `key`.
    ///
    /// The key copy is reserved fallibly; on failure nothing is allocated.
    pub(crate) fn new(key: &str, value: V) -> Result<Box<Self>, PutError> {
        let key = copy_key(key)?;
        Ok(Box::new(Binding {
            key,
            value,
            next: None,
        }))
    }

    pub(crate) fn into_value(self: Box<Self>) -> V {
        debug_assert!(self.next.is_none(), "dropping a linked binding");
        let Binding { value, .. } = *self;
        value
    }
}

fn copy_key(key: &str) -> Result<Box<str>, PutError> {
    let mut owned = String::new();
    owned.try_reserve_exact(key.len())?;
    owned.push_str(key);
    Ok(owned.into_boxed_str())
}

/// Owned chain of bindings, newest first.
pub(crate) struct Chain<V> {
    head: Link<V>,
}

impl<V> Chain<V> {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    /// Link `binding` in at the head.
    pub(crate) fn push_front(&mut self, mut binding: Box<Binding<V>>) {
        debug_assert!(binding.next.is_none());
        binding.next = self.head.take();
        self.head = Some(binding);
    }

    /// Unlink the head binding.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Binding<V>>> {
        let mut binding = self.head.take()?;
        self.head = binding.next.take();
        Some(binding)
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Binding<V>> {
        self.iter_bindings().find(|b| &*b.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Binding<V>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(b) = cur {
            if &*b.key == key {
                return Some(b);
            }
            cur = b.next.as_deref_mut();
        }
        None
    }

    /// Unlink the binding whose key equals `key`, fixing up either the
    /// predecessor's link or the head. The chain is untouched on a miss.
    pub(crate) fn unlink(&mut self, key: &str) -> Option<Box<Binding<V>>> {
        let mut cur = &mut self.head;
        while cur.as_deref().is_some_and(|b| &*b.key != key) {
            if let Some(b) = cur {
                cur = &mut b.next;
            }
        }
        let mut binding = cur.take()?;
        *cur = binding.next.take();
        Some(binding)
    }

    fn iter_bindings(&self) -> impl Iterator<Item = &Binding<V>> {
        let mut cur = self.head.as_deref();
        core::iter::from_fn(move || {
            let b = cur?;
            cur = b.next.as_deref();
            Some(b)
        })
    }

    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<V> Drop for Chain<V> {
    // Unlink one binding at a time so dropping a long chain does not recurse
    // through every `Box`.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut b) = cur {
            cur = b.next.take();
        }
    }
}

/// Iterator over the entries of one chain.
pub(crate) struct Iter<'a, V> {
    next: Option<&'a Binding<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|b| {
            self.next = b.next.as_deref();
            (&*b.key, &b.value)
        })
    }
}

/// Mutable iterator over the entries of one chain. Keys stay immutable.
pub(crate) struct IterMut<'a, V> {
    next: Option<&'a mut Binding<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|b| {
            let Binding { key, value, next } = b;
            self.next = next.as_deref_mut();
            let key: &'a str = key;
            (key, value)
        })
    }
}
