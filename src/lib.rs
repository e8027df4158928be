//! symtable: a string-keyed symbol table with two interchangeable
//! backends behind one trait.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one contract (`SymTable`) with a trivially correct baseline and a
//!   hashed backend, so the hashed one can always be checked against the
//!   baseline.
//! - Layers:
//!   - `Binding`/`Chain`: an owned singly-linked chain of key/value
//!     bindings. Both backends are built from it; it owns lookup, unlink
//!     and iteration.
//!   - `ListTable<V>`: one chain, newest first, O(n) per operation.
//!   - `HashTable<V>`: a vector of chains indexed by `hash::hash_index`,
//!     growing through `BUCKET_COUNTS` as bindings are added.
//!
//! Constraints
//! - Single-threaded: no internal locking.
//! - Keys are unique and copied into the table; the copy is released when
//!   the binding goes away.
//! - Values are the caller's: stored and handed back, never cloned or
//!   inspected. Pick `V = &T`, `Rc<T>`, an index, etc. to get the ownership
//!   you want.
//! - Every operation either completes or leaves the table as it was.
//!
//! Resizing
//! - After a successful `put`, if `len > bucket_count` and there is a larger
//!   entry in `BUCKET_COUNTS`, every binding is popped from its old chain and
//!   pushed onto its chain in a freshly reserved bucket vector. Bindings are
//!   relinked, never reallocated.
//! - The new vector is reserved fallibly. If that fails the resize is
//!   skipped (logged at `warn`) and the insert still succeeds.
//! - Removal never shrinks the bucket vector.
//!
//! Traversal
//! - `for_each` and `iter_mut` hold `&mut self` for the whole walk, so a
//!   callback cannot insert or remove mid-traversal; values may be updated
//!   in place. Order is unspecified and differs per backend.
//!
//! Errors
//! - `put` distinguishes a duplicate key from a failed key copy via
//!   `PutError`. Absent keys are `None` from `get`/`replace`/`remove`.
//!
//! Logging
//! - Resizes are reported through the `log` facade; the crate never installs
//!   a logger.

mod binding;
mod error;
pub mod hash;
pub mod hash_table;
pub mod list_table;
mod sym_table;
mod sym_table_proptest;

// Public surface
pub use error::PutError;
pub use hash_table::{HashTable, BUCKET_COUNTS};
pub use list_table::ListTable;
pub use sym_table::SymTable;
