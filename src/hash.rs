//! Bucket hash shared by the hash-table backend.
//!
//! The hash is a plain multiplicative string hash over the key's bytes. It
//! depends on nothing but the key and the bucket count, so a binding can be
//! relocated during resize by recomputing its index against the new count.

/// Multiplier applied to the running hash before each byte is added.
pub const HASH_MULTIPLIER: u64 = 65599;

/// Map `key` to a bucket index in `[0, bucket_count)`.
///
/// Arithmetic wraps in 64 bits, so the index for a given key and bucket
/// count is identical on every platform.
///
/// # Panics
///
/// Panics if `bucket_count` is zero.
#[inline]
pub fn hash_index(key: &str, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "bucket count must be non-zero");
    let h = key.bytes().fold(0u64, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(b))
    });
    (h % bucket_count as u64) as usize
}
