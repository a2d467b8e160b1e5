use mdag_types::Digest;

use crate::error::StoreResult;

/// Digest-keyed, append-only key-value store.
///
/// All implementations must satisfy these invariants:
/// - A value written under a key is never replaced. Callers only ever
///   write a key derived from the value, so a second `put` carries the
///   same bytes and may be skipped.
/// - `exists` reflects every successful `put` that happened before it.
/// - Methods take `&self`; implementations synchronize internally so that
///   independent callers can share one store.
/// - Errors are returned as-is; retry policy, if any, lives in the backend.
pub trait KvStore: Send + Sync {
    /// Check whether a value is stored under `key`.
    fn exists(&self, key: &Digest) -> StoreResult<bool>;

    /// Store `value` under `key`.
    fn put(&self, key: &Digest, value: &[u8]) -> StoreResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn exists(&self, key: &Digest) -> StoreResult<bool> {
        (**self).exists(key)
    }

    fn put(&self, key: &Digest, value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }
}

impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    fn exists(&self, key: &Digest) -> StoreResult<bool> {
        (**self).exists(key)
    }

    fn put(&self, key: &Digest, value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }
}
