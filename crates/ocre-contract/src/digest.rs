//! Contract version digests
//!
//! Provides [`ContractDigest`], a 32-byte Blake3 digest over a contract's
//! canonical JSON encoding, used elsewhere in the system to decide whether
//! a definition needs re-persisting. The memo layer is an explicit,
//! injectable [`DigestCache`] with bounded capacity and TTL — never implicit
//! global state — so it can only ever be a performance optimization, not a
//! correctness input.

use crate::contract::ViewContract;
use moka::sync::Cache;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// A 32-byte Blake3 digest of a contract's canonical encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractDigest([u8; 32]);

impl ContractDigest {
    /// Compute the digest of a contract
    ///
    /// Deterministic: struct field order fixes the JSON encoding, so equal
    /// contracts always produce equal digests.
    #[must_use]
    pub fn compute(contract: &ViewContract) -> Self {
        let encoded = serde_json::to_vec(contract).unwrap_or_default();
        Self(*blake3::hash(&encoded).as_bytes())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ContractDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Cache key: contract id plus version
type DigestKey = (String, String);

/// Injectable digest cache, keyed by `(contract id, version)`
///
/// Bounded by capacity and TTL so entries for stale versions age out.
/// Cache state never changes observable digests — a hit and a recompute
/// always agree.
#[derive(Debug, Clone)]
pub struct DigestCache {
    inner: Cache<DigestKey, ContractDigest>,
}

impl DigestCache {
    /// Create a cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create a cache with max capacity and time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Get the digest for a contract, computing and caching on miss
    #[must_use]
    pub fn digest_for(&self, contract: &ViewContract) -> ContractDigest {
        let key = (
            contract.id.clone().unwrap_or_default(),
            contract.version.clone().unwrap_or_default(),
        );
        self.inner
            .get_with(key, || ContractDigest::compute(contract))
    }

    /// Drop the cached digest for one contract id/version
    #[inline]
    pub fn invalidate(&self, contract_id: &str, version: &str) {
        self.inner
            .invalidate(&(contract_id.to_string(), version.to_string()));
    }

    /// Number of cached entries
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
