// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Catalog**: Remote endpoint, identifier universe and client identity
//! - **Requests**: Per-lookup deadline and concurrency bound
//! - **Cache**: In-memory record cache
//! - **Gallery**: Batch sizing

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Base address of the remote catalog; lookups append `/{id}` or `/{name}`.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Identifiers are drawn from `1..=universe_size`.
pub const DEFAULT_UNIVERSE_SIZE: u32 = 1010;

/// Minimum identifier universe.
pub const MIN_UNIVERSE_SIZE: u32 = 1;

/// Maximum identifier universe.
pub const MAX_UNIVERSE_SIZE: u32 = 100_000;

/// `User-Agent` header sent with every catalog request.
pub const DEFAULT_USER_AGENT: &str = concat!("DexGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Request Defaults
// ==========================================================================

/// Default per-lookup deadline (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum per-lookup deadline (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum per-lookup deadline (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default number of lookups in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Minimum number of lookups in flight at once.
pub const MIN_MAX_CONCURRENCY: usize = 1;

/// Maximum number of lookups in flight at once.
pub const MAX_MAX_CONCURRENCY: usize = 64;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of records kept in memory. `0` disables the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Maximum number of records kept in memory.
pub const MAX_CACHE_CAPACITY: usize = 4096;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of records per refresh.
pub const DEFAULT_BATCH_SIZE: usize = 30;

/// Minimum number of records per refresh.
pub const MIN_BATCH_SIZE: usize = 1;

/// Maximum number of records per refresh.
pub const MAX_BATCH_SIZE: usize = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Catalog validation
    assert!(MIN_UNIVERSE_SIZE > 0);
    assert!(DEFAULT_UNIVERSE_SIZE >= MIN_UNIVERSE_SIZE);
    assert!(DEFAULT_UNIVERSE_SIZE <= MAX_UNIVERSE_SIZE);

    // Request validation
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(MIN_MAX_CONCURRENCY > 0);
    assert!(DEFAULT_MAX_CONCURRENCY >= MIN_MAX_CONCURRENCY);
    assert!(DEFAULT_MAX_CONCURRENCY <= MAX_MAX_CONCURRENCY);

    // Cache validation
    assert!(DEFAULT_CACHE_CAPACITY <= MAX_CACHE_CAPACITY);

    // Gallery validation
    assert!(MIN_BATCH_SIZE > 0);
    assert!(DEFAULT_BATCH_SIZE >= MIN_BATCH_SIZE);
    assert!(DEFAULT_BATCH_SIZE <= MAX_BATCH_SIZE);
    assert!(DEFAULT_BATCH_SIZE as u64 <= DEFAULT_UNIVERSE_SIZE as u64);
};
