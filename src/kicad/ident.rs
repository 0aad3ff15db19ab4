//! Deterministic graphic identifiers.
//!
//! KiCad stamps every footprint item with a UUID. Random UUIDs would make
//! each regeneration produce a different file, so identifiers are derived
//! from a stable key instead: `HMAC-SHA256(key, salt)`, truncated to 16
//! bytes, with the version 4 and RFC 4122 variant bits forced.

use std::fmt::Display;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::{Builder, Uuid};

/// Salt used for labels, which are keyed by meaning rather than by order.
pub const LABEL_SALT: u32 = 42;

type HmacSha256 = Hmac<Sha256>;

/// Derives a stable UUID from `key` and `salt`.
///
/// The same `(key, salt)` pair always yields the same UUID. Graphics use
/// the footprint name as key and their 1-based emission index as salt.
///
/// # Examples
///
/// ```
/// use mta100_footprints::kicad::ident::make_uuid;
///
/// let a = make_uuid("mta100_01x2_P2.54_647050-2", 1);
/// let b = make_uuid("mta100_01x2_P2.54_647050-2", 1);
/// assert_eq!(a, b);
/// assert_eq!(a.get_version_num(), 4);
/// ```
#[must_use]
pub fn make_uuid(key: &str, salt: impl Display) -> Uuid {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(salt.to_string().as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Identifier for a footprint-level label keyed by meaning.
#[must_use]
pub fn label_uuid(key: &str) -> Uuid {
    make_uuid(key, LABEL_SALT)
}
