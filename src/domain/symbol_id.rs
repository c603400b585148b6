//! Content-addressed symbol identity.
//!
//! A [`SymbolId`] is a 20-byte SHA-1 digest of a declaration's fingerprint
//! string (qualified name + normalized signature + template arguments).
//! Two declarations that denote the same entity — e.g. a function declared
//! in a header and defined in a translation unit — hash to the same id and
//! are merged by the extractor rather than duplicated.

use sha1::{Digest, Sha1};
use std::fmt;

/// A 20-byte content-addressed symbol identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId([u8; 20]);

impl SymbolId {
    /// The reserved all-zero id, never assigned to a real declaration.
    pub const INVALID: SymbolId = SymbolId([0u8; 20]);

    /// The reserved id for the translation unit's global namespace.
    pub const GLOBAL: SymbolId = SymbolId([0xffu8; 20]);

    /// Hash a fingerprint string into a new id.
    ///
    /// `disambiguator` breaks ties between declarations that would
    /// otherwise produce an identical fingerprint (see the overload-set
    /// hardening note in DESIGN.md); pass `0` for the common case.
    pub fn from_fingerprint(fingerprint: &str, disambiguator: u32) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(fingerprint.as_bytes());
        if disambiguator != 0 {
            hasher.update(b"#overload#");
            hasher.update(disambiguator.to_le_bytes());
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest);
        SymbolId(bytes)
    }

    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }

    pub fn is_global(&self) -> bool {
        *self == Self::GLOBAL
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex rendering, used by renderers as a stable link anchor.
    /// The two reserved sentinels render as their literal names rather
    /// than their (otherwise meaningless) byte pattern, since renderers
    /// pin `id="global"` for the global namespace (spec.md §6/§8).
    pub fn to_hex(&self) -> String {
        if self.is_global() {
            return "global".to_string();
        }
        if self.is_invalid() {
            return "invalid".to_string();
        }
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.to_hex())
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_fingerprint_yields_same_id() {
        let a = SymbolId::from_fingerprint("ns::foo(int)", 0);
        let b = SymbolId::from_fingerprint("ns::foo(int)", 0);
        assert_eq!(a, b);
    }

    #[test]
    fn different_fingerprint_yields_different_id() {
        let a = SymbolId::from_fingerprint("ns::foo(int)", 0);
        let b = SymbolId::from_fingerprint("ns::foo(double)", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn disambiguator_breaks_collisions() {
        let a = SymbolId::from_fingerprint("ns::foo(int)", 0);
        let b = SymbolId::from_fingerprint("ns::foo(int)", 1);
        assert_ne!(a, b);
    }

    #[test]
    fn sentinels_are_distinct_and_flagged() {
        assert!(SymbolId::INVALID.is_invalid());
        assert!(SymbolId::GLOBAL.is_global());
        assert_ne!(SymbolId::INVALID, SymbolId::GLOBAL);
    }

    #[test]
    fn hex_round_trips_length() {
        let id = SymbolId::from_fingerprint("x", 0);
        assert_eq!(id.to_hex().len(), 40);
    }
}
