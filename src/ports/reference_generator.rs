//! ReferenceGenerator port - Source of synthetic gateway references.

/// Produces opaque, never-reused gateway transaction references.
///
/// Production implementations must draw from a cryptographically secure
/// source. Tests inject a deterministic sequence.
pub trait ReferenceGenerator: Send + Sync {
    fn next_reference(&self) -> String;
}
