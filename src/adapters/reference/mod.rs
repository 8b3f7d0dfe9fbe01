//! Gateway reference generators.
//!
//! - `OsReferenceGenerator` - 128 bits from the operating system CSPRNG
//! - `SequenceReferenceGenerator` - predictable references for tests

use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::ports::ReferenceGenerator;

/// Number of random bytes per reference (hex doubles it).
const REFERENCE_BYTES: usize = 16;

/// Cryptographically random references: 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsReferenceGenerator;

impl ReferenceGenerator for OsReferenceGenerator {
    fn next_reference(&self) -> String {
        let mut bytes = [0u8; REFERENCE_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

/// Deterministic references `<prefix>1`, `<prefix>2`, ...
#[derive(Debug)]
pub struct SequenceReferenceGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl ReferenceGenerator for SequenceReferenceGenerator {
    fn next_reference(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn os_references_are_32_lowercase_hex() {
        let reference = OsReferenceGenerator.next_reference();
        assert_eq!(reference.len(), 32);
        assert!(reference
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn os_references_do_not_repeat() {
        let generated: HashSet<String> =
            (0..1000).map(|_| OsReferenceGenerator.next_reference()).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn sequence_counts_up() {
        let generator = SequenceReferenceGenerator::new("ref-");
        assert_eq!(generator.next_reference(), "ref-1");
        assert_eq!(generator.next_reference(), "ref-2");
    }
}
