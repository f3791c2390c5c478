//! FNV-1a 64, the hash behind state fingerprints.
//!
//! FNV-1a is byte-at-a-time and allocation free, which suits the tens of
//! bytes a register state occupies. It is not collision resistant; see
//! `Explorer` for how collisions are surfaced.

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash `bytes` with FNV-1a 64.
///
/// # Examples
///
/// ```
/// use regsearch_vm::verified::hash::{fnv1a_64, FNV_OFFSET_BASIS};
///
/// assert_eq!(fnv1a_64(b""), FNV_OFFSET_BASIS);
/// assert_eq!(fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
/// ```
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(fnv1a_64(&[]), FNV_OFFSET_BASIS);
    }

    #[test]
    fn deterministic() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(fnv1a_64(&data), fnv1a_64(&data));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(fnv1a_64(&[1, 2]), fnv1a_64(&[2, 1]));
    }

    #[test]
    fn length_sensitive() {
        // Trailing zero bytes still change the hash.
        assert_ne!(fnv1a_64(&[0]), fnv1a_64(&[0, 0]));
    }
}
