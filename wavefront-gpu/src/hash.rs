//! Integer hashing based on Bob Jenkins' lookup3.
//!
//! See:
//! - http://burtleburtle.net/bob/c/lookup3.c

const SEED_2D: u32 = 0xdeadbeef + (2 << 2) + 13;

/// Hashes two integers into one; used to derive per-pixel random seeds.
pub fn hash_uint2(kx: u32, ky: u32) -> u32 {
    let mut a = SEED_2D.wrapping_add(kx);
    let mut b = SEED_2D.wrapping_add(ky);
    let mut c = SEED_2D;

    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));

    c
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(hash_uint2(12, 34), hash_uint2(12, 34));
    }

    #[test]
    fn distinct_for_nearby_pixels() {
        let hashes: HashSet<_> = (0..64)
            .flat_map(|y| (0..64).map(move |x| hash_uint2(x, y)))
            .collect();

        // lookup3 isn't a bijection on the output word, so allow for a stray
        // collision
        assert!(hashes.len() >= 64 * 64 - 2);
    }

    #[test]
    fn order_matters() {
        assert_ne!(hash_uint2(1, 2), hash_uint2(2, 1));
    }
}
