use jco::ByteVec;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{big, rand_byte_vec};

/// Checks string conversions against `num-bigint` and that parsing inverts
/// rendering
pub fn strings(iters: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..iters {
        let x = rand_byte_vec(&mut rng, max_len);
        let b = big(&x);

        let dec = x.to_dec_string();
        assert_eq!(dec, b.to_str_radix(10));
        assert_eq!(format!("{x}"), dec);
        assert_eq!(format!("{x:x}"), b.to_str_radix(16));
        assert_eq!(format!("{x:b}"), b.to_str_radix(2));

        // canonical results
        let canonical = x.trim_leading_zeros();
        assert_eq!(ByteVec::parse_literal(&dec).unwrap(), canonical);
        assert_eq!(ByteVec::parse_literal(&format!("{x:#x}")).unwrap(), canonical);
        assert_eq!(ByteVec::parse_literal(&format!("{x:#X}")).unwrap(), canonical);
        assert_eq!(ByteVec::parse_literal(&format!("{x:#b}")).unwrap(), canonical);
        assert_eq!(
            ByteVec::parse_literal(&format!("0o{}", b.to_str_radix(8))).unwrap(),
            canonical
        );
        for radix in [3u8, 7, 10, 36] {
            assert_eq!(
                ByteVec::from_str_radix(&b.to_str_radix(radix as u32), radix).unwrap(),
                canonical
            );
        }

        // fixed width renderings keep leading zeros
        let hex = x.to_hex_string(x.len());
        assert_eq!(hex.len(), 2 + 2 * x.len());
        let bin = x.to_bin_string(x.len());
        assert_eq!(bin.len(), 2 + 8 * x.len());
        if !x.is_empty() {
            assert_eq!(ByteVec::parse_literal(&hex).unwrap(), canonical);
            assert_eq!(ByteVec::parse_literal(&bin).unwrap(), canonical);
        }
    }
}
