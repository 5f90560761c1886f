use jco::ByteVec;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

#[test]
fn rand() {
    // the bytes are exactly the byte stream of the rng
    let mut rng0 = Xoshiro128StarStar::seed_from_u64(0);
    let mut rng1 = Xoshiro128StarStar::seed_from_u64(0);
    let x = ByteVec::rand_using(&mut rng0, 13).unwrap();
    let mut expected = [0u8; 13];
    rng1.fill_bytes(&mut expected);
    assert_eq!(x, expected);
    // streams continue where they left off
    let y = ByteVec::rand_using(&mut rng0, 7).unwrap();
    let mut expected = [0u8; 7];
    rng1.fill_bytes(&mut expected);
    assert_eq!(y, expected);

    assert!(ByteVec::rand_using(&mut rng0, 0).unwrap().is_empty());
}

#[test]
fn rand_is_not_constant() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(1);
    let x = ByteVec::rand_using(&mut rng, 32).unwrap();
    let y = ByteVec::rand_using(&mut rng, 32).unwrap();
    assert_ne!(x, y);
    assert!(!x.is_zero());
}
