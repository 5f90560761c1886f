use crate::ByteVec;

/// `rand_support` functions
impl ByteVec {
    // this is tested by `testcrate/tests/rand.rs`

    /// Returns `len` random bytes using a `rand_core::RngCore` random number
    /// generator. This works by calling `RngCore::try_fill_bytes` on a zeroed
    /// buffer, so the output only depends on the byte stream of the rng.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use jco_core::ByteVec;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = ByteVec::rand_using(&mut rng, 13).unwrap();
    /// assert_eq!(x.len(), 13);
    /// ```
    pub fn rand_using<R>(rng: &mut R, len: usize) -> Result<ByteVec, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut bytes = alloc::vec![0u8; len];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(ByteVec::from(bytes))
    }
}
