use core::fmt;

/// The maximum number of zero bytes a single zero-prepend is allowed to add.
///
/// Zero-prepending is the only place where a caller controlled number (such as
/// a display width) turns directly into an allocation size, so it is bounded
/// by an explicit `PadLimit` instead of trusting the caller. Padding an
/// operand to the length of another operand is not bounded by this, because
/// that allocation is already proportional to the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PadLimit(usize);

impl PadLimit {
    /// The default limit of 1000 bytes, which is plenty for display widths
    pub const DEFAULT: PadLimit = PadLimit(1000);
    /// No limit other than what the allocator allows
    pub const UNLIMITED: PadLimit = PadLimit(usize::MAX);

    /// Creates a limit of `max_bytes`
    #[inline]
    pub const fn new(max_bytes: usize) -> Self {
        Self(max_bytes)
    }

    /// Returns the maximum number of bytes
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns `n` capped to the limit
    #[inline]
    pub const fn clamp(self, n: usize) -> usize {
        if n < self.0 {
            n
        } else {
            self.0
        }
    }

    /// Returns if `n` bytes of padding would be capped
    #[inline]
    pub const fn is_capped(self, n: usize) -> bool {
        n > self.0
    }
}

impl Default for PadLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PadLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::UNLIMITED {
            f.write_str("unlimited")
        } else {
            write!(f, "{} bytes", self.0)
        }
    }
}

#[test]
fn clamping() {
    assert_eq!(PadLimit::DEFAULT.clamp(5), 5);
    assert_eq!(PadLimit::DEFAULT.clamp(1000), 1000);
    assert_eq!(PadLimit::DEFAULT.clamp(1001), 1000);
    assert!(PadLimit::DEFAULT.is_capped(1001));
    assert!(!PadLimit::DEFAULT.is_capped(1000));
    assert_eq!(PadLimit::UNLIMITED.clamp(usize::MAX), usize::MAX);
    assert_eq!(PadLimit::new(0).clamp(3), 0);
    assert_eq!(PadLimit::default(), PadLimit::DEFAULT);
}
