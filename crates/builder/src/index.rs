use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::num::TryFromIntError;

use atoi::FromRadix10Checked;

/// A node identifier.
///
/// Nodes are numbered densely from `0` to `node_count - 1`, so every node id
/// doubles as an index into per-node storage.
pub trait Idx: Copy + Ord + Debug + Display + Hash + Send + Sync + Sized + 'static {
    /// Creates a node id from an index.
    ///
    /// Panics if the index does not fit into the id type. Use
    /// [`Idx::try_new`] for indices that are not known to fit.
    fn new(idx: usize) -> Self;

    fn try_new(idx: usize) -> Result<Self, TryFromIntError>;

    fn zero() -> Self;

    fn index(self) -> usize;

    /// Parses a node id from the start of `bytes`.
    ///
    /// Returns the id and the number of consumed bytes. A consumed length of
    /// `0` signals that `bytes` does not start with a number or that the
    /// number does not fit into the id type.
    fn parse(bytes: &[u8]) -> (Self, usize);
}

macro_rules! impl_idx {
    ($TYPE:ty) => {
        impl Idx for $TYPE {
            #[inline]
            fn new(idx: usize) -> Self {
                assert!(idx <= <$TYPE>::MAX as usize);
                idx as $TYPE
            }

            #[inline]
            fn try_new(idx: usize) -> Result<Self, TryFromIntError> {
                <$TYPE>::try_from(idx as u128)
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            #[inline]
            fn parse(bytes: &[u8]) -> (Self, usize) {
                match FromRadix10Checked::from_radix_10_checked(bytes) {
                    (Some(id), len) => (id, len),
                    (None, _) => (0, 0),
                }
            }
        }
    };
}

impl_idx!(u32);
impl_idx!(u64);
impl_idx!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_overflow() {
        assert_eq!(<u32 as Idx>::try_new(42), Ok(42));
        assert!(<u32 as Idx>::try_new(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn try_new_usize() {
        assert_eq!(<usize as Idx>::try_new(usize::MAX), Ok(usize::MAX));
        assert_eq!(<u64 as Idx>::try_new(7), Ok(7));
    }

    #[test]
    fn parse_overflow() {
        assert_eq!(<u32 as Idx>::parse(b"4294967295"), (u32::MAX, 10));
        assert_eq!(<u32 as Idx>::parse(b"4294967297 1"), (0, 0));
        assert_eq!(<u64 as Idx>::parse(b"18446744073709551616"), (0, 0));
    }

    #[test]
    fn parse_prefix() {
        assert_eq!(<u32 as Idx>::parse(b"1337 42"), (1337, 4));
        assert_eq!(<usize as Idx>::parse(b"x"), (0, 0));
    }
}
