pub mod edgelist;

pub use edgelist::EdgeList;
pub use edgelist::WeightedEdgeListInput;

use crate::index::Idx;

pub struct InputPath<P>(pub(crate) P);

pub trait InputCapabilities<NI: Idx> {
    type GraphInput;
}

/// Used by input formats to read node or edge values from bytes.
pub trait ParseValue: Default + Sized {
    /// Parses a value from a slice.
    ///
    /// # Example
    ///
    /// ```
    /// use connected_graph_builder::input::ParseValue;
    ///
    /// let bytes = "13.37".as_bytes();
    ///
    /// let (number, len) = f32::parse(bytes);
    ///
    /// assert_eq!(number, 13.37);
    /// assert_eq!(len, 5);
    /// ```
    ///
    /// # Return
    ///
    /// Returns a tuple containing two entries. The first is the parsed value,
    /// the second is the index of the byte right after the parsed value. An
    /// index of `0` means that no value could be parsed, either because the
    /// slice does not start with a number or because the number overflows
    /// the target type.
    fn parse(bytes: &[u8]) -> (Self, usize);
}

impl ParseValue for () {
    fn parse(_bytes: &[u8]) -> (Self, usize) {
        ((), 0)
    }
}

macro_rules! impl_parse_value {
    ($atoi:path, $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::input::ParseValue for $ty {
                fn parse(bytes: &[u8]) -> (Self, usize) {
                    if bytes.is_empty() {
                        (<$ty as ::std::default::Default>::default(), 0)
                    } else {
                        $atoi(bytes)
                    }
                }
            }
        )+
    };
}

impl_parse_value!(
    parse_unsigned,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

impl_parse_value!(
    parse_signed,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

impl_parse_value!(parse_float, f32, f64);

fn parse_unsigned<T: atoi::FromRadix10Checked + Default>(bytes: &[u8]) -> (T, usize) {
    match T::from_radix_10_checked(bytes) {
        (Some(value), len) => (value, len),
        (None, _) => (T::default(), 0),
    }
}

fn parse_signed<T: atoi::FromRadix10SignedChecked + Default>(bytes: &[u8]) -> (T, usize) {
    match T::from_radix_10_signed_checked(bytes) {
        (Some(value), len) => (value, len),
        (None, _) => (T::default(), 0),
    }
}

fn parse_float<T: fast_float2::FastFloat + Default>(bytes: &[u8]) -> (T, usize) {
    fast_float2::parse_partial(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integers() {
        assert_eq!(<u32 as ParseValue>::parse(b"42 1"), (42, 2));
        assert_eq!(<i64 as ParseValue>::parse(b"-7"), (-7, 2));
        assert_eq!(<u32 as ParseValue>::parse(b""), (0, 0));
        assert_eq!(<u32 as ParseValue>::parse(b"abc"), (0, 0));
    }

    #[test]
    fn parse_integer_overflow() {
        assert_eq!(<u8 as ParseValue>::parse(b"255"), (255, 3));
        assert_eq!(<u8 as ParseValue>::parse(b"256"), (0, 0));
        assert_eq!(<u32 as ParseValue>::parse(b"4294967297 1"), (0, 0));
        assert_eq!(<i8 as ParseValue>::parse(b"-128"), (-128, 4));
        assert_eq!(<i8 as ParseValue>::parse(b"-129"), (0, 0));
        assert_eq!(<usize as ParseValue>::parse(b"99999999999999999999999"), (0, 0));
    }

    #[test]
    fn parse_floats() {
        assert_eq!(f64::parse(b"0.25\t"), (0.25, 4));
        assert_eq!(f64::parse(b"x").1, 0);
    }
}
