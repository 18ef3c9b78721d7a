//! Element types accepted by the sorts.

use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// Primitive numeric types.
///
/// Sealed, the sorts only promise their behavior for the builtin integer and float types. Floats
/// are compared with `PartialOrd`: a NaN anywhere in the input keeps the set of elements intact,
/// but the resulting order is unspecified.
pub trait Numeric: private::Sealed + Copy + PartialOrd + Debug {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}
            impl Numeric for $t {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
