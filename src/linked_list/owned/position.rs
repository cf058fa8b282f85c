use core::fmt::Debug;

/// An index argument that has not been validated yet.
///
/// Index based operations accept any primitive number. A position is only
/// usable when it is a non-negative integer; negative values, fractions, NaN
/// and infinities resolve to `None` and the operation treats them as invalid.
pub trait Position: Copy + Debug {
    /// Resolve to a zero-based index, or `None` if the value is not one.
    fn position(self) -> Option<usize>;
}

macro_rules! impl_integer_position {
    ($($t:ty),* $(,)?) => {
        $(
            impl Position for $t {
                #[inline]
                fn position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_float_position {
    ($($t:ty),* $(,)?) => {
        $(
            impl Position for $t {
                #[inline]
                fn position(self) -> Option<usize> {
                    if self.is_nan() || self.is_infinite() || self < 0.0 {
                        return None;
                    }
                    // Floats this large have no fractional part.
                    if self >= usize::MAX as $t {
                        return Some(usize::MAX);
                    }
                    let index = self as usize;
                    (index as $t == self).then_some(index)
                }
            }
        )*
    };
}

impl_integer_position!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);
impl_float_position!(f32, f64);
