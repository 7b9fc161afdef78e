//! Explicit truthiness for query results.
//!
//! Each type documents what counts as a positive signal instead of relying on
//! an implicit coercion: non-zero numbers, non-empty text and collections,
//! present optional handles.

/// A value whose truthiness is meaningful to a polling assertion.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_truthy_when_non_zero() {
        assert!(1u32.is_truthy());
        assert!((-3i64).is_truthy());
        assert!(!0usize.is_truthy());
        assert!(0.5f64.is_truthy());
        assert!(!0.0f32.is_truthy());
        assert!(!f64::NAN.is_truthy());
    }

    #[test]
    fn text_and_collections_are_truthy_when_non_empty() {
        assert!("a".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(vec![1].is_truthy());
        assert!(!Vec::<u8>::new().is_truthy());
        let empty: &[u8] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn options_are_truthy_when_present() {
        assert!(Some(false).is_truthy());
        assert!(!None::<u8>.is_truthy());
        assert!(!().is_truthy());
        assert!(Box::new(true).is_truthy());
    }
}
