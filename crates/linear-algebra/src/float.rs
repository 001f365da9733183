use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait Float:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const APPROXIMATION_TOLERANCE: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    fn max_of(self, other: Self) -> Self {
        if self < other {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_float {
    ($type:ty, $tolerance:expr) => {
        impl Float for $type {
            const ZERO: Self = 0.;
            const ONE: Self = 1.;
            const APPROXIMATION_TOLERANCE: Self = $tolerance;

            fn sqrt(self) -> Self {
                <$type>::sqrt(self)
            }

            fn abs(self) -> Self {
                <$type>::abs(self)
            }
        }
    };
}

impl_float!(f32, 1e-5);
impl_float!(f64, 1e-12);
