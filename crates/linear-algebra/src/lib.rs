mod float;
mod vector;

pub use float::Float;
pub use vector::Vector;

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

/// Panics when `a` and `b` differ by more than a few ulps relative to their magnitude.
#[track_caller]
pub fn assert_approximately_equal<T>(a: T, b: T)
where
    T: Float + std::fmt::Debug,
{
    let tolerance = T::APPROXIMATION_TOLERANCE * T::ONE.max_of(a.abs().max_of(b.abs()));
    assert!(
        (a - b).abs() <= tolerance,
        "{a:?} is not approximately equal to {b:?}"
    );
}
