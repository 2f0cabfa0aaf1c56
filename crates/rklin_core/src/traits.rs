use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the solver.
/// Must support float arithmetic, debug printing, and conversion to/from
/// the primitive numeric types.
pub trait Scalar: Float + FromPrimitive + ToPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + ToPrimitive + Debug + 'static> Scalar for T {}

/// A first-order scalar ordinary differential equation y' = f(x, y).
pub trait FirstOrderOde<T: Scalar> {
    /// Evaluates the derivative y' at the point (x, y).
    fn slope(&self, x: T, y: T) -> T;
}
