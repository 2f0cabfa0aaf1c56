use crate::error::EquationError;
use crate::traits::{FirstOrderOde, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `c * x^p` summand of the forcing term g(x).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term<T: Scalar> {
    pub coefficient: T,
    pub power: i32,
}

impl<T: Scalar> Term<T> {
    pub fn new(coefficient: T, power: i32) -> Self {
        Self { coefficient, power }
    }

    fn eval(&self, x: T) -> T {
        // Real-exponent power semantics: domain anomalies surface as
        // NaN/inf and flow through the float pipeline untrapped.
        self.coefficient * x.powf(T::from_i32(self.power).unwrap())
    }
}

/// A first-order linear equation `a*y' + b*y = g(x)`, where g(x) is a
/// finite sum of power terms.
///
/// Immutable after construction: the term list is fixed and the
/// solvability precondition `a != 0` has already been checked, so
/// [`slope`](FirstOrderOde::slope) never divides by zero. No
/// `Deserialize`: construction must go through [`LinearEquation::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearEquation<T: Scalar> {
    y_prime_coefficient: i32,
    y_coefficient: i32,
    terms: Vec<Term<T>>,
}

impl<T: Scalar> LinearEquation<T> {
    /// Builds the equation from the coefficient of y', the coefficient of
    /// y, and the terms of g(x) (empty means `g(x) = 0`).
    ///
    /// Fails with [`EquationError::ZeroYPrimeCoefficient`] when the
    /// equation cannot be solved for y'. The check happens here, once,
    /// rather than lazily on the first derivative evaluation.
    pub fn new(
        y_prime_coefficient: i32,
        y_coefficient: i32,
        terms: Vec<Term<T>>,
    ) -> Result<Self, EquationError> {
        if y_prime_coefficient == 0 {
            return Err(EquationError::ZeroYPrimeCoefficient);
        }
        Ok(Self {
            y_prime_coefficient,
            y_coefficient,
            terms,
        })
    }

    pub fn y_prime_coefficient(&self) -> i32 {
        self.y_prime_coefficient
    }

    pub fn y_coefficient(&self) -> i32 {
        self.y_coefficient
    }

    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    /// Evaluates the forcing term `g(x) = sum(c_i * x^p_i)`.
    pub fn g(&self, x: T) -> T {
        self.terms
            .iter()
            .fold(T::zero(), |acc, term| acc + term.eval(x))
    }
}

impl<T: Scalar> FirstOrderOde<T> for LinearEquation<T> {
    /// `y' = (g(x) - b*y) / a`.
    fn slope(&self, x: T, y: T) -> T {
        let a = T::from_i32(self.y_prime_coefficient).unwrap();
        let b = T::from_i32(self.y_coefficient).unwrap();
        (self.g(x) - b * y) / a
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for LinearEquation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}*y' + {}*y = ",
            self.y_prime_coefficient, self.y_coefficient
        )?;
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "( {} * x^{} )", term.coefficient, term.power)?;
        }
        Ok(())
    }
}
