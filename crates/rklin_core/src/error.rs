use thiserror::Error;

/// Errors raised while constructing an equation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquationError {
    /// The equation `a*y' + b*y = g(x)` cannot be solved for y' when a = 0.
    #[error("the coefficient of y' is zero; the equation cannot be solved for y'")]
    ZeroYPrimeCoefficient,
}
