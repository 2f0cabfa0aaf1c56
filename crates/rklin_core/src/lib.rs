//! The `rklin_core` crate is the numeric engine for the rklin solver:
//! a classical fourth-order Runge-Kutta integrator for first-order linear
//! equations of the form `a*y' + b*y = g(x)`, where g(x) is a finite sum
//! of power terms.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction, f32 or f64) and
//!   `FirstOrderOde` (the seam between an equation and the integrator).
//! - **Equation**: the immutable `a*y' + b*y = g(x)` model with its
//!   forcing-term evaluator and derivative.
//! - **Solver**: the fixed-step RK4 driver, its iteration trace, and the
//!   absolute-error helper.

pub mod equation;
pub mod error;
pub mod solver;
pub mod traits;
