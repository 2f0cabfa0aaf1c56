use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rklin_core::equation::{LinearEquation, Term};
use rklin_core::solver::{absolute_error, solve};

/// Prompts on stdout and parses one value from the next stdin line.
fn prompt<T>(label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    line.trim()
        .parse()
        .with_context(|| format!("invalid value for \"{}\"", label.trim_end_matches(": ")))
}

// The reference arithmetic for this solver is single precision; the
// terminal front end keeps that width.
fn main() -> Result<()> {
    println!("Runge-Kutta method for first-order differential equation");
    println!("a * y' + b * y = g(x)");
    println!();

    let y_prime_coefficient: i32 = prompt("Enter the coefficient of y': ")?;
    let y_coefficient: i32 = prompt("Enter the coefficient of y: ")?;
    let term_count: usize = prompt("Enter the number of terms in g(x): ")?;

    let mut terms = Vec::with_capacity(term_count);
    for i in 1..=term_count {
        let coefficient: f32 = prompt(&format!("Enter the coefficient for term {i} of g(x): "))?;
        let power: i32 = prompt(&format!("Enter the power for term {i} of g(x): "))?;
        terms.push(Term::new(coefficient, power));
    }

    let equation = LinearEquation::new(y_prime_coefficient, y_coefficient, terms)?;
    println!("Entered equation: {equation}");

    println!("Enter initial values for the solution:");
    let x0: f32 = prompt("x0: ")?;
    let y0: f32 = prompt("y0: ")?;

    let h: f32 = prompt("Enter the step size (h): ")?;
    if h == 0.0 {
        bail!("the step size must be nonzero");
    }

    let x_target: f32 = prompt("Enter the x value to find the solution at: ")?;
    let true_value: f32 = prompt("Enter the true value of the function at the target point: ")?;

    println!();
    let solution = solve(&equation, x0, y0, x_target, h);

    println!("ITERATIONS");
    for point in &solution.trace {
        println!("f({}) = {}", point.x, point.y);
    }

    println!("Approximate value of the equation at point {x_target}: {}", solution.value);
    println!("Absolute error: {}", absolute_error(true_value, solution.value));

    Ok(())
}
