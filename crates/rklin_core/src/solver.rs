use crate::traits::{FirstOrderOde, Scalar};
use serde::Serialize;

/// A pre-step `(x, y)` snapshot recorded once per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TracePoint<T: Scalar> {
    pub x: T,
    pub y: T,
}

/// The outcome of a fixed-step integration run.
///
/// `trace` starts at `(x0, y0)` and holds exactly one entry per iteration,
/// taken before that iteration's update; the post-loop value lives in
/// `value` and is never appended to the trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution<T: Scalar> {
    pub value: T,
    pub trace: Vec<TracePoint<T>>,
}

/// Advances `(x0, y0)` toward `x_target` with the classical fourth-order
/// Runge-Kutta method in fixed steps of magnitude `|h|` and returns the
/// approximate `y` at the last grid point reached.
///
/// The step direction is derived solely from comparing `x_target` to `x0`;
/// the sign of the caller-supplied `h` is discarded. The iteration count
/// `n` truncates `(x_target - x0) / step` toward zero, so when the span is
/// not an exact multiple of the step the last partial step is dropped and
/// the nominal end point is `x0 + n*step`, short of `x_target`. With
/// `n <= 0` (including `x0 == x_target`) no iteration runs and `y0` comes
/// back unchanged with an empty trace.
pub fn solve<T: Scalar>(
    ode: &impl FirstOrderOde<T>,
    x0: T,
    y0: T,
    x_target: T,
    h: T,
) -> Solution<T> {
    let step = if x_target >= x0 { h.abs() } else { -h.abs() };

    // (x_target - x0) / step is non-negative by construction; a zero step
    // makes it non-finite and the cast degrades to a no-op run.
    let n = ((x_target - x0) / step).trunc().to_usize().unwrap_or(0);

    let half = T::from_f64(0.5).unwrap();
    let sixth = T::from_f64(1.0 / 6.0).unwrap();
    let two = T::from_f64(2.0).unwrap();

    let mut x = x0;
    let mut y = y0;
    let mut trace = Vec::with_capacity(n);

    for _ in 0..n {
        trace.push(TracePoint { x, y });

        let k1 = step * ode.slope(x, y);
        let k2 = step * ode.slope(x + step * half, y + k1 * half);
        let k3 = step * ode.slope(x + step * half, y + k2 * half);
        let k4 = step * ode.slope(x + step, y + k3);

        y = y + (k1 + two * k2 + two * k3 + k4) * sixth;
        x = x + step;
    }

    Solution { value: y, trace }
}

/// Absolute error of an approximation against a reference value.
pub fn absolute_error<T: Scalar>(true_value: T, approximate_value: T) -> T {
    (true_value - approximate_value).abs()
}

#[cfg(test)]
mod tests {
    use super::{absolute_error, solve};
    use crate::equation::{LinearEquation, Term};
    use crate::traits::{FirstOrderOde, Scalar};

    /// y' = rate * y, the test system with a closed-form solution.
    struct ExponentialOde<T: Scalar> {
        rate: T,
    }

    impl<T: Scalar> FirstOrderOde<T> for ExponentialOde<T> {
        fn slope(&self, _x: T, y: T) -> T {
            self.rate * y
        }
    }

    #[test]
    fn decay_equation_matches_closed_form_at_one() {
        // y' + y = 0, y(0) = 1  =>  y(1) = e^-1.
        let eq = LinearEquation::<f64>::new(1, 1, Vec::new()).unwrap();
        let solution = solve(&eq, 0.0, 1.0, 1.0, 0.01);
        assert!((solution.value - (-1.0_f64).exp()).abs() < 1e-4);
        assert_eq!(solution.trace.len(), 100);
    }

    #[test]
    fn decay_equation_matches_closed_form_in_single_precision() {
        // Same run at the reference program's float width.
        let eq = LinearEquation::<f32>::new(1, 1, Vec::new()).unwrap();
        let solution = solve(&eq, 0.0_f32, 1.0, 1.0, 0.01);
        assert!((solution.value - (-1.0_f32).exp()).abs() < 1e-4);
    }

    #[test]
    fn forced_equation_tracks_polynomial_solution() {
        // y' = 2x (a=1, b=0, g(x) = 2x), y(0) = 0  =>  y(x) = x^2.
        // RK4 is exact for cubics, up to rounding.
        let eq = LinearEquation::<f64>::new(1, 0, vec![Term::new(2.0, 1)]).unwrap();
        let solution = solve(&eq, 0.0, 0.0, 2.0, 0.1);
        assert!((solution.value - 4.0).abs() < 1e-12);
    }

    #[test]
    fn partial_final_step_is_dropped() {
        // span 1.0, step 0.3: exactly 3 iterations, remainder ignored.
        let ode = ExponentialOde { rate: -1.0_f64 };
        let solution = solve(&ode, 0.0, 1.0, 1.0, 0.3);
        assert_eq!(solution.trace.len(), 3);
        let last = solution.trace.last().unwrap();
        assert!((last.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn trace_starts_at_the_initial_point() {
        let ode = ExponentialOde { rate: 1.0 };
        let solution = solve(&ode, 2.0, 5.0, 3.0, 0.25);
        assert_eq!(solution.trace.len(), 4);
        assert_eq!(solution.trace[0].x, 2.0);
        assert_eq!(solution.trace[0].y, 5.0);
    }

    #[test]
    fn backward_integration_ignores_the_sign_of_h() {
        let ode = ExponentialOde { rate: 0.5 };
        for h in [0.7, -0.7] {
            let solution = solve(&ode, 1.0, 1.0, -2.0, h);
            assert_eq!(solution.trace.len(), 4);
            assert!(solution.trace[1].x < solution.trace[0].x);
        }
    }

    #[test]
    fn forward_integration_ignores_the_sign_of_h() {
        let ode = ExponentialOde { rate: 0.5 };
        let forward = solve(&ode, 0.0, 1.0, 1.0, 0.25);
        let flipped = solve(&ode, 0.0, 1.0, 1.0, -0.25);
        assert_eq!(forward, flipped);
        assert!(forward.trace[1].x > forward.trace[0].x);
    }

    #[test]
    fn equal_endpoints_return_y0_with_an_empty_trace() {
        let ode = ExponentialOde { rate: 3.0 };
        let solution = solve(&ode, 1.5, -4.0, 1.5, 0.1);
        assert_eq!(solution.value, -4.0);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn zero_step_degrades_to_a_no_op() {
        // h = 0 belongs to the caller's input validation; the solver
        // tolerates it by running zero iterations.
        let ode = ExponentialOde { rate: 1.0 };
        let solution = solve(&ode, 0.0, 2.0, 1.0, 0.0);
        assert_eq!(solution.value, 2.0);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn solve_is_deterministic_across_calls() {
        let eq = LinearEquation::new(2, -1, vec![Term::new(0.5, 2), Term::new(1.0, 0)]).unwrap();
        let first = solve(&eq, 0.0, 1.0, 3.0, 0.05);
        let second = solve(&eq, 0.0, 1.0, 3.0, 0.05);
        assert_eq!(first, second);
    }

    #[test]
    fn numeric_domain_anomalies_flow_through_as_non_finite() {
        // g(x) = x^-1 blows up at the x = 0 starting point; the solver
        // must propagate it, not panic.
        let eq = LinearEquation::<f64>::new(1, 0, vec![Term::new(1.0, -1)]).unwrap();
        let solution = solve(&eq, 0.0, 1.0, 1.0, 0.5);
        assert!(!solution.value.is_finite());
    }

    #[test]
    fn absolute_error_is_symmetric_magnitude() {
        assert_eq!(absolute_error(0.367879, 0.367900), absolute_error(0.367900, 0.367879));
        assert!((absolute_error(1.0_f64, 0.75) - 0.25).abs() < 1e-12);
        assert_eq!(absolute_error(2.0, 2.0), 0.0);
    }
}
