use crate::constants::{
    SOLVER_CONVERGENCE_TOL, SOLVER_DERIVATIVE_STEP, SOLVER_FLAT_SLOPE, SOLVER_INITIAL_GUESS,
    SOLVER_MAX_ITERATIONS, SUPERSONIC_MACH_FLOOR,
};

/// How the area-ratio inversion terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// The step size dropped below the convergence tolerance.
    Converged,
    /// The local slope was too flat for a Newton step; the estimate was frozen.
    Stalled,
    /// The iteration cap was hit before the tolerance was met.
    Exhausted,
}

/// Result of inverting the area–Mach relation, with convergence diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachSolution {
    /// Supersonic exit Mach number, clamped to at least 1.01.
    pub mach: f64,
    /// Newton iterations performed.
    pub iterations: usize,
    /// Residual of the area relation at the reported root, areaRatio(M) - ε.
    pub residual: f64,
    pub status: SolverStatus,
}

impl MachSolution {
    pub fn is_converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}

/// Pe/P0 for isentropic expansion to Mach `mach`. Requires `gamma` > 1.
pub fn pressure_ratio(mach: f64, gamma: f64) -> f64 {
    (1.0 + (gamma - 1.0) * 0.5 * mach * mach).powf(-gamma / (gamma - 1.0))
}

/// Te/T0 for isentropic expansion to Mach `mach`.
pub fn temperature_ratio(mach: f64, gamma: f64) -> f64 {
    (1.0 + (gamma - 1.0) * 0.5 * mach * mach).powi(-1)
}

/// A/A* from the isentropic area–Mach relation. Equals 1 at M = 1 and
/// exceeds 1 on both the subsonic and supersonic branches.
pub fn area_ratio(mach: f64, gamma: f64) -> f64 {
    let g = gamma;
    (1.0 / mach)
        * ((2.0 / (g + 1.0)) * (1.0 + (g - 1.0) * 0.5 * mach * mach))
            .powf((g + 1.0) / (2.0 * (g - 1.0)))
}

/// Solves the area–Mach relation for the supersonic root M > 1 given the
/// area ratio ε = Ae/At.
///
/// Newton–Raphson with a forward finite-difference derivative, starting
/// from M = 2.5. The relation has a subsonic root as well; the starting
/// point and the final clamp to 1.01 keep the result on the supersonic
/// branch, which is the operating branch for a converging-diverging
/// nozzle flowing full.
///
/// Never errors: a flat slope or an exhausted iteration budget is reported
/// through [`SolverStatus`] with the best estimate so far.
pub fn mach_from_area_ratio(epsilon: f64, gamma: f64) -> MachSolution {
    let mut mach = SOLVER_INITIAL_GUESS;

    for iteration in 0..SOLVER_MAX_ITERATIONS {
        let f = area_ratio(mach, gamma) - epsilon;
        let f_stepped = area_ratio(mach + SOLVER_DERIVATIVE_STEP, gamma) - epsilon;
        let slope = (f_stepped - f) / SOLVER_DERIVATIVE_STEP;

        if slope.abs() <= SOLVER_FLAT_SLOPE {
            // A Newton step would divide by a near-zero slope, and the
            // estimate cannot change without one.
            return report(mach, iteration, epsilon, gamma, SolverStatus::Stalled);
        }

        let next = mach - f / slope;
        if (next - mach).abs() < SOLVER_CONVERGENCE_TOL {
            return report(next, iteration + 1, epsilon, gamma, SolverStatus::Converged);
        }
        mach = next;
    }

    report(
        mach,
        SOLVER_MAX_ITERATIONS,
        epsilon,
        gamma,
        SolverStatus::Exhausted,
    )
}

fn report(
    mach: f64,
    iterations: usize,
    epsilon: f64,
    gamma: f64,
    status: SolverStatus,
) -> MachSolution {
    let mach = mach.max(SUPERSONIC_MACH_FLOOR);
    MachSolution {
        mach,
        iterations,
        residual: area_ratio(mach, gamma) - epsilon,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pressure_ratio_bounds() {
        let gamma = 1.22;
        let pr = pressure_ratio(3.0, gamma);
        assert!(pr > 0.0);
        assert!(pr < 1.0);
    }

    #[test]
    fn test_ratios_are_unity_at_rest() {
        for &gamma in &[1.1, 1.22, 1.4, 1.67] {
            assert_eq!(pressure_ratio(0.0, gamma), 1.0);
            assert_eq!(temperature_ratio(0.0, gamma), 1.0);
        }
    }

    #[test]
    fn test_temperature_ratio_bounds() {
        let gamma = 1.4;
        for &mach in &[0.5, 1.0, 2.0, 5.0] {
            let tr = temperature_ratio(mach, gamma);
            assert!(tr > 0.0);
            assert!(tr < 1.0);
        }
    }

    #[test]
    fn test_area_ratio_is_unity_at_throat() {
        for &gamma in &[1.1, 1.22, 1.4] {
            assert_relative_eq!(area_ratio(1.0, gamma), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mach_monotonic_in_area_ratio() {
        let gamma = 1.22;
        let low = mach_from_area_ratio(5.0, gamma);
        let high = mach_from_area_ratio(20.0, gamma);
        assert!(high.mach > low.mach);
    }

    #[test]
    fn test_supersonic_root_guarantee() {
        for &gamma in &[1.05, 1.1, 1.22, 1.4, 1.67] {
            for &epsilon in &[2.0, 5.0, 10.0, 40.0, 100.0] {
                let solution = mach_from_area_ratio(epsilon, gamma);
                assert!(
                    solution.mach > 1.0,
                    "expected supersonic root for ε={}, γ={}, got M={}",
                    epsilon,
                    gamma,
                    solution.mach
                );
            }
        }
    }

    #[test]
    fn test_solver_converges_with_small_residual() {
        for &gamma in &[1.1, 1.22, 1.4] {
            for &epsilon in &[5.0, 10.0, 20.0, 40.0] {
                let solution = mach_from_area_ratio(epsilon, gamma);
                assert!(
                    solution.is_converged(),
                    "solver did not converge for ε={}, γ={}: {:?}",
                    epsilon,
                    gamma,
                    solution
                );
                assert!(
                    (solution.residual / epsilon).abs() < 1e-4,
                    "residual too large for ε={}, γ={}: {:?}",
                    epsilon,
                    gamma,
                    solution
                );
            }
        }
    }

    #[test]
    fn test_solver_root_satisfies_forward_relation() {
        let gamma = 1.22;
        let epsilon = 10.0;
        let solution = mach_from_area_ratio(epsilon, gamma);
        assert_relative_eq!(area_ratio(solution.mach, gamma), epsilon, epsilon = 1e-4);
    }

    #[test]
    fn test_solver_reports_iteration_count() {
        let solution = mach_from_area_ratio(10.0, 1.22);
        assert!(solution.iterations >= 1);
        assert!(solution.iterations <= 100);
    }
}
