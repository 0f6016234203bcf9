// Physical Constants
pub const R_UNIVERSAL: f64 = 8.314462618; // J/(mol·K)
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²

// Mach Solver Parameters
pub const SOLVER_INITIAL_GUESS: f64 = 2.5; // supersonic starting point, suits ε in [2, 100]
pub const SOLVER_MAX_ITERATIONS: usize = 100;
pub const SOLVER_CONVERGENCE_TOL: f64 = 1e-8; // on |ΔM| between Newton steps
pub const SOLVER_DERIVATIVE_STEP: f64 = 1e-4; // forward finite-difference step in M
pub const SOLVER_FLAT_SLOPE: f64 = 1e-12; // |df/dM| at or below this counts as stalled
pub const SUPERSONIC_MACH_FLOOR: f64 = 1.01; // reported root never drops below this
