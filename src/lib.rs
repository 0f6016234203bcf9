pub mod constants;
pub mod errors;
pub mod isentropic;
pub mod nozzle;

pub use constants::*;
pub use errors::NozzleError;

// Re-export commonly used items from the isentropic-relations layer
pub use isentropic::{
    area_ratio, mach_from_area_ratio, pressure_ratio, temperature_ratio, MachSolution,
    SolverStatus,
};

// Re-export the performance model surface
pub use nozzle::{
    characteristic_velocity, performance, specific_heat_cp, NozzleInputs, NozzleOutputs,
};
