use crate::constants::{R_UNIVERSAL, STANDARD_GRAVITY};
use crate::errors::NozzleError;
use crate::isentropic::{mach_from_area_ratio, pressure_ratio, temperature_ratio, MachSolution};

/// Chamber and ambient state for one operating point, SI units throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleInputs {
    pub chamber_pressure: f64,    // Pa
    pub chamber_temperature: f64, // K
    pub ambient_pressure: f64,    // Pa
    pub gamma: f64,               // specific heat ratio cp/cv
    pub molar_mass: f64,          // kg/mol
    pub area_ratio: f64,          // Ae/At
}

impl NozzleInputs {
    /// Builds a validated input value. Every field must be finite;
    /// pressures and temperature must be positive (ambient may be zero
    /// for vacuum), `gamma` must exceed 1, and the area ratio must
    /// exceed 1 for a converging-diverging nozzle.
    pub fn new(
        chamber_pressure: f64,
        chamber_temperature: f64,
        ambient_pressure: f64,
        gamma: f64,
        molar_mass: f64,
        area_ratio: f64,
    ) -> Result<Self, NozzleError> {
        require(chamber_pressure, "chamber_pressure", "finite and > 0 Pa", |v| v > 0.0)?;
        require(chamber_temperature, "chamber_temperature", "finite and > 0 K", |v| v > 0.0)?;
        require(ambient_pressure, "ambient_pressure", "finite and >= 0 Pa", |v| v >= 0.0)?;
        require(gamma, "gamma", "finite and > 1", |v| v > 1.0)?;
        require(molar_mass, "molar_mass", "finite and > 0 kg/mol", |v| v > 0.0)?;
        require(area_ratio, "area_ratio", "finite and > 1", |v| v > 1.0)?;

        Ok(NozzleInputs {
            chamber_pressure,
            chamber_temperature,
            ambient_pressure,
            gamma,
            molar_mass,
            area_ratio,
        })
    }

    /// Specific gas constant R = R_universal / Mw, J/(kg·K).
    pub fn gas_constant(&self) -> f64 {
        R_UNIVERSAL / self.molar_mass
    }
}

fn require(
    value: f64,
    field: &'static str,
    requirement: &'static str,
    in_domain: impl Fn(f64) -> bool,
) -> Result<(), NozzleError> {
    if value.is_finite() && in_domain(value) {
        Ok(())
    } else {
        Err(NozzleError::InvalidInput {
            field,
            requirement,
            value,
        })
    }
}

/// Ideal performance figures for one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleOutputs {
    pub exit_mach: f64,
    pub exit_pressure: f64,          // Pa
    pub exit_temperature: f64,       // K
    pub exit_velocity: f64,          // m/s
    pub thrust_coefficient: f64,     // F / (Pc·At)
    pub specific_impulse: f64,       // s
    pub thrust_per_throat_area: f64, // N/m²
    /// Diagnostics from the area-ratio inversion, so a best-effort clamp
    /// can be told apart from a converged root.
    pub solver: MachSolution,
}

/// Constant-pressure specific heat from gamma and molar mass, J/(kg·K):
/// Cp = gamma·R / (gamma - 1), with R = R_universal / Mw.
pub fn specific_heat_cp(molar_mass: f64, gamma: f64) -> f64 {
    let r = R_UNIVERSAL / molar_mass;
    gamma * r / (gamma - 1.0)
}

/// Ideal characteristic velocity for a choked throat, m/s:
/// c* = sqrt(R·Tc) / (gamma · (2/(gamma+1))^((gamma+1)/(2(gamma-1)))).
pub fn characteristic_velocity(gamma: f64, gas_constant: f64, chamber_temperature: f64) -> f64 {
    let g = gamma;
    (gas_constant * chamber_temperature).sqrt()
        / (g * (2.0 / (g + 1.0)).powf((g + 1.0) / (2.0 * (g - 1.0))))
}

/// Evaluates ideal (isentropic) nozzle performance for one operating point.
///
/// The exit Mach number comes from inverting the area–Mach relation on the
/// supersonic branch; the exit state follows from the closed-form
/// isentropic ratios. The thrust coefficient is split into a momentum term
/// Ve/c* and a pressure term (Pe - Pa)/Pc · ε, mirroring the physical
/// decomposition of nozzle thrust into momentum flux and pressure-imbalance
/// thrust.
pub fn performance(inputs: NozzleInputs) -> NozzleOutputs {
    let gamma = inputs.gamma;
    let gas_constant = inputs.gas_constant();

    // exit state (isentropic)
    let solver = mach_from_area_ratio(inputs.area_ratio, gamma);
    let exit_mach = solver.mach;
    let exit_pressure = inputs.chamber_pressure * pressure_ratio(exit_mach, gamma);
    let exit_temperature = inputs.chamber_temperature * temperature_ratio(exit_mach, gamma);

    // Ve = M·a at the exit plane
    let exit_velocity = exit_mach * (gamma * gas_constant * exit_temperature).sqrt();

    let c_star = characteristic_velocity(gamma, gas_constant, inputs.chamber_temperature);
    let cf_momentum = exit_velocity / c_star;
    let cf_pressure =
        (exit_pressure - inputs.ambient_pressure) / inputs.chamber_pressure * inputs.area_ratio;
    let thrust_coefficient = cf_momentum + cf_pressure;

    // F/At = CF·Pc; Isp = F / (mdot·g0) with mdot/At = Pc/c*
    let thrust_per_throat_area = thrust_coefficient * inputs.chamber_pressure;
    let specific_impulse = thrust_coefficient * c_star / STANDARD_GRAVITY;

    NozzleOutputs {
        exit_mach,
        exit_pressure,
        exit_temperature,
        exit_velocity,
        thrust_coefficient,
        specific_impulse,
        thrust_per_throat_area,
        solver,
    }
}
