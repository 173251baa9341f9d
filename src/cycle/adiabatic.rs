//! First-order adiabatic correction of the isothermal cycle.
//!
//! Consumes an already-computed Schmidt table and re-integrates the pressure
//! around the cycle with an explicit Euler scheme, letting the hot and cold
//! space temperatures drift with the gas mass exchanged between the spaces.
//! The integration is a strictly sequential fold: every sample depends on
//! the temperatures drifted at the previous one.

use crate::core::error::{CycleError, CycleResult};
use crate::core::parameters::CycleParameters;
use crate::core::traits::TableData;
use crate::cycle::schmidt::CycleTable;
use ndarray::Array2;

/// One row of the adiabatic analysis. Angle, volume and the first two
/// phase pressures are carried over verbatim from the Schmidt table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdiabaticSample {
    pub angle_deg: f64,          // [deg]
    pub angle_rad: f64,          // [rad]
    pub compression_volume: f64, // [mm³]
    pub expansion_volume: f64,   // [mm³]
    pub total_volume: f64,       // [dm³]
    pub pressure_phase1: f64,    // [N/mm²] - isothermal reference
    pub pressure_phase2: f64,    // [N/mm²] - isothermal reference
    pub pressure: f64,           // [N/mm²] - adiabatic-corrected
    pub work_compression: f64,   // [Nm]
    pub work_expansion: f64,     // [Nm]
    pub work_net: f64,           // [Nm]
    pub piston_force: f64,       // [N]
}

/// Result table of an adiabatic analysis: 37 rows aligned to the Schmidt
/// table, sample 0 left zeroed (no previous-sample delta exists).
#[derive(Debug, Clone, PartialEq)]
pub struct AdiabaticTable {
    samples: Vec<AdiabaticSample>,
}

const HEADERS: [&str; 12] = [
    "angle [deg]",
    "angle [rad]",
    "V_c [mm3]",
    "V_e [mm3]",
    "V_t [dm3]",
    "P_1 [N/mm2]",
    "P_2 [N/mm2]",
    "P [N/mm2]",
    "dWc [Nm]",
    "dWe [Nm]",
    "dW [Nm]",
    "F [N]",
];

impl AdiabaticTable {
    pub fn samples(&self) -> &[AdiabaticSample] {
        &self.samples
    }

    /// Net mechanical work over the full cycle. [Nm]
    pub fn cycle_work(&self) -> f64 {
        self.samples.iter().map(|s| s.work_net).sum()
    }
}

impl TableData for AdiabaticTable {
    fn headers(&self) -> &'static [&'static str] {
        &HEADERS
    }

    fn num_rows(&self) -> usize {
        self.samples.len()
    }

    fn to_array(&self) -> Array2<f64> {
        let mut data = Array2::zeros((self.samples.len(), HEADERS.len()));
        for (i, s) in self.samples.iter().enumerate() {
            data[[i, 0]] = s.angle_deg;
            data[[i, 1]] = s.angle_rad;
            data[[i, 2]] = s.compression_volume;
            data[[i, 3]] = s.expansion_volume;
            data[[i, 4]] = s.total_volume;
            data[[i, 5]] = s.pressure_phase1;
            data[[i, 6]] = s.pressure_phase2;
            data[[i, 7]] = s.pressure;
            data[[i, 8]] = s.work_compression;
            data[[i, 9]] = s.work_expansion;
            data[[i, 10]] = s.work_net;
            data[[i, 11]] = s.piston_force;
        }
        data
    }
}

/// Temperature state carried between integration steps. [K]
#[derive(Debug, Clone, Copy)]
struct DriftState {
    t_hot: f64,
    t_cold: f64,
}

/// Performs the adiabatic correction over an existing Schmidt table.
///
/// The volume and pressure columns of `schmidt` are reused directly, not
/// recomputed. Degenerate configurations abort with a domain error and no
/// table is returned.
pub fn adiabatic_analysis(
    params: &CycleParameters,
    schmidt: &CycleTable,
) -> CycleResult<AdiabaticTable> {
    params.validate()?;

    let mut samples: Vec<AdiabaticSample> = schmidt
        .samples()
        .iter()
        .map(|s| AdiabaticSample {
            angle_deg: s.angle_deg,
            angle_rad: s.angle_rad,
            compression_volume: s.compression_volume,
            expansion_volume: s.expansion_volume,
            total_volume: s.total_volume,
            pressure_phase1: s.pressure_phase1,
            pressure_phase2: s.pressure_phase2,
            ..AdiabaticSample::default()
        })
        .collect();

    let mut state = DriftState {
        t_hot: params.heater_kelvin(),
        t_cold: params.cooler_kelvin(),
    };

    for i in 1..samples.len() {
        let prev = samples[i - 1];
        let (step, next_state) = integrate_step(params, &samples[i], &prev, state)?;
        let s = &mut samples[i];
        s.pressure = step.pressure;
        s.work_compression = step.work_compression;
        s.work_expansion = step.work_expansion;
        s.work_net = step.work_net;
        s.piston_force = step.piston_force;
        state = next_state;
    }

    Ok(AdiabaticTable { samples })
}

/// Output of a single Euler step.
struct StepOutput {
    pressure: f64,
    work_compression: f64,
    work_expansion: f64,
    work_net: f64,
    piston_force: f64,
}

/// Advances the integration by one 10° step, returning the step output and
/// the drifted temperature state for the next sample.
fn integrate_step(
    params: &CycleParameters,
    sample: &AdiabaticSample,
    prev: &AdiabaticSample,
    state: DriftState,
) -> CycleResult<(StepOutput, DriftState)> {
    let r = params.gas_constant;
    let t_hot = state.t_hot;
    let t_cold = state.t_cold;
    let v_c = sample.compression_volume;
    let v_e = sample.expansion_volume;
    let dv_c = v_c - prev.compression_volume;
    let dv_e = v_e - prev.expansion_volume;

    // Effective regenerator temperature, recomputed from the drifted hot and
    // cold temperatures. The expression is preserved from the validated
    // reference model even though it is not the standard log-mean form.
    let spread = t_hot - t_cold;
    if spread <= 0.0 {
        return Err(CycleError::NumericalDomain(format!(
            "temperature spread collapsed at {} deg: T_hot = {} K, T_cold = {} K",
            sample.angle_deg, t_hot, t_cold
        )));
    }
    let log_spread = spread.ln();
    if log_spread == 0.0 {
        return Err(CycleError::NumericalDomain(format!(
            "regenerator temperature is undefined at {} deg: ln({}) = 0",
            sample.angle_deg, spread
        )));
    }
    let t_regen = spread / log_spread;

    if v_c <= 0.0 || v_e <= 0.0 {
        return Err(CycleError::NumericalDomain(format!(
            "non-positive working volume at {} deg: V_c = {} mm3, V_e = {} mm3",
            sample.angle_deg, v_c, v_e
        )));
    }

    let denominator = v_e / t_hot + params.regenerator_volume / t_regen + v_c / t_cold;
    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(CycleError::NumericalDomain(format!(
            "pressure denominator is {} at {} deg",
            denominator, sample.angle_deg
        )));
    }

    let p = params.mass * r * 1000.0 / denominator;
    let dp = p * (dv_c / t_cold + dv_e / t_hot) / denominator;

    // Working-gas mass held in each space. The cooler and heater dead
    // volumes are neglected, so their masses stay zero and their deltas
    // (m * dp / p, same scaling as the regenerator) vanish with them.
    let m_c = p * v_c / (r * t_cold) / 1000.0;
    let m_e = p * v_e / (r * t_hot) / 1000.0;
    if m_c == 0.0 || m_e == 0.0 {
        return Err(CycleError::NumericalDomain(format!(
            "working space holds no gas at {} deg",
            sample.angle_deg
        )));
    }

    let dm_c = (p * dv_c + v_c * dp) / (r * t_cold) / 1000.0;
    let dm_e = (p * dv_e + v_e * dp) / (r * t_hot) / 1000.0;

    let dt_cold = t_cold * (dp / p + dv_c / v_c - dm_c / m_c);
    let dt_hot = t_hot * (dp / p + dv_e / v_e - dm_e / m_e);
    let next_state = DriftState {
        t_hot: t_hot + dt_hot,
        t_cold: t_cold + dt_cold,
    };
    if !next_state.t_hot.is_finite() || !next_state.t_cold.is_finite() {
        return Err(CycleError::NumericalDomain(format!(
            "temperature drift diverged at {} deg",
            sample.angle_deg
        )));
    }

    let work_compression = p * dv_c / 1000.0;
    let work_expansion = p * dv_e / 1000.0;
    let output = StepOutput {
        pressure: p,
        work_compression,
        work_expansion,
        work_net: work_compression + work_expansion,
        piston_force: p * params.piston_rod_area,
    };
    Ok((output, next_state))
}
