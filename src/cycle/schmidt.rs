//! Isothermal ("Schmidt") cycle analysis.
//!
//! The classical closed-form ideal-gas model of a Stirling cycle with
//! sinusoidal volume variation. The table is built by a pipeline of three
//! pure passes: base volumes and pressure, phase-shifted pressure
//! reconstruction, and incremental work / piston forces. The ordering is
//! load-bearing: the phase pass needs every `pressure_phase1` value, the
//! work pass needs `pressure_phase1` and `pressure_phase2`.

use crate::core::error::{CycleError, CycleResult};
use crate::core::parameters::CycleParameters;
use crate::core::traits::TableData;
use crate::cycle::{NUM_SAMPLES, STEP_DEG};
use ndarray::Array2;

/// Rotation offset, in samples, between `pressure_phase1` and
/// `pressure_phase2` (and between phase 3 and phase 4): 190° on the 10° grid,
/// a near-180° shift to the other side of the piston.
pub const PHASE2_OFFSET: usize = 19;

/// Rotation offset, in samples, between `pressure_phase1` and
/// `pressure_phase3`: 80° on the 10° grid.
pub const PHASE3_OFFSET: usize = 8;

/// One row of the Schmidt analysis, at a single crank angle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleSample {
    pub angle_deg: f64,           // [deg]
    pub angle_rad: f64,           // [rad]
    pub compression_volume: f64,  // [mm³]
    pub expansion_volume: f64,    // [mm³]
    pub total_volume: f64,        // [dm³] - reporting convenience only
    pub sum_vol_over_temp: f64,   // [mm³/K]
    pub pressure_phase1: f64,     // [N/mm²]
    pub pressure_phase2: f64,     // [N/mm²]
    pub pressure_phase3: f64,     // [N/mm²]
    pub pressure_phase4: f64,     // [N/mm²]
    pub work_compression: f64,    // [Nm] - incremental, zero at sample 0
    pub work_expansion: f64,      // [Nm]
    pub work_net: f64,            // [Nm]
    pub force_outer: f64,         // [N]
    pub force_inner: f64,         // [N]
    pub force_net: f64,           // [N]
}

/// Result table of a Schmidt analysis: 37 rows in increasing-angle order.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleTable {
    samples: Vec<CycleSample>,
}

const HEADERS: [&str; 16] = [
    "angle [deg]",
    "angle [rad]",
    "V_c [mm3]",
    "V_e [mm3]",
    "V_t [dm3]",
    "sum V/T [mm3/K]",
    "P_1 [N/mm2]",
    "P_2 [N/mm2]",
    "W_1 [Nm]",
    "W_2 [Nm]",
    "W_R [Nm]",
    "F_O [N]",
    "F_U [N]",
    "F_R [N]",
    "P_3 [N/mm2]",
    "P_4 [N/mm2]",
];

impl CycleTable {
    pub fn samples(&self) -> &[CycleSample] {
        &self.samples
    }

    /// Net mechanical work over the full cycle. [Nm]
    pub fn cycle_work(&self) -> f64 {
        self.samples.iter().map(|s| s.work_net).sum()
    }
}

impl TableData for CycleTable {
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
            data[[i, 5]] = s.sum_vol_over_temp;
            data[[i, 6]] = s.pressure_phase1;
            data[[i, 7]] = s.pressure_phase2;
            data[[i, 8]] = s.work_compression;
            data[[i, 9]] = s.work_expansion;
            data[[i, 10]] = s.work_net;
            data[[i, 11]] = s.force_outer;
            data[[i, 12]] = s.force_inner;
            data[[i, 13]] = s.force_net;
            data[[i, 14]] = s.pressure_phase3;
            data[[i, 15]] = s.pressure_phase4;
        }
        data
    }
}

/// Performs a Schmidt analysis and returns the 37-row result table.
///
/// Fully deterministic: two calls with identical parameters produce
/// bit-identical tables.
pub fn schmidt_analysis(params: &CycleParameters) -> CycleResult<CycleTable> {
    params.validate()?;
    let samples = base_pass(params)?;
    let samples = phase_pass(samples);
    let samples = work_force_pass(samples, params);
    Ok(CycleTable { samples })
}

/// First pass: volumes, `sum V/T` and the base pressure at every angle.
fn base_pass(params: &CycleParameters) -> CycleResult<Vec<CycleSample>> {
    let t_hot = params.heater_kelvin();
    let t_regen = params.regenerator_kelvin();
    let t_cold = params.cooler_kelvin();
    let beta_rad = params.phase_angle_rad();

    let mut samples = Vec::with_capacity(NUM_SAMPLES);
    for i in 0..NUM_SAMPLES {
        let angle_deg = i as f64 * STEP_DEG;
        let angle_rad = angle_deg.to_radians();
        let compression_volume = params.average_volume + angle_rad.sin() * params.swept_volume / 2.0;
        let expansion_volume =
            params.average_volume + (angle_rad + beta_rad).sin() * params.swept_volume / 2.0;
        let total_volume = (compression_volume + expansion_volume) / 1.0e6; // mm³ -> dm³
        let sum_vol_over_temp = compression_volume / t_cold
            + params.regenerator_volume / t_regen
            + expansion_volume / t_hot;
        if sum_vol_over_temp <= 0.0 || !sum_vol_over_temp.is_finite() {
            return Err(CycleError::NumericalDomain(format!(
                "sum V/T is {} at {} deg, cannot evaluate pressure",
                sum_vol_over_temp, angle_deg
            )));
        }
        let pressure_phase1 = params.mass * params.gas_constant * 1000.0 / sum_vol_over_temp;

        samples.push(CycleSample {
            angle_deg,
            angle_rad,
            compression_volume,
            expansion_volume,
            total_volume,
            sum_vol_over_temp,
            pressure_phase1,
            ..CycleSample::default()
        });
    }
    Ok(samples)
}

/// Second pass: reconstructs the phase-shifted pressures as modular
/// rotations of the base pressure over the 37-sample grid.
fn phase_pass(mut samples: Vec<CycleSample>) -> Vec<CycleSample> {
    let n = samples.len();
    let phase1: Vec<f64> = samples.iter().map(|s| s.pressure_phase1).collect();
    for (i, s) in samples.iter_mut().enumerate() {
        s.pressure_phase2 = phase1[(i + PHASE2_OFFSET) % n];
        s.pressure_phase3 = phase1[(i + PHASE3_OFFSET) % n];
    }
    let phase3: Vec<f64> = samples.iter().map(|s| s.pressure_phase3).collect();
    for (i, s) in samples.iter_mut().enumerate() {
        s.pressure_phase4 = phase3[(i + PHASE2_OFFSET) % n];
    }
    samples
}

/// Third pass: incremental work and piston forces for samples 1..36.
/// Sample 0 has no previous sample and keeps its zeroed columns.
fn work_force_pass(mut samples: Vec<CycleSample>, params: &CycleParameters) -> Vec<CycleSample> {
    for i in 1..samples.len() {
        let prev = samples[i - 1];
        let s = &mut samples[i];
        s.work_compression =
            s.pressure_phase1 * (s.compression_volume - prev.compression_volume) / 1000.0;
        s.work_expansion =
            s.pressure_phase1 * (s.expansion_volume - prev.expansion_volume) / 1000.0;
        s.work_net = s.work_compression + s.work_expansion;
        s.force_outer = s.pressure_phase1 * params.cylinder_bore_area;
        // the rod cross-section reduces the effective inner area
        s.force_inner = s.pressure_phase2 * (params.cylinder_bore_area - params.piston_rod_area);
        s.force_net = s.force_outer - s.force_inner;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CycleParameters {
        CycleParameters::new(
            287.0, 0.001, 650.0, 337.5, 25.0, 100_000.0, 10_000.0, 150_000.0, 500.0, 2000.0, 90.0,
        )
        .unwrap()
    }

    #[test]
    fn produces_37_rows_on_the_10_degree_grid() {
        let table = schmidt_analysis(&reference()).unwrap();
        assert_eq!(table.samples().len(), 37);
        for (i, s) in table.samples().iter().enumerate() {
            assert_eq!(s.angle_deg, i as f64 * 10.0);
            assert_eq!(s.angle_rad, s.angle_deg.to_radians());
        }
        assert_eq!(table.samples()[36].angle_deg, 360.0);
    }

    #[test]
    fn phase_pressures_follow_the_rotation_laws() {
        let table = schmidt_analysis(&reference()).unwrap();
        let s = table.samples();
        for i in 0..37 {
            assert_eq!(s[i].pressure_phase2, s[(i + 19) % 37].pressure_phase1);
            assert_eq!(s[i].pressure_phase3, s[(i + 8) % 37].pressure_phase1);
            assert_eq!(s[i].pressure_phase4, s[(i + 19) % 37].pressure_phase3);
        }
    }

    #[test]
    fn first_sample_has_zero_work_and_force() {
        let table = schmidt_analysis(&reference()).unwrap();
        let first = table.samples()[0];
        assert_eq!(first.work_compression, 0.0);
        assert_eq!(first.work_expansion, 0.0);
        assert_eq!(first.work_net, 0.0);
        assert_eq!(first.force_outer, 0.0);
        assert_eq!(first.force_inner, 0.0);
        assert_eq!(first.force_net, 0.0);
    }

    #[test]
    fn zero_swept_volume_collapses_both_spaces_to_the_average() {
        let mut params = reference();
        params.swept_volume = 0.0;
        let table = schmidt_analysis(&params).unwrap();
        for s in table.samples() {
            assert_eq!(s.compression_volume, 150_000.0);
            assert_eq!(s.expansion_volume, 150_000.0);
        }
    }

    #[test]
    fn zero_phase_angle_makes_the_spaces_track_each_other() {
        let mut params = reference();
        params.phase_angle = 0.0;
        let table = schmidt_analysis(&params).unwrap();
        for s in table.samples() {
            assert_eq!(s.compression_volume, s.expansion_volume);
        }
    }

    #[test]
    fn reference_scenario_values() {
        let params = reference();
        let table = schmidt_analysis(&params).unwrap();
        let s = table.samples();
        assert!(s[0].pressure_phase1 > 0.0);

        // at 0 deg: V_c = avg, V_e = avg + sin(90 deg) * swept / 2
        let v_c = 150_000.0;
        let v_e = 150_000.0 + 100_000.0 / 2.0;
        let expected_total = (v_c + v_e) / 1.0e6;
        assert!((s[0].total_volume - expected_total).abs() < 1e-12);

        assert_eq!(s[1].work_net, s[1].work_compression + s[1].work_expansion);
    }

    #[test]
    fn forces_use_the_bore_and_annular_areas() {
        let params = reference();
        let table = schmidt_analysis(&params).unwrap();
        for s in &table.samples()[1..] {
            assert_eq!(s.force_outer, s.pressure_phase1 * 2000.0);
            assert_eq!(s.force_inner, s.pressure_phase2 * (2000.0 - 500.0));
            assert_eq!(s.force_net, s.force_outer - s.force_inner);
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let params = reference();
        let a = schmidt_analysis(&params).unwrap();
        let b = schmidt_analysis(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn positional_layout_is_stable() {
        let table = schmidt_analysis(&reference()).unwrap();
        let array = table.to_array();
        assert_eq!(array.dim(), (37, 16));
        let s = table.samples();
        assert_eq!(array[[5, 0]], s[5].angle_deg);
        assert_eq!(array[[5, 6]], s[5].pressure_phase1);
        assert_eq!(array[[5, 7]], s[5].pressure_phase2);
        assert_eq!(array[[5, 14]], s[5].pressure_phase3);
        assert_eq!(array[[5, 15]], s[5].pressure_phase4);
    }

    #[test]
    fn rejects_invalid_parameters_before_computing() {
        let mut params = reference();
        params.mass = -1.0;
        match schmidt_analysis(&params) {
            Err(CycleError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_volume_configuration_is_a_domain_error() {
        // all volumes zero makes sum V/T vanish at every angle
        let mut params = reference();
        params.swept_volume = 0.0;
        params.regenerator_volume = 0.0;
        params.average_volume = 0.0;
        match schmidt_analysis(&params) {
            Err(CycleError::NumericalDomain(_)) => {}
            other => panic!("expected NumericalDomain, got {:?}", other),
        }
    }
}
