//! JSON parameter records.
//!
//! A flat, typed record mirroring `CycleParameters` field for field. The
//! record is validated on conversion, so a file that parses but violates a
//! physical invariant is still rejected before any engine runs.

use crate::core::error::CycleResult;
use crate::core::parameters::CycleParameters;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonParameters {
    pub gas_constant: f64,       // [J/(kg.K)]
    pub mass: f64,               // [kg]
    pub heater_temp: f64,        // [°C]
    pub regenerator_temp: f64,   // [°C]
    pub cooler_temp: f64,        // [°C]
    pub swept_volume: f64,       // [mm³]
    pub regenerator_volume: f64, // [mm³]
    pub average_volume: f64,     // [mm³]
    pub piston_rod_area: f64,    // [mm²]
    pub cylinder_bore_area: f64, // [mm²]
    pub phase_angle: f64,        // [deg]
}

impl JsonParameters {
    pub fn into_parameters(self) -> CycleResult<CycleParameters> {
        CycleParameters::new(
            self.gas_constant,
            self.mass,
            self.heater_temp,
            self.regenerator_temp,
            self.cooler_temp,
            self.swept_volume,
            self.regenerator_volume,
            self.average_volume,
            self.piston_rod_area,
            self.cylinder_bore_area,
            self.phase_angle,
        )
    }

    pub fn from_parameters(params: &CycleParameters) -> JsonParameters {
        JsonParameters {
            gas_constant: params.gas_constant,
            mass: params.mass,
            heater_temp: params.heater_temp,
            regenerator_temp: params.regenerator_temp,
            cooler_temp: params.cooler_temp,
            swept_volume: params.swept_volume,
            regenerator_volume: params.regenerator_volume,
            average_volume: params.average_volume,
            piston_rod_area: params.piston_rod_area,
            cylinder_bore_area: params.cylinder_bore_area,
            phase_angle: params.phase_angle,
        }
    }
}

/// Reads and validates a parameter record from a `.json` file.
pub fn read_parameters(file_name: &str) -> CycleResult<CycleParameters> {
    let contents = std::fs::read_to_string(file_name)?;
    parse_parameters(&contents)
}

/// Parses and validates a parameter record from a JSON string.
pub fn parse_parameters(contents: &str) -> CycleResult<CycleParameters> {
    let record: JsonParameters = serde_json::from_str(contents)?;
    record.into_parameters()
}

/// Writes a parameter record to a `.json` file, pretty-printed.
pub fn write_parameters(file_name: &str, params: &CycleParameters) -> CycleResult<()> {
    let record = JsonParameters::from_parameters(params);
    let contents = serde_json::to_string_pretty(&record)?;
    std::fs::write(file_name, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CycleError;

    fn reference() -> CycleParameters {
        CycleParameters::new(
            287.0, 0.001, 650.0, 337.5, 25.0, 100_000.0, 10_000.0, 150_000.0, 500.0, 2000.0, 90.0,
        )
        .unwrap()
    }

    #[test]
    fn record_round_trips_through_json() {
        let params = reference();
        let record = JsonParameters::from_parameters(&params);
        let contents = serde_json::to_string(&record).unwrap();
        let restored = parse_parameters(&contents).unwrap();
        assert_eq!(restored, params);
    }

    #[test]
    fn parses_a_literal_record() {
        let contents = r#"{
            "gas_constant": 287.0,
            "mass": 0.001,
            "heater_temp": 650.0,
            "regenerator_temp": 337.5,
            "cooler_temp": 25.0,
            "swept_volume": 100000.0,
            "regenerator_volume": 10000.0,
            "average_volume": 150000.0,
            "piston_rod_area": 500.0,
            "cylinder_bore_area": 2000.0,
            "phase_angle": 90.0
        }"#;
        let params = parse_parameters(contents).unwrap();
        assert_eq!(params, reference());
    }

    #[test]
    fn missing_field_is_a_json_error() {
        match parse_parameters(r#"{"gas_constant": 287.0}"#) {
            Err(CycleError::Json(_)) => {}
            other => panic!("expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn parsed_record_is_still_validated() {
        let contents = r#"{
            "gas_constant": 287.0,
            "mass": -0.001,
            "heater_temp": 650.0,
            "regenerator_temp": 337.5,
            "cooler_temp": 25.0,
            "swept_volume": 100000.0,
            "regenerator_volume": 10000.0,
            "average_volume": 150000.0,
            "piston_rod_area": 500.0,
            "cylinder_bore_area": 2000.0,
            "phase_angle": 90.0
        }"#;
        match parse_parameters(contents) {
            Err(CycleError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }
}
