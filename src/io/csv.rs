//! Flat key/value CSV parameter records and result-table export.
//!
//! Parameter files are `name;value` lines, one scalar per line, in the same
//! fixed order as the `CycleParameters` fields. Result tables are written
//! semicolon-delimited with a header row, one row per sampled crank angle.

use crate::core::error::{CycleError, CycleResult};
use crate::core::parameters::CycleParameters;
use crate::core::traits::TableData;
use std::io::Write;

const PARAMETER_KEYS: [&str; 11] = [
    "gas_constant",
    "mass",
    "heater_temp",
    "regenerator_temp",
    "cooler_temp",
    "swept_volume",
    "regenerator_volume",
    "average_volume",
    "piston_rod_area",
    "cylinder_bore_area",
    "phase_angle",
];

/// Reads a validated parameter record from a `key;value` CSV file.
pub fn read_parameters_csv(file_name: &str) -> CycleResult<CycleParameters> {
    let contents = std::fs::read_to_string(file_name)?;
    parse_parameters_csv(&contents)
}

/// Parses a `key;value` record. Rows must follow the fixed key order.
pub fn parse_parameters_csv(contents: &str) -> CycleResult<CycleParameters> {
    let mut values = [0.0f64; 11];
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());
    for (key, slot) in PARAMETER_KEYS.iter().zip(values.iter_mut()) {
        let line = lines.next().ok_or_else(|| {
            CycleError::InvalidParameter(format!("missing `{}` row in parameter file", key))
        })?;
        let mut fields = line.split(';');
        let name = fields.next().unwrap_or("").trim();
        if name != *key {
            return Err(CycleError::InvalidParameter(format!(
                "expected `{}` row, found `{}`",
                key, name
            )));
        }
        let raw = fields.next().ok_or_else(|| {
            CycleError::InvalidParameter(format!("`{}` row has no value field", key))
        })?;
        *slot = raw.trim().parse().map_err(|_| {
            CycleError::InvalidParameter(format!("`{}` is not a number: {}", key, raw.trim()))
        })?;
    }
    CycleParameters::new(
        values[0], values[1], values[2], values[3], values[4], values[5], values[6], values[7],
        values[8], values[9], values[10],
    )
}

/// Writes a parameter record as `key;value` rows.
pub fn write_parameters_csv(file_name: &str, params: &CycleParameters) -> CycleResult<()> {
    std::fs::write(file_name, format_parameters_csv(params))?;
    Ok(())
}

pub fn format_parameters_csv(params: &CycleParameters) -> String {
    let values = [
        params.gas_constant,
        params.mass,
        params.heater_temp,
        params.regenerator_temp,
        params.cooler_temp,
        params.swept_volume,
        params.regenerator_volume,
        params.average_volume,
        params.piston_rod_area,
        params.cylinder_bore_area,
        params.phase_angle,
    ];
    PARAMETER_KEYS
        .iter()
        .zip(values.iter())
        .map(|(key, value)| format!("{};{}\n", key, value))
        .collect()
}

/// Writes a result table semicolon-delimited, header row first.
pub fn write_results_csv<T: TableData>(file_name: &str, table: &T) -> CycleResult<()> {
    let mut file = std::fs::File::create(file_name)?;
    write!(file, "{}", format_results_csv(table))?;
    Ok(())
}

pub fn format_results_csv<T: TableData>(table: &T) -> String {
    let mut out = String::new();
    out.push_str(&table.headers().join(";"));
    out.push('\n');
    let data = table.to_array();
    for row in data.genrows() {
        let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&fields.join(";"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::schmidt::schmidt_analysis;

    fn reference() -> CycleParameters {
        CycleParameters::new(
            287.0, 0.001, 650.0, 337.5, 25.0, 100_000.0, 10_000.0, 150_000.0, 500.0, 2000.0, 90.0,
        )
        .unwrap()
    }

    #[test]
    fn parameters_round_trip_through_csv() {
        let params = reference();
        let contents = format_parameters_csv(&params);
        let restored = parse_parameters_csv(&contents).unwrap();
        assert_eq!(restored, params);
    }

    #[test]
    fn rejects_missing_rows() {
        assert!(parse_parameters_csv("gas_constant;287.0\n").is_err());
    }

    #[test]
    fn rejects_misordered_rows() {
        let contents = format_parameters_csv(&reference()).replace("gas_constant", "mass");
        assert!(parse_parameters_csv(&contents).is_err());
    }

    #[test]
    fn rejects_non_numeric_value() {
        let contents = format_parameters_csv(&reference()).replace("287", "fast");
        assert!(parse_parameters_csv(&contents).is_err());
    }

    #[test]
    fn result_export_has_header_and_one_row_per_sample() {
        let table = schmidt_analysis(&reference()).unwrap();
        let contents = format_results_csv(&table);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 38);
        assert!(lines[0].starts_with("angle [deg];angle [rad];"));
        assert_eq!(lines[0].split(';').count(), 16);
        assert_eq!(lines[1].split(';').count(), 16);
        assert!(lines[1].starts_with("0;0;"));
    }
}
