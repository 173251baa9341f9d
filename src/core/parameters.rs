use crate::core::error::{CycleError, CycleResult};
use ansi_term::Style;

/// Celsius to Kelvin offset
pub const KELVIN_OFFSET: f64 = 273.15;

/// Input record of a cycle analysis run. Immutable once validated.
///
/// The unit system is the mixed mm/°C/N convention of the machine drawings
/// this model was built from: volumes in `mm³`, areas in `mm²`, temperatures
/// in `°C`. The engines convert temperatures to Kelvin internally.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleParameters {
    pub gas_constant: f64,       // [J/(kg.K)]
    pub mass: f64,               // [kg] - working gas mass
    pub heater_temp: f64,        // [°C]
    pub regenerator_temp: f64,   // [°C]
    pub cooler_temp: f64,        // [°C]
    pub swept_volume: f64,       // [mm³]
    pub regenerator_volume: f64, // [mm³]
    pub average_volume: f64,     // [mm³]
    pub piston_rod_area: f64,    // [mm²]
    pub cylinder_bore_area: f64, // [mm²]
    pub phase_angle: f64,        // [deg] - expansion-space volume lead
}

impl CycleParameters {
    /// Creates a validated parameter record. Inputs units must be:
    /// `mm³`, `mm²`, `°C` and `deg`.
    pub fn new(
        gas_constant: f64,
        mass: f64,
        heater_temp: f64,
        regenerator_temp: f64,
        cooler_temp: f64,
        swept_volume: f64,
        regenerator_volume: f64,
        average_volume: f64,
        piston_rod_area: f64,
        cylinder_bore_area: f64,
        phase_angle: f64,
    ) -> CycleResult<CycleParameters> {
        let params = CycleParameters {
            gas_constant,
            mass,
            heater_temp,
            regenerator_temp,
            cooler_temp,
            swept_volume,
            regenerator_volume,
            average_volume,
            piston_rod_area,
            cylinder_bore_area,
            phase_angle,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every invariant of the record: all fields finite, sizes
    /// non-negative and every temperature above absolute zero.
    pub fn validate(&self) -> CycleResult<()> {
        let fields = [
            ("gas_constant", self.gas_constant),
            ("mass", self.mass),
            ("heater_temp", self.heater_temp),
            ("regenerator_temp", self.regenerator_temp),
            ("cooler_temp", self.cooler_temp),
            ("swept_volume", self.swept_volume),
            ("regenerator_volume", self.regenerator_volume),
            ("average_volume", self.average_volume),
            ("piston_rod_area", self.piston_rod_area),
            ("cylinder_bore_area", self.cylinder_bore_area),
            ("phase_angle", self.phase_angle),
        ];
        for (name, value) in fields.iter() {
            if !value.is_finite() {
                return Err(CycleError::InvalidParameter(format!(
                    "`{}` must be a finite number, got {}",
                    name, value
                )));
            }
        }

        let sizes = [
            ("gas_constant", self.gas_constant),
            ("mass", self.mass),
            ("swept_volume", self.swept_volume),
            ("regenerator_volume", self.regenerator_volume),
            ("average_volume", self.average_volume),
            ("piston_rod_area", self.piston_rod_area),
            ("cylinder_bore_area", self.cylinder_bore_area),
        ];
        for (name, value) in sizes.iter() {
            if *value < 0.0 {
                return Err(CycleError::InvalidParameter(format!(
                    "`{}` cannot be lower than zero, got {}",
                    name, value
                )));
            }
        }

        let temperatures = [
            ("heater_temp", self.heater_kelvin()),
            ("regenerator_temp", self.regenerator_kelvin()),
            ("cooler_temp", self.cooler_kelvin()),
        ];
        for (name, kelvin) in temperatures.iter() {
            if *kelvin <= 0.0 {
                return Err(CycleError::InvalidParameter(format!(
                    "`{}` must stay above absolute zero, got {} K",
                    name, kelvin
                )));
            }
        }
        Ok(())
    }

    pub fn heater_kelvin(&self) -> f64 {
        self.heater_temp + KELVIN_OFFSET
    }

    pub fn regenerator_kelvin(&self) -> f64 {
        self.regenerator_temp + KELVIN_OFFSET
    }

    pub fn cooler_kelvin(&self) -> f64 {
        self.cooler_temp + KELVIN_OFFSET
    }

    pub fn phase_angle_rad(&self) -> f64 {
        self.phase_angle.to_radians()
    }
}

impl std::fmt::Display for CycleParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}
        gas constant: {} [J/(kg.K)] \t mass: {} [kg]
        {}
        heater: {:.1} [°C] \t regenerator: {:.1} [°C] \t cooler: {:.1} [°C]
        {}
        swept: {:.0} [mm³] \t regenerator: {:.0} [mm³] \t average: {:.0} [mm³]
        {}
        piston rod: {:.0} [mm²] \t cylinder bore: {:.0} [mm²]
        phase angle: {:.1} [deg]",
            Style::new().bold().paint("Cycle parameters"),
            self.gas_constant,
            self.mass,
            Style::new().underline().paint("   Temperature    "),
            self.heater_temp,
            self.regenerator_temp,
            self.cooler_temp,
            Style::new().underline().paint("      Volume      "),
            self.swept_volume,
            self.regenerator_volume,
            self.average_volume,
            Style::new().underline().paint("       Area       "),
            self.piston_rod_area,
            self.cylinder_bore_area,
            self.phase_angle,
        )
    }
}
