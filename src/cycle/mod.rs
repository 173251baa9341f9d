pub mod adiabatic;
pub mod schmidt;

/// Number of sampled crank angles per cycle: 0°..360° inclusive, 10° step.
/// Both 0° and 360° are retained as explicit rows even though they are the
/// same physical crank position.
pub const NUM_SAMPLES: usize = 37;

/// Angular distance between two consecutive samples. [deg]
pub const STEP_DEG: f64 = 10.0;
