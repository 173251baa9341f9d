//! # stirling_cycle_simulator
//!
//! The `stirling_cycle_simulator` crate computes the ideal-gas thermodynamic
//! cycle of a Stirling engine from a small set of geometric and thermal
//! parameters. Two analytical models are provided: the closed-form isothermal
//! Schmidt analysis and a first-order adiabatic correction that integrates
//! gas mass and temperature drift around the cycle.
//!
//! Both engines are pure, deterministic functions over a fixed 37-sample
//! crank-angle grid (0°..360° in 10° steps). They hold no state between
//! calls and are safe to call concurrently with different parameter sets.
//!
//! ```no_run
//! use stirling_cycle_simulator as stirling;
//!
//! let params = stirling::io::json_reader::read_parameters("stirling.json")?;
//! let schmidt = stirling::schmidt_analysis(&params)?;
//! let adiabatic = stirling::adiabatic_analysis(&params, &schmidt)?;
//! println!("net cycle work: {} Nm", schmidt.cycle_work());
//! # Ok::<(), stirling::CycleError>(())
//! ```

mod core;
mod cycle;
pub mod io;
pub mod plot;

// Re-exporting
pub use crate::core::error::{CycleError, CycleResult};
pub use crate::core::parameters::CycleParameters;
pub use crate::core::traits::TableData;
pub use crate::cycle::adiabatic::{adiabatic_analysis, AdiabaticSample, AdiabaticTable};
pub use crate::cycle::schmidt::{schmidt_analysis, CycleSample, CycleTable};
pub use crate::cycle::{NUM_SAMPLES, STEP_DEG};
