//! # Structural Calculations
//!
//! This module contains the calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`footing`] - Isolated column footing design (IS 456:2000)

pub mod footing;

// Re-export commonly used types
pub use footing::{FootingInput, FootingResult, FootingShape};
