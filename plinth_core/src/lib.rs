//! # plinth_core - Isolated Footing Design Engine
//!
//! `plinth_core` is the computational heart of Plinth, providing reinforced
//! concrete footing design per IS 456:2000 with a clean, LLM-friendly API.
//! All inputs and outputs are JSON-serializable, making it ideal for
//! integration with form front ends, AI assistants, or scripted callers.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Code-Traceable**: Results carry the governing IS 456 clause data
//!
//! ## Quick Start
//!
//! ```rust
//! use plinth_core::calculations::footing::{calculate, FootingInput, FootingShape};
//! use plinth_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = FootingInput {
//!     label: "F-1".to_string(),
//!     load_kn: 1000.0,
//!     sbc_kn_m2: 200.0,
//!     concrete: ConcreteGrade::M25,
//!     steel: SteelGrade::Fe415,
//!     column_breadth_mm: 400.0,
//!     column_depth_mm: 400.0,
//!     cover_mm: 50.0,
//!     shape: FootingShape::Square,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Footing: {:.1} m x {:.1} m, d = {:.0} mm",
//!     result.footing_length_m, result.footing_breadth_m, result.effective_depth_mm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The footing design engine
//! - [`materials`] - Concrete and steel grade definitions
//! - [`is456`] - IS 456:2000 code tables and rounding rules
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`report`] - Plain-text design report assembly

pub mod calculations;
pub mod errors;
pub mod is456;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::footing::{calculate, FootingInput, FootingResult, FootingShape};
pub use errors::{CalcError, CalcResult};
pub use materials::{ConcreteGrade, SteelGrade};
pub use report::{design_report, DesignReport};
