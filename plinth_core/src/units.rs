//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - IS 456 design works in a fixed, small set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Plinth uses the mixed SI convention of Indian concrete design:
//! - Length: metres (m) for plan dimensions, millimetres (mm) for sections
//! - Force: kilonewtons (kN), newtons (N)
//! - Moment: kilonewton-metres (kNm), newton-millimetres (Nmm)
//! - Stress: N/mm², pressure: kN/m² (carried as raw f64 in results)
//!
//! ## Example
//!
//! ```rust
//! use plinth_core::units::{Metres, Millimetres};
//!
//! let breadth = Millimetres(400.0);
//! let breadth_m: Metres = breadth.into();
//! assert_eq!(breadth_m.0, 0.4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Metres);
impl_arithmetic!(Millimetres);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(KilonewtonMetres);
impl_arithmetic!(NewtonMillimetres);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimetres_to_metres() {
        let mm = Millimetres(400.0);
        let m: Metres = mm.into();
        assert_eq!(m.0, 0.4);
    }

    #[test]
    fn test_kilonewtons_to_newtons() {
        let kn = Kilonewtons(1.5);
        let n: Newtons = kn.into();
        assert_eq!(n.0, 1500.0);
    }

    #[test]
    fn test_moment_conversion() {
        let m = KilonewtonMetres(136.06);
        let nmm: NewtonMillimetres = m.into();
        assert_eq!(nmm.0, 136.06e6);
    }

    #[test]
    fn test_arithmetic() {
        let a = Metres(2.7);
        let b = Metres(0.4);
        assert!(((a - b).0 - 2.3).abs() < 1e-12);
        assert!(((a + b).0 - 3.1).abs() < 1e-12);
        assert_eq!((a * 2.0).0, 5.4);
        assert_eq!((a / 2.0).0, 1.35);
    }

    #[test]
    fn test_serialization() {
        let kn = Kilonewtons(1500.0);
        let json = serde_json::to_string(&kn).unwrap();
        assert_eq!(json, "1500.0");

        let roundtrip: Kilonewtons = serde_json::from_str(&json).unwrap();
        assert_eq!(kn, roundtrip);
    }
}
