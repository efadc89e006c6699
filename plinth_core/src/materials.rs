//! # Material Grades
//!
//! Concrete and reinforcement steel grades for IS 456:2000 design.
//!
//! The grade sets are the discrete choices the code tables cover: concrete
//! M15 through M40 and mild/high-yield steel Fe250, Fe415, Fe500.
//!
//! ## Example
//!
//! ```rust
//! use plinth_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::M25;
//! let steel = SteelGrade::Fe415;
//! assert_eq!(concrete.value(), 25.0);
//! assert_eq!(steel.value(), 415.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grades per IS 456 (characteristic cube strength fck, N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
}

impl ConcreteGrade {
    /// All concrete grade variants for UI selection
    pub const ALL: [ConcreteGrade; 6] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
    ];

    /// Characteristic compressive strength fck (N/mm²)
    pub fn value(&self) -> f64 {
        match self {
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
        }
    }

    /// Parse from common string representations ("M25", "m 25", "25")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "M15" | "15" => Ok(ConcreteGrade::M15),
            "M20" | "20" => Ok(ConcreteGrade::M20),
            "M25" | "25" => Ok(ConcreteGrade::M25),
            "M30" | "30" => Ok(ConcreteGrade::M30),
            "M35" | "35" => Ok(ConcreteGrade::M35),
            "M40" | "40" => Ok(ConcreteGrade::M40),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteGrade::M15 => "M15",
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcement steel grades per IS 456 (yield strength fy, N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Mild steel
    Fe250,
    /// High-yield deformed bars
    Fe415,
    /// High-yield deformed bars
    Fe500,
}

impl SteelGrade {
    /// All steel grade variants for UI selection
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Fe250, SteelGrade::Fe415, SteelGrade::Fe500];

    /// Characteristic yield strength fy (N/mm²)
    pub fn value(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 250.0,
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
        }
    }

    /// Parse from common string representations ("Fe415", "fe 415", "415")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "FE250" | "250" => Ok(SteelGrade::Fe250),
            "FE415" | "415" => Ok(SteelGrade::Fe415),
            "FE500" | "500" => Ok(SteelGrade::Fe500),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Fe250 => "Fe250",
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
