//! # Steel Grades
//!
//! Material constants for the steels PS INOX fabricates with. Values are
//! in kgf/cm² and follow the usual allowable-stress design tables: the
//! allowable bending stress of ASTM A36 is taken as 1400 kgf/cm².
//!
//! ## JSON Serialization
//!
//! ```json
//! "A36"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use inox_core::materials::SteelType;
//!
//! let steel = SteelType::AstmA36;
//! assert_eq!(steel.allowable_bending_kgf_cm2(), 1400.0);
//! assert_eq!(steel.yield_stress_kgf_cm2(), 2500.0);
//! ```

use serde::{Deserialize, Serialize};

/// Structural steel grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SteelType {
    /// ASTM A36 carbon steel
    #[default]
    #[serde(rename = "A36")]
    AstmA36,
    /// ASTM A572 Grade 50 high-strength low-alloy steel
    #[serde(rename = "A572-50")]
    AstmA572Gr50,
    /// AISI 304 austenitic stainless steel
    #[serde(rename = "AISI-304")]
    Aisi304,
}

impl SteelType {
    /// All grades for iteration
    pub const ALL: [SteelType; 3] = [SteelType::AstmA36, SteelType::AstmA572Gr50, SteelType::Aisi304];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelType::AstmA36 => "ASTM A36",
            SteelType::AstmA572Gr50 => "ASTM A572 Gr.50",
            SteelType::Aisi304 => "AISI 304",
        }
    }

    /// Yield stress fy (kgf/cm²)
    pub fn yield_stress_kgf_cm2(&self) -> f64 {
        match self {
            SteelType::AstmA36 => 2500.0,
            SteelType::AstmA572Gr50 => 3450.0,
            SteelType::Aisi304 => 2100.0,
        }
    }

    /// Allowable bending stress Fb (kgf/cm²)
    pub fn allowable_bending_kgf_cm2(&self) -> f64 {
        match self {
            SteelType::AstmA36 => 1400.0,
            SteelType::AstmA572Gr50 => 2000.0,
            SteelType::Aisi304 => 1200.0,
        }
    }

    /// Modulus of elasticity E (kgf/cm²)
    pub fn elastic_modulus_kgf_cm2(&self) -> f64 {
        match self {
            SteelType::AstmA36 | SteelType::AstmA572Gr50 => 2_050_000.0,
            SteelType::Aisi304 => 1_930_000.0,
        }
    }
}

impl std::fmt::Display for SteelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
