//! # Footing (Sapata) Sizing
//!
//! Square spread footing under a column:
//!
//! ```text
//! area   = P / (σ_adm · 10 000)          [m²]
//! side   = √area                          [m]
//! h_raw  = side · 100 / 3                 [cm]
//! h      = max(30, ⌈h_raw / 5⌉ · 5)       [cm]
//! ```
//!
//! Height rounding is a ceiling to the next 5 cm: 60.86 cm becomes 65 cm,
//! and a raw height already on a multiple of 5 stays where it is.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::footing::{calculate, FootingInput};
//!
//! let input = FootingInput { label: "S-1".to_string(), total_load_kgf: 50_000.0, allowable_soil_pressure_kgf_cm2: 1.5 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.recommended_height_cm, 65.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::units::{Centimeters, KgfPerCm2, KgfPerM2, Meters};

/// Smallest footing height (cm)
pub const MIN_HEIGHT_CM: f64 = 30.0;

/// Height rounding increment (cm)
pub const HEIGHT_STEP_CM: f64 = 5.0;

/// Absorbs floating-point noise before rounding up (e.g., 60.000000001)
const ROUNDING_EPSILON: f64 = 1e-9;

/// Typical soil classes with presumptive allowable bearing pressures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    SoftClay,
    StiffClay,
    CompactSand,
    Gravel,
    WeatheredRock,
}

impl SoilClass {
    /// All classes for iteration
    pub const ALL: [SoilClass; 5] = [
        SoilClass::SoftClay,
        SoilClass::StiffClay,
        SoilClass::CompactSand,
        SoilClass::Gravel,
        SoilClass::WeatheredRock,
    ];

    /// Presumptive allowable pressure (kgf/cm²)
    pub fn allowable_pressure_kgf_cm2(&self) -> f64 {
        match self {
            SoilClass::SoftClay => 1.0,
            SoilClass::StiffClay => 2.0,
            SoilClass::CompactSand => 3.0,
            SoilClass::Gravel => 4.0,
            SoilClass::WeatheredRock => 6.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilClass::SoftClay => "Soft clay",
            SoilClass::StiffClay => "Stiff clay",
            SoilClass::CompactSand => "Compact sand",
            SoilClass::Gravel => "Gravel",
            SoilClass::WeatheredRock => "Weathered rock",
        }
    }
}

/// Input parameters for a footing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingInput {
    /// User label (e.g., "S-1")
    pub label: String,

    /// Total axial load delivered by the column (kgf)
    pub total_load_kgf: f64,

    /// Allowable soil bearing pressure (kgf/cm²)
    pub allowable_soil_pressure_kgf_cm2: f64,
}

impl FootingInput {
    /// Footing on a presumptive soil class
    pub fn on_soil(label: impl Into<String>, total_load_kgf: f64, soil: SoilClass) -> Self {
        FootingInput {
            label: label.into(),
            total_load_kgf,
            allowable_soil_pressure_kgf_cm2: soil.allowable_pressure_kgf_cm2(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("total_load_kgf", self.total_load_kgf)?;
        require_positive("allowable_soil_pressure_kgf_cm2", self.allowable_soil_pressure_kgf_cm2)
    }
}

/// Results from footing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    /// Footing label
    pub label: String,

    /// Required plan area (m²)
    pub required_area_m2: f64,

    /// Side of the equivalent square (m)
    pub side_length_m: f64,

    /// Height before rounding (cm)
    pub raw_height_cm: f64,

    /// Recommended height: multiple of 5, at least 30 (cm)
    pub recommended_height_cm: f64,

    /// Concrete volume side² × height (m³)
    pub concrete_volume_m3: f64,
}

/// Round a raw height up to the next 5 cm, with the 30 cm floor.
pub fn round_height_cm(raw_height_cm: f64) -> f64 {
    let steps = (raw_height_cm / HEIGHT_STEP_CM - ROUNDING_EPSILON).ceil();
    (steps * HEIGHT_STEP_CM).max(MIN_HEIGHT_CM)
}

/// Size a footing.
///
/// # Returns
///
/// * `Ok(FootingResult)` - Plan size and height
/// * `Err(CalcError::InvalidInput)` - Load or pressure not positive
pub fn calculate(input: &FootingInput) -> CalcResult<FootingResult> {
    input.validate()?;

    let pressure = KgfPerM2::from(KgfPerCm2(input.allowable_soil_pressure_kgf_cm2));
    let required_area_m2 = input.total_load_kgf / pressure.value();
    let side_length_m = required_area_m2.sqrt();
    let raw_height_cm = Centimeters::from(Meters(side_length_m)).value() / 3.0;
    let recommended_height_cm = round_height_cm(raw_height_cm);
    let height_m = Meters::from(Centimeters(recommended_height_cm)).value();

    tracing::debug!(
        label = %input.label,
        required_area_m2,
        recommended_height_cm,
        "footing sized"
    );

    Ok(FootingResult {
        label: input.label.clone(),
        required_area_m2,
        side_length_m,
        raw_height_cm,
        recommended_height_cm,
        concrete_volume_m3: side_length_m * side_length_m * height_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footing(load: f64, pressure: f64) -> FootingInput {
        FootingInput {
            label: "S-1".to_string(),
            total_load_kgf: load,
            allowable_soil_pressure_kgf_cm2: pressure,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&footing(50_000.0, 1.5)).unwrap();
        assert!((result.required_area_m2 - 3.3333).abs() < 1e-3);
        assert!((result.side_length_m - 1.8257).abs() < 1e-3);
        assert!((result.raw_height_cm - 60.86).abs() < 0.01);
        // Ceiling, not nearest: 60.86 -> 65
        assert_eq!(result.recommended_height_cm, 65.0);
    }

    #[test]
    fn test_rounding_rule() {
        assert_eq!(round_height_cm(60.0), 60.0);
        assert_eq!(round_height_cm(60.000_000_000_1), 60.0);
        assert_eq!(round_height_cm(60.01), 65.0);
        assert_eq!(round_height_cm(62.4), 65.0);
        assert_eq!(round_height_cm(64.99), 65.0);
        assert_eq!(round_height_cm(0.5), 30.0);
        assert_eq!(round_height_cm(29.0), 30.0);
        assert_eq!(round_height_cm(30.5), 35.0);
    }

    #[test]
    fn test_height_floor_for_tiny_load() {
        let result = calculate(&footing(1.0, 1.0e9)).unwrap();
        assert_eq!(result.recommended_height_cm, 30.0);
    }

    #[test]
    fn test_height_scales_for_huge_load() {
        let result = calculate(&footing(1.0e7, 1.0)).unwrap();
        // side = √1000 = 31.62 m, raw = 1054.1 cm
        assert_eq!(result.recommended_height_cm, 1055.0);
    }

    #[test]
    fn test_height_is_multiple_of_five_and_floored() {
        for load in [1.0, 750.0, 12_345.0, 50_000.0, 333_333.0, 2.0e6] {
            for pressure in [0.5, 1.0, 1.5, 2.7, 4.0, 10.0] {
                let h = calculate(&footing(load, pressure)).unwrap().recommended_height_cm;
                assert!(h >= MIN_HEIGHT_CM);
                assert_eq!(h % HEIGHT_STEP_CM, 0.0, "h={} for {} / {}", h, load, pressure);
            }
        }
    }

    #[test]
    fn test_concrete_volume() {
        let result = calculate(&footing(50_000.0, 1.5)).unwrap();
        assert!((result.concrete_volume_m3 - 3.3333 * 0.65).abs() < 1e-3);
    }

    #[test]
    fn test_soil_presets() {
        let input = FootingInput::on_soil("S-2", 30_000.0, SoilClass::StiffClay);
        assert_eq!(input.allowable_soil_pressure_kgf_cm2, 2.0);
        let result = calculate(&input).unwrap();
        assert!((result.required_area_m2 - 1.5).abs() < 1e-12);

        let mut previous = 0.0;
        for soil in SoilClass::ALL {
            assert!(soil.allowable_pressure_kgf_cm2() > previous);
            previous = soil.allowable_pressure_kgf_cm2();
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(calculate(&footing(0.0, 1.5)).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(calculate(&footing(1000.0, 0.0)).unwrap_err().error_code(), "INVALID_INPUT");
        assert!(calculate(&footing(-5.0, 1.5)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let input = footing(42_000.0, 2.2);
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }
}
