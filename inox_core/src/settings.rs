//! # Design Settings
//!
//! Defaults shared by every sizer: steel grade, deflection limit, geometry
//! thresholds, column stability parameters, preferred profile series and
//! pricing factors. Settings are plain JSON so a front end can keep them
//! next to its other configuration.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "steel": "A36",
//!   "deflection_limit_ratio": 250.0,
//!   "max_cantilever_ratio": 0.5,
//!   "effective_length_factor": 1.0,
//!   "max_slenderness": 200.0,
//!   "reaction_tolerance": 0.05,
//!   "beam_series": "W",
//!   "column_series": "W",
//!   "pricing": { "cost_per_kg": 12.5, "cost_multiplier": 1.0, "markup_percent": 35.0 }
//! }
//! ```
//!
//! Missing fields take their default value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ProfileSeries;
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::SteelType;
use crate::pricing::PricingParams;

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Steel grade for beams and columns
    pub steel: SteelType,

    /// Deflection limit as L / ratio (e.g., 250 for L/250)
    pub deflection_limit_ratio: f64,

    /// Largest cantilever allowed, as a fraction of its axis' total span
    pub max_cantilever_ratio: f64,

    /// Effective length factor K for columns
    pub effective_length_factor: f64,

    /// Largest column slenderness KL/r accepted
    pub max_slenderness: f64,

    /// Relative tolerance for the column reaction cross-check
    pub reaction_tolerance: f64,

    /// Profile series used for beams
    pub beam_series: ProfileSeries,

    /// Profile series used for columns
    pub column_series: ProfileSeries,

    /// Cost factors for budget lines
    pub pricing: PricingParams,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            steel: SteelType::AstmA36,
            deflection_limit_ratio: 250.0,
            max_cantilever_ratio: 0.5,
            effective_length_factor: 1.0,
            max_slenderness: 200.0,
            reaction_tolerance: 0.05,
            beam_series: ProfileSeries::W,
            column_series: ProfileSeries::W,
            pricing: PricingParams::default(),
        }
    }
}

impl DesignSettings {
    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("deflection_limit_ratio", self.deflection_limit_ratio)?;
        require_positive("effective_length_factor", self.effective_length_factor)?;
        require_positive("max_slenderness", self.max_slenderness)?;
        require_non_negative("reaction_tolerance", self.reaction_tolerance)?;
        if !(self.max_cantilever_ratio > 0.0 && self.max_cantilever_ratio <= 1.0) {
            return Err(CalcError::invalid_input(
                "max_cantilever_ratio",
                self.max_cantilever_ratio.to_string(),
                "Cantilever ratio limit must be in (0, 1]",
            ));
        }
        self.pricing.validate()
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings =
            serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
                reason: format!("Invalid settings JSON: {}", e),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn from_json_file(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        let settings = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), steel = %settings.steel, "settings loaded");
        Ok(settings)
    }
}
