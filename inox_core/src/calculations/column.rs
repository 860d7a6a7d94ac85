//! # Column (Pilar) Sizing
//!
//! Checks steel I-profiles under axial compression and selects the lightest
//! adequate one.
//!
//! ## Procedure
//!
//! For each candidate, in catalog selection order:
//!
//! 1. Acting stress `fa = P / A`
//! 2. Slenderness `λ = K · L / r_min` (weak axis)
//! 3. Allowable stress from the ASD column curve: Johnson parabola with a
//!    variable safety factor up to `Cc = sqrt(2π²E / fy)`, Euler
//!    `12π²E / 23λ²` beyond
//! 4. Adequate when `λ ≤ λ_max` and `fa ≤ Fa`
//!
//! Both stresses depend on the candidate, so the search is a plain scan
//! with early return.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::column::{calculate, ColumnInput};
//! use inox_core::settings::DesignSettings;
//!
//! let input = ColumnInput::from_settings("P-1", 3.0, 20_000.0, &DesignSettings::default());
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.check.adequate);
//! assert!(result.check.utilization_percent <= 100.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::{ProfileRecord, ProfileSeries};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::SteelType;
use crate::settings::DesignSettings;
use crate::units::{Centimeters, KgfPerCm2, Meters, Mpa};

fn default_reaction_tolerance() -> f64 {
    0.05
}

/// Reactions reported by the beams framing into the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnReactions {
    /// Reaction of the principal beam (kgf)
    pub principal_kgf: f64,
    /// Reaction of the secondary beam (kgf)
    pub secondary_kgf: f64,
}

impl ColumnReactions {
    /// Sum of both reactions (kgf)
    pub fn sum_kgf(&self) -> f64 {
        self.principal_kgf + self.secondary_kgf
    }
}

/// Input parameters for a steel column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "height_m": 3.0,
///   "axial_load_kgf": 20000.0,
///   "reactions": { "principal_kgf": 15000.0, "secondary_kgf": 5000.0 },
///   "profile": null,
///   "steel": "A36",
///   "effective_length_factor": 1.0,
///   "max_slenderness": 200.0,
///   "series": "W"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label (e.g., "P-1")
    pub label: String,

    /// Unbraced height (m)
    pub height_m: f64,

    /// Axial compression load (kgf)
    pub axial_load_kgf: f64,

    /// Upstream beam reactions, for the consistency check only
    #[serde(default)]
    pub reactions: Option<ColumnReactions>,

    /// Candidate profile name; `None` selects the lightest adequate one
    #[serde(default)]
    pub profile: Option<String>,

    /// Steel grade
    pub steel: SteelType,

    /// Effective length factor K
    pub effective_length_factor: f64,

    /// Largest accepted slenderness KL/r
    pub max_slenderness: f64,

    /// Catalog to select from
    pub series: ProfileSeries,

    /// Relative tolerance for the reaction consistency check
    #[serde(default = "default_reaction_tolerance")]
    pub reaction_tolerance: f64,
}

impl ColumnInput {
    /// Column input with the stability parameters taken from settings.
    pub fn from_settings(label: impl Into<String>, height_m: f64, axial_load_kgf: f64, settings: &DesignSettings) -> Self {
        ColumnInput {
            label: label.into(),
            height_m,
            axial_load_kgf,
            reactions: None,
            profile: None,
            steel: settings.steel,
            effective_length_factor: settings.effective_length_factor,
            max_slenderness: settings.max_slenderness,
            series: settings.column_series,
            reaction_tolerance: settings.reaction_tolerance,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("height_m", self.height_m)?;
        require_positive("axial_load_kgf", self.axial_load_kgf)?;
        require_positive("max_slenderness", self.max_slenderness)?;
        require_non_negative("reaction_tolerance", self.reaction_tolerance)?;
        if !self.effective_length_factor.is_finite()
            || self.effective_length_factor <= 0.0
            || self.effective_length_factor > 2.5
        {
            return Err(CalcError::invalid_input(
                "effective_length_factor",
                self.effective_length_factor.to_string(),
                "K factor must be between 0 and 2.5",
            ));
        }
        if let Some(reactions) = &self.reactions {
            require_non_negative("principal_kgf", reactions.principal_kgf)?;
            require_non_negative("secondary_kgf", reactions.secondary_kgf)?;
        }
        Ok(())
    }

    /// Effective buckling length (cm)
    pub fn effective_length_cm(&self) -> f64 {
        self.effective_length_factor * Centimeters::from(Meters(self.height_m)).value()
    }
}

/// Compression check of one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnCheck {
    /// Profile checked
    pub profile: ProfileRecord,

    /// Slenderness KL/r_min
    pub slenderness: f64,

    /// Acting stress P/A (kgf/cm²)
    pub acting_stress_kgf_cm2: f64,

    /// Allowable compressive stress Fa (kgf/cm²)
    pub allowable_stress_kgf_cm2: f64,

    /// Acting stress (MPa)
    pub acting_stress_mpa: f64,

    /// Allowable compressive stress (MPa)
    pub allowable_stress_mpa: f64,

    /// fa / Fa × 100
    pub utilization_percent: f64,

    /// Slenderness and stress both within limits
    pub adequate: bool,
}

/// Results from column calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Column label
    pub label: String,

    /// Unbraced height (m)
    pub height_m: f64,

    /// Axial load (kgf)
    pub axial_load_kgf: f64,

    /// Check of the selected or candidate profile
    pub check: ColumnCheck,

    /// Sum of upstream reactions, when provided (kgf)
    pub reactions_sum_kgf: Option<f64>,

    /// Whether the reactions add up to the axial load within tolerance
    pub reactions_consistent: Option<bool>,
}

impl ColumnResult {
    /// Check if the column passes
    pub fn passes(&self) -> bool {
        self.check.adequate
    }
}

/// Allowable compressive stress (kgf/cm²) for a slenderness ratio.
///
/// Decreases monotonically with slenderness.
pub fn allowable_compressive_stress(steel: SteelType, slenderness: f64) -> f64 {
    let fy = steel.yield_stress_kgf_cm2();
    let e = steel.elastic_modulus_kgf_cm2();
    let cc = (2.0 * PI * PI * e / fy).sqrt();

    if slenderness <= cc {
        let ratio = slenderness / cc;
        let safety_factor = 5.0 / 3.0 + 3.0 * ratio / 8.0 - ratio.powi(3) / 8.0;
        (1.0 - ratio * ratio / 2.0) * fy / safety_factor
    } else {
        12.0 * PI * PI * e / (23.0 * slenderness * slenderness)
    }
}

/// Check one profile against the column input.
pub fn check_profile(input: &ColumnInput, profile: &ProfileRecord) -> ColumnCheck {
    let slenderness = input.effective_length_cm() / profile.weakest_radius_cm();
    let acting = input.axial_load_kgf / profile.area_cm2;
    let allowable = allowable_compressive_stress(input.steel, slenderness);

    ColumnCheck {
        profile: profile.clone(),
        slenderness,
        acting_stress_kgf_cm2: acting,
        allowable_stress_kgf_cm2: allowable,
        acting_stress_mpa: Mpa::from(KgfPerCm2(acting)).value(),
        allowable_stress_mpa: Mpa::from(KgfPerCm2(allowable)).value(),
        utilization_percent: acting / allowable * 100.0,
        adequate: slenderness <= input.max_slenderness && acting <= allowable,
    }
}

/// Calculate a column.
///
/// With `input.profile` set, the named profile is checked and reported
/// whether or not it is adequate. Otherwise the catalog is scanned for the
/// lightest adequate profile.
///
/// # Returns
///
/// * `Ok(ColumnResult)` - Check of the selected or candidate profile
/// * `Err(CalcError::InvalidInput)` - Non-positive height or load
/// * `Err(CalcError::ProfileNotFound)` - Candidate not in the catalog
/// * `Err(CalcError::NoProfileFits)` - No catalog profile is adequate
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    input.validate()?;
    let catalog = input.series.catalog();

    let check = match &input.profile {
        Some(name) => check_profile(input, catalog.lookup(name)?),
        None => catalog
            .iter()
            .map(|profile| check_profile(input, profile))
            .find(|check| check.adequate)
            .ok_or_else(|| {
                CalcError::no_profile_fits(
                    catalog.series().display_name(),
                    format!(
                        "axial load {:.0} kgf over {:.2} m (KL/r <= {:.0})",
                        input.axial_load_kgf, input.height_m, input.max_slenderness
                    ),
                )
            })?,
    };

    tracing::debug!(
        label = %input.label,
        profile = %check.profile.name,
        slenderness = check.slenderness,
        utilization_percent = check.utilization_percent,
        "column checked"
    );

    let reactions_sum_kgf = input.reactions.map(|r| r.sum_kgf());
    let reactions_consistent = reactions_sum_kgf
        .map(|sum| (sum - input.axial_load_kgf).abs() <= input.reaction_tolerance * input.axial_load_kgf);
    if reactions_consistent == Some(false) {
        tracing::warn!(
            label = %input.label,
            axial_load_kgf = input.axial_load_kgf,
            reactions_sum_kgf = reactions_sum_kgf.unwrap_or_default(),
            "beam reactions do not add up to the column load"
        );
    }

    Ok(ColumnResult {
        label: input.label.clone(),
        height_m: input.height_m,
        axial_load_kgf: input.axial_load_kgf,
        check,
        reactions_sum_kgf,
        reactions_consistent,
    })
}
