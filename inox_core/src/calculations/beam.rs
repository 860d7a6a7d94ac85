//! # Beam Sizing
//!
//! Selects a rolled I-profile for a simply-supported steel beam. The same
//! sizer serves secondary beams (uniform load from the slab) and principal
//! beams (point loads from the secondary beams they carry).
//!
//! ## Procedure
//!
//! 1. Maximum bending moment from the simply-supported moment diagram
//!    (`w L² / 8` for a uniform load)
//! 2. Required section modulus `Wx = M / Fb`
//! 3. Required moment of inertia so that the midspan deflection stays
//!    within `L / ratio` (`5 w L⁴ / 384 E I` for a uniform load)
//! 4. Lightest catalog profile meeting both
//! 5. Support reactions, the larger one propagated downstream
//!
//! Units: spans and positions in m, loads in kgf and kgf/m, section
//! properties in cm³ / cm⁴, stresses in kgf/cm².
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::beam::{calculate, BeamInput, BeamLoad, BeamRole};
//! use inox_core::catalog::ProfileSeries;
//! use inox_core::materials::SteelType;
//!
//! let input = BeamInput {
//!     label: "VS-1".to_string(),
//!     role: BeamRole::Secondary,
//!     clear_span_m: 6.0,
//!     load: BeamLoad::Uniform { kgf_per_m: 500.0 },
//!     steel: SteelType::AstmA36,
//!     deflection_limit_ratio: 250.0,
//!     series: ProfileSeries::W,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_kgf_m - 2250.0).abs() < 1e-9);
//! assert!((result.reaction.value_kgf - 1500.0).abs() < 1e-9);
//! assert_eq!(result.profile.name, "W 250 x 17,9");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{ProfileRecord, ProfileSeries, SizingRequirement};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::SteelType;
use crate::units::{Centimeters, KgfCm, KgfM, KgfPerM, Meters};

/// Concentrated load on a beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left support (m)
    pub position_m: f64,
    /// Load magnitude (kgf)
    pub magnitude_kgf: f64,
}

/// Load applied to a beam.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "combined", "kgf_per_m": 40.0,
///   "loads": [ { "position_m": 2.0, "magnitude_kgf": 1500.0 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BeamLoad {
    /// Full-length uniform load
    Uniform { kgf_per_m: f64 },
    /// Concentrated loads only
    PointLoads { loads: Vec<PointLoad> },
    /// Uniform load plus concentrated loads
    Combined { kgf_per_m: f64, loads: Vec<PointLoad> },
}

impl BeamLoad {
    /// Uniform line load from an area load over a tributary width.
    pub fn from_area_load(area_load_kgf_m2: f64, tributary_width_m: f64) -> Self {
        BeamLoad::Uniform {
            kgf_per_m: area_load_kgf_m2 * tributary_width_m,
        }
    }

    /// Uniform component (kgf/m)
    pub fn uniform_kgf_m(&self) -> f64 {
        match self {
            BeamLoad::Uniform { kgf_per_m } | BeamLoad::Combined { kgf_per_m, .. } => *kgf_per_m,
            BeamLoad::PointLoads { .. } => 0.0,
        }
    }

    /// Concentrated components
    pub fn point_loads(&self) -> &[PointLoad] {
        match self {
            BeamLoad::Uniform { .. } => &[],
            BeamLoad::PointLoads { loads } | BeamLoad::Combined { loads, .. } => loads,
        }
    }

    /// Total vertical load on a span (kgf)
    pub fn total_kgf(&self, span_m: f64) -> f64 {
        self.uniform_kgf_m() * span_m + self.point_loads().iter().map(|p| p.magnitude_kgf).sum::<f64>()
    }

    fn validate(&self, span_m: f64) -> CalcResult<()> {
        match self {
            BeamLoad::Uniform { kgf_per_m } => require_positive("kgf_per_m", *kgf_per_m)?,
            BeamLoad::Combined { kgf_per_m, .. } => require_non_negative("kgf_per_m", *kgf_per_m)?,
            BeamLoad::PointLoads { .. } => {}
        }
        if matches!(self, BeamLoad::PointLoads { .. } | BeamLoad::Combined { .. }) && self.point_loads().is_empty() {
            return Err(CalcError::invalid_input("loads", "[]", "At least one point load is required"));
        }
        for load in self.point_loads() {
            require_positive("magnitude_kgf", load.magnitude_kgf)?;
            if !load.position_m.is_finite() || load.position_m < 0.0 || load.position_m > span_m {
                return Err(CalcError::invalid_input(
                    "position_m",
                    load.position_m.to_string(),
                    format!("Point load must lie within the {:.2} m span", span_m),
                ));
            }
        }
        Ok(())
    }
}

/// Where the beam sits in the load path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamRole {
    /// Carries the slab directly
    Secondary,
    /// Carries secondary beams, delivers to columns
    Principal,
}

/// Input parameters for a simply-supported steel beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "VS-1",
///   "role": "Secondary",
///   "clear_span_m": 6.0,
///   "load": { "kind": "uniform", "kgf_per_m": 500.0 },
///   "steel": "A36",
///   "deflection_limit_ratio": 250.0,
///   "series": "W"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label (e.g., "VS-1", "VP-A")
    pub label: String,

    /// Secondary or principal
    pub role: BeamRole,

    /// Clear span between supports (m)
    pub clear_span_m: f64,

    /// Applied load
    pub load: BeamLoad,

    /// Steel grade
    pub steel: SteelType,

    /// Deflection limit as L / ratio
    pub deflection_limit_ratio: f64,

    /// Catalog to select from
    pub series: ProfileSeries,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("clear_span_m", self.clear_span_m)?;
        require_positive("deflection_limit_ratio", self.deflection_limit_ratio)?;
        self.load.validate(self.clear_span_m)
    }
}

/// Internal actions of a simply-supported beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamActions {
    /// Maximum bending moment (kgf·m)
    pub max_moment_kgf_m: f64,

    /// Left support reaction (kgf)
    pub reaction_left_kgf: f64,

    /// Right support reaction (kgf)
    pub reaction_right_kgf: f64,

    /// Midspan deflection times E·I (kgf·cm³); divide by E·I for cm
    pub deflection_ei_kgf_cm3: f64,
}

impl BeamActions {
    /// Compute actions from span and load.
    pub fn compute(span_m: f64, load: &BeamLoad) -> Self {
        let w = load.uniform_kgf_m();
        let points = load.point_loads();

        let reaction_left_kgf =
            w * span_m / 2.0 + points.iter().map(|p| p.magnitude_kgf * (span_m - p.position_m) / span_m).sum::<f64>();
        let reaction_right_kgf =
            w * span_m / 2.0 + points.iter().map(|p| p.magnitude_kgf * p.position_m / span_m).sum::<f64>();

        let moment_at = |x: f64| -> f64 {
            reaction_left_kgf * x
                - w * x * x / 2.0
                - points
                    .iter()
                    .filter(|p| p.position_m < x)
                    .map(|p| p.magnitude_kgf * (x - p.position_m))
                    .sum::<f64>()
        };

        // Moment peaks at a point load or where the shear crosses zero
        let mut positions: Vec<f64> = points.iter().map(|p| p.position_m).collect();
        positions.sort_by(|a, b| a.total_cmp(b));
        // Coincident loads share one boundary and leave the shear once
        positions.dedup();
        let mut candidates = positions.clone();
        if w > 0.0 {
            let mut start = 0.0;
            let mut shear_left = reaction_left_kgf;
            let boundaries = positions.iter().copied().chain(std::iter::once(span_m));
            for end in boundaries {
                let x = shear_left / w;
                if x > start && x < end {
                    candidates.push(x);
                }
                shear_left -= points
                    .iter()
                    .filter(|p| p.position_m == end)
                    .map(|p| p.magnitude_kgf)
                    .sum::<f64>();
                start = end;
            }
        }
        let max_moment_kgf_m = candidates.into_iter().map(moment_at).fold(0.0_f64, f64::max);

        let l_cm = Centimeters::from(Meters(span_m)).value();
        let w_cm = KgfPerM(w).per_cm();
        let uniform_part = 5.0 * w_cm * l_cm.powi(4) / 384.0;
        let point_part: f64 = points
            .iter()
            .map(|p| {
                let a_cm = Centimeters::from(Meters(p.position_m.min(span_m - p.position_m))).value();
                p.magnitude_kgf * a_cm * (3.0 * l_cm * l_cm - 4.0 * a_cm * a_cm) / 48.0
            })
            .sum();

        BeamActions {
            max_moment_kgf_m,
            reaction_left_kgf,
            reaction_right_kgf,
            deflection_ei_kgf_cm3: uniform_part + point_part,
        }
    }
}

/// Load transferred from one member to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportReaction {
    /// Label of the member delivering the load
    pub source: String,
    /// Reaction (kgf)
    pub value_kgf: f64,
}

/// Results from beam sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Beam label
    pub label: String,

    /// Secondary or principal
    pub role: BeamRole,

    /// Clear span (m)
    pub clear_span_m: f64,

    /// Maximum bending moment (kgf·m)
    pub max_moment_kgf_m: f64,

    /// Required section modulus (cm³)
    pub required_wx_cm3: f64,

    /// Required moment of inertia (cm⁴)
    pub required_ix_cm4: f64,

    /// Selected profile
    pub profile: ProfileRecord,

    /// Bending stress / allowable, for the selected profile
    pub bending_ratio: f64,

    /// Midspan deflection of the selected profile (cm)
    pub deflection_cm: f64,

    /// Deflection limit L / ratio (cm)
    pub allowable_deflection_cm: f64,

    /// Left support reaction (kgf)
    pub reaction_left_kgf: f64,

    /// Right support reaction (kgf)
    pub reaction_right_kgf: f64,

    /// Governing (larger) reaction, propagated downstream
    pub reaction: SupportReaction,
}

impl BeamResult {
    /// Requirement the profile was selected against
    pub fn requirement(&self) -> SizingRequirement {
        SizingRequirement {
            required_wx_cm3: self.required_wx_cm3,
            required_ix_cm4: self.required_ix_cm4,
        }
    }
}

/// Compute the Wx / Ix requirement and the beam actions.
pub fn requirement(input: &BeamInput) -> CalcResult<(SizingRequirement, BeamActions)> {
    input.validate()?;

    let actions = BeamActions::compute(input.clear_span_m, &input.load);
    let moment = KgfCm::from(KgfM(actions.max_moment_kgf_m));
    let required_wx = moment.value() / input.steel.allowable_bending_kgf_cm2();

    let allowable_deflection_cm = Centimeters::from(Meters(input.clear_span_m)).value() / input.deflection_limit_ratio;
    let required_ix = actions.deflection_ei_kgf_cm3 / (input.steel.elastic_modulus_kgf_cm2() * allowable_deflection_cm);

    let requirement = SizingRequirement::new(required_wx, required_ix)?;
    tracing::debug!(
        label = %input.label,
        max_moment_kgf_m = actions.max_moment_kgf_m,
        %requirement,
        "beam requirement computed"
    );
    Ok((requirement, actions))
}

/// Size a beam.
///
/// # Returns
///
/// * `Ok(BeamResult)` - Selected profile and reactions
/// * `Err(CalcError::InvalidInput)` - Non-positive span or load
/// * `Err(CalcError::NoProfileFits)` - No catalog profile is strong and
///   stiff enough
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    let (requirement, actions) = requirement(input)?;
    let profile = input.series.catalog().select(&requirement)?.clone();

    let allowable_deflection_cm = Centimeters::from(Meters(input.clear_span_m)).value() / input.deflection_limit_ratio;
    let e = input.steel.elastic_modulus_kgf_cm2();
    let moment = KgfCm::from(KgfM(actions.max_moment_kgf_m));
    let reaction_kgf = actions.reaction_left_kgf.max(actions.reaction_right_kgf);

    Ok(BeamResult {
        label: input.label.clone(),
        role: input.role,
        clear_span_m: input.clear_span_m,
        max_moment_kgf_m: actions.max_moment_kgf_m,
        required_wx_cm3: requirement.required_wx_cm3,
        required_ix_cm4: requirement.required_ix_cm4,
        bending_ratio: moment.value() / profile.wx_cm3 / input.steel.allowable_bending_kgf_cm2(),
        deflection_cm: actions.deflection_ei_kgf_cm3 / (e * profile.ix_cm4),
        allowable_deflection_cm,
        reaction_left_kgf: actions.reaction_left_kgf,
        reaction_right_kgf: actions.reaction_right_kgf,
        reaction: SupportReaction {
            source: input.label.clone(),
            value_kgf: reaction_kgf,
        },
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_beam() -> BeamInput {
        BeamInput {
            label: "VS-1".to_string(),
            role: BeamRole::Secondary,
            clear_span_m: 6.0,
            load: BeamLoad::Uniform { kgf_per_m: 500.0 },
            steel: SteelType::AstmA36,
            deflection_limit_ratio: 250.0,
            series: ProfileSeries::W,
        }
    }

    #[test]
    fn test_uniform_scenario() {
        let result = calculate(&uniform_beam()).unwrap();

        // M = 500 * 6² / 8 = 2250 kgf·m
        assert!((result.max_moment_kgf_m - 2250.0).abs() < 1e-9);
        // Wx = 225000 / 1400 = 160.71 cm³
        assert!((result.required_wx_cm3 - 160.714).abs() < 0.01);
        // Ix = 5 * 5 * 600³ * 250 / (384 * 2.05e6) = 1714.9 cm⁴
        assert!((result.required_ix_cm4 - 1714.9).abs() < 0.1);

        assert_eq!(result.profile.name, "W 250 x 17,9");
        assert!((result.reaction.value_kgf - 1500.0).abs() < 1e-9);
        assert_eq!(result.reaction_left_kgf, result.reaction_right_kgf);
        assert!(result.bending_ratio <= 1.0);
        assert!(result.deflection_cm <= result.allowable_deflection_cm);
    }

    #[test]
    fn test_ipe_series_selection() {
        let mut input = uniform_beam();
        input.series = ProfileSeries::Ipe;
        assert_eq!(calculate(&input).unwrap().profile.name, "IPE 200");
    }

    #[test]
    fn test_selected_profile_meets_requirement() {
        for span in [2.0, 4.5, 7.0, 9.0] {
            for load in [80.0, 350.0, 900.0] {
                let mut input = uniform_beam();
                input.clear_span_m = span;
                input.load = BeamLoad::Uniform { kgf_per_m: load };
                if let Ok(result) = calculate(&input) {
                    assert!(result.requirement().is_met_by(&result.profile));
                }
            }
        }
    }

    #[test]
    fn test_central_point_load() {
        let input = BeamInput {
            label: "VP-1".to_string(),
            role: BeamRole::Principal,
            clear_span_m: 8.0,
            load: BeamLoad::PointLoads {
                loads: vec![PointLoad { position_m: 4.0, magnitude_kgf: 3000.0 }],
            },
            ..uniform_beam()
        };
        let (req, actions) = requirement(&input).unwrap();

        // M = P L / 4 = 6000 kgf·m
        assert!((actions.max_moment_kgf_m - 6000.0).abs() < 1e-6);
        assert!((actions.reaction_left_kgf - 1500.0).abs() < 1e-9);
        // δ·EI = P L³ / 48 with L in cm
        assert!((actions.deflection_ei_kgf_cm3 - 3000.0 * 800.0_f64.powi(3) / 48.0).abs() < 1.0);
        assert!((req.required_wx_cm3 - 600_000.0 / 1400.0).abs() < 1e-6);
    }

    #[test]
    fn test_eccentric_point_load_reactions() {
        let input = BeamInput {
            clear_span_m: 6.0,
            load: BeamLoad::PointLoads {
                loads: vec![PointLoad { position_m: 2.0, magnitude_kgf: 1200.0 }],
            },
            ..uniform_beam()
        };
        let result = calculate(&input).unwrap();
        assert!((result.reaction_left_kgf - 800.0).abs() < 1e-9);
        assert!((result.reaction_right_kgf - 400.0).abs() < 1e-9);
        assert!((result.reaction.value_kgf - 800.0).abs() < 1e-9);
        // M = P a b / L = 1200 * 2 * 4 / 6
        assert!((result.max_moment_kgf_m - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn test_combined_load_zero_shear_peak() {
        // Uniform plus a small load near the support: peak stays near midspan
        let input = BeamInput {
            clear_span_m: 10.0,
            load: BeamLoad::Combined {
                kgf_per_m: 100.0,
                loads: vec![PointLoad { position_m: 1.0, magnitude_kgf: 100.0 }],
            },
            ..uniform_beam()
        };
        let (_, actions) = requirement(&input).unwrap();
        // Ra = 500 + 90 = 590; zero shear at x = (590 - 100) / 100 = 4.9 m
        // M = 590*4.9 - 100*4.9²/2 - 100*3.9 = 2891 - 1200.5 - 390 = 1300.5
        assert!((actions.max_moment_kgf_m - 1300.5).abs() < 1e-6);
        assert!((actions.reaction_left_kgf + actions.reaction_right_kgf - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_point_loads_match_uniform_total() {
        let input = BeamInput {
            clear_span_m: 6.0,
            load: BeamLoad::PointLoads {
                loads: vec![
                    PointLoad { position_m: 2.0, magnitude_kgf: 1000.0 },
                    PointLoad { position_m: 4.0, magnitude_kgf: 1000.0 },
                ],
            },
            ..uniform_beam()
        };
        let result = calculate(&input).unwrap();
        assert!((result.reaction_left_kgf - 1000.0).abs() < 1e-9);
        assert!((result.max_moment_kgf_m - 2000.0).abs() < 1e-9);
    }

    fn assert_same_actions(a: &BeamActions, b: &BeamActions) {
        assert!((a.max_moment_kgf_m - b.max_moment_kgf_m).abs() < 1e-6, "{:?} vs {:?}", a, b);
        assert!((a.reaction_left_kgf - b.reaction_left_kgf).abs() < 1e-9);
        assert!((a.reaction_right_kgf - b.reaction_right_kgf).abs() < 1e-9);
        assert!((a.deflection_ei_kgf_cm3 - b.deflection_ei_kgf_cm3).abs() < 1e-3 * b.deflection_ei_kgf_cm3.max(1.0));
    }

    #[test]
    fn test_coincident_point_loads_match_merged_load() {
        let split = BeamActions::compute(
            10.0,
            &BeamLoad::Combined {
                kgf_per_m: 100.0,
                loads: vec![
                    PointLoad { position_m: 1.0, magnitude_kgf: 100.0 },
                    PointLoad { position_m: 1.0, magnitude_kgf: 100.0 },
                ],
            },
        );
        let merged = BeamActions::compute(
            10.0,
            &BeamLoad::Combined {
                kgf_per_m: 100.0,
                loads: vec![PointLoad { position_m: 1.0, magnitude_kgf: 200.0 }],
            },
        );
        // Ra = 680; zero shear at x = 4.8 m
        // M = 680*4.8 - 100*4.8²/2 - 200*3.8 = 1352
        assert!((merged.max_moment_kgf_m - 1352.0).abs() < 1e-6);
        assert_same_actions(&split, &merged);

        let split = BeamActions::compute(
            6.0,
            &BeamLoad::PointLoads {
                loads: vec![
                    PointLoad { position_m: 2.0, magnitude_kgf: 700.0 },
                    PointLoad { position_m: 4.0, magnitude_kgf: 300.0 },
                    PointLoad { position_m: 2.0, magnitude_kgf: 500.0 },
                ],
            },
        );
        let merged = BeamActions::compute(
            6.0,
            &BeamLoad::PointLoads {
                loads: vec![
                    PointLoad { position_m: 2.0, magnitude_kgf: 1200.0 },
                    PointLoad { position_m: 4.0, magnitude_kgf: 300.0 },
                ],
            },
        );
        assert_same_actions(&split, &merged);
    }

    #[test]
    fn test_point_loads_on_supports() {
        let uniform = BeamActions::compute(6.0, &BeamLoad::Uniform { kgf_per_m: 100.0 });

        for position in [0.0, 6.0] {
            let actions = BeamActions::compute(
                6.0,
                &BeamLoad::Combined {
                    kgf_per_m: 100.0,
                    loads: vec![PointLoad { position_m: position, magnitude_kgf: 500.0 }],
                },
            );
            // The load goes straight into its support: no moment, no deflection
            assert!((actions.max_moment_kgf_m - 450.0).abs() < 1e-9);
            assert!((actions.deflection_ei_kgf_cm3 - uniform.deflection_ei_kgf_cm3).abs() < 1e-3);
            assert!((actions.reaction_left_kgf + actions.reaction_right_kgf - 1100.0).abs() < 1e-9);
        }

        let left = BeamActions::compute(
            6.0,
            &BeamLoad::Combined {
                kgf_per_m: 100.0,
                loads: vec![PointLoad { position_m: 0.0, magnitude_kgf: 500.0 }],
            },
        );
        assert!((left.reaction_left_kgf - 800.0).abs() < 1e-9);
        assert!((left.reaction_right_kgf - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs_rejected_before_selection() {
        let mut input = uniform_beam();
        input.clear_span_m = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = uniform_beam();
        input.load = BeamLoad::Uniform { kgf_per_m: -10.0 };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = uniform_beam();
        input.load = BeamLoad::PointLoads { loads: vec![] };
        assert!(calculate(&input).is_err());

        let mut input = uniform_beam();
        input.load = BeamLoad::PointLoads {
            loads: vec![PointLoad { position_m: 7.0, magnitude_kgf: 100.0 }],
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_overload_reports_no_profile() {
        let mut input = uniform_beam();
        input.clear_span_m = 20.0;
        input.load = BeamLoad::Uniform { kgf_per_m: 20_000.0 };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::NoProfileFits { .. }));
    }

    #[test]
    fn test_idempotent() {
        let input = uniform_beam();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_area_load_helper() {
        let load = BeamLoad::from_area_load(400.0, 1.25);
        assert_eq!(load.uniform_kgf_m(), 500.0);
        assert_eq!(load.total_kgf(6.0), 3000.0);
    }

    #[test]
    fn test_input_json_roundtrip() {
        let input = uniform_beam();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"kind\": \"uniform\""));
        let roundtrip: BeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
