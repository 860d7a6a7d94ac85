//! # Structure Pre-Sizing
//!
//! Runs the whole load path of a rectangular slab on four corner columns:
//!
//! ```text
//! geometry -> steel deck -> secondary beams -> principal beams
//!          -> corner column -> footing
//! ```
//!
//! Secondary beams span along Y between the two principal beams and are
//! spaced evenly along X. The two end lines sit over the columns and carry
//! half a bay each; the interior lines load the principal beams as point
//! loads. The corner column takes the larger principal reaction plus the
//! reaction of the edge secondary beam, and the footing takes the column
//! load plus the column's own weight.
//!
//! Members are sized over the clear spans. Overhangs only add to the slab
//! area used for the deck quantity.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::geometry::GeometryInput;
//! use inox_core::calculations::structure::{size_structure, StructureInput};
//! use inox_core::settings::DesignSettings;
//!
//! let input = StructureInput::new(GeometryInput::without_cantilevers(8.0, 6.0), 300.0, 3.0, 1.5);
//! let result = size_structure(&input, &DesignSettings::default()).unwrap();
//!
//! assert_eq!(result.secondary_count, 5);
//! assert!(result.column.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::beam::{self, BeamInput, BeamLoad, BeamResult, BeamRole, PointLoad};
use super::column::{self, ColumnInput, ColumnReactions, ColumnResult};
use super::footing::{self, FootingInput, FootingResult};
use super::geometry::{self, GeometryInput, GeometryResult};
use crate::catalog::{DeckSelection, SpanMode, SteelDeckTable};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::pricing::PricingInput;
use crate::settings::DesignSettings;

/// Most secondary bays a slab may be divided into
pub const MAX_SECONDARY_BAYS: u32 = 200;

fn default_dead_load() -> f64 {
    0.0
}

fn default_target_spacing() -> f64 {
    2.5
}

fn default_span_mode() -> SpanMode {
    SpanMode::Double
}

/// Input for a full structure run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": { "total_span_x_m": 8.0, "total_span_y_m": 6.0 },
///   "live_load_kgf_m2": 300.0,
///   "dead_load_kgf_m2": 100.0,
///   "column_height_m": 3.0,
///   "allowable_soil_pressure_kgf_cm2": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureInput {
    /// Slab plan dimensions
    pub geometry: GeometryInput,

    /// Live (use) load on the slab (kgf/m²)
    pub live_load_kgf_m2: f64,

    /// Superimposed dead load: topping, finishes (kgf/m²)
    #[serde(default = "default_dead_load")]
    pub dead_load_kgf_m2: f64,

    /// Column height (m)
    pub column_height_m: f64,

    /// Allowable soil bearing pressure (kgf/cm²)
    pub allowable_soil_pressure_kgf_cm2: f64,

    /// Largest wanted spacing between secondary beams (m)
    #[serde(default = "default_target_spacing")]
    pub target_secondary_spacing_m: f64,

    /// Support condition of the deck sheet
    #[serde(default = "default_span_mode")]
    pub deck_span_mode: SpanMode,
}

impl StructureInput {
    /// Structure input with default dead load, spacing and deck mode.
    pub fn new(
        geometry: GeometryInput,
        live_load_kgf_m2: f64,
        column_height_m: f64,
        allowable_soil_pressure_kgf_cm2: f64,
    ) -> Self {
        StructureInput {
            geometry,
            live_load_kgf_m2,
            dead_load_kgf_m2: default_dead_load(),
            column_height_m,
            allowable_soil_pressure_kgf_cm2,
            target_secondary_spacing_m: default_target_spacing(),
            deck_span_mode: default_span_mode(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        require_positive("live_load_kgf_m2", self.live_load_kgf_m2)?;
        require_non_negative("dead_load_kgf_m2", self.dead_load_kgf_m2)?;
        require_positive("column_height_m", self.column_height_m)?;
        require_positive("allowable_soil_pressure_kgf_cm2", self.allowable_soil_pressure_kgf_cm2)?;
        require_positive("target_secondary_spacing_m", self.target_secondary_spacing_m)
    }

    /// Overload the deck must carry (kgf/m²)
    pub fn deck_overload_kgf_m2(&self) -> f64 {
        self.live_load_kgf_m2 + self.dead_load_kgf_m2
    }
}

/// Every intermediate result of a structure run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureResult {
    /// Clear spans and overhang advice
    pub geometry: GeometryResult,

    /// Selected steel deck
    pub deck: DeckSelection,

    /// Actual spacing between secondary lines (m)
    pub secondary_spacing_m: f64,

    /// Number of secondary lines, edges included
    pub secondary_count: u32,

    /// Overload plus deck self weight (kgf/m²)
    pub area_load_kgf_m2: f64,

    /// Interior secondary beam
    pub secondary: BeamResult,

    /// Edge secondary beam (half bay, over the columns)
    pub edge_secondary: BeamResult,

    /// Principal beam
    pub principal: BeamResult,

    /// Corner column
    pub column: ColumnResult,

    /// Load on the footing, column weight included (kgf)
    pub footing_load_kgf: f64,

    /// Corner footing
    pub footing: FootingResult,
}

impl StructureResult {
    /// Priceable items: each sized profile cut to length, plus the deck.
    pub fn bill_of_materials(&self) -> Vec<PricingInput> {
        let interior = self.secondary_count.saturating_sub(2);
        let mut items = Vec::new();

        if interior > 0 {
            items.push(profile_item(&self.secondary, interior, "Secondary beam"));
        }
        items.push(profile_item(&self.edge_secondary, 2, "Edge secondary beam"));
        items.push(profile_item(&self.principal, 2, "Principal beam"));
        items.push(PricingInput::Profile {
            series: self.column.check.profile.series,
            profile: self.column.check.profile.name.clone(),
            length_m: self.column.height_m,
            quantity: 4,
            description: Some(format!(
                "Column {} - {:.2} m",
                self.column.check.profile.name, self.column.height_m
            )),
        });
        items.push(PricingInput::Weighted {
            description: format!("Steel deck {} - {:.2} m²", self.deck.deck.name, self.slab_area_m2()),
            weight_kg: self.deck.deck.self_weight_kg_m2 * self.slab_area_m2(),
            quantity: 1,
        });
        items
    }

    /// Slab area including overhangs (m²)
    pub fn slab_area_m2(&self) -> f64 {
        self.geometry.total_span_x_m * self.geometry.total_span_y_m
    }

    /// Steel weight of every item in the bill (kg)
    pub fn total_steel_weight_kg(&self) -> f64 {
        let interior = f64::from(self.secondary_count.saturating_sub(2));
        self.secondary.profile.weight_for_length(self.secondary.clear_span_m) * interior
            + self.edge_secondary.profile.weight_for_length(self.edge_secondary.clear_span_m) * 2.0
            + self.principal.profile.weight_for_length(self.principal.clear_span_m) * 2.0
            + self.column.check.profile.weight_for_length(self.column.height_m) * 4.0
            + self.deck.deck.self_weight_kg_m2 * self.slab_area_m2()
    }
}

fn profile_item(beam: &BeamResult, quantity: u32, role: &str) -> PricingInput {
    PricingInput::Profile {
        series: beam.profile.series,
        profile: beam.profile.name.clone(),
        length_m: beam.clear_span_m,
        quantity,
        description: Some(format!("{} {} - {:.2} m", role, beam.profile.name, beam.clear_span_m)),
    }
}

/// Size the whole structure.
///
/// # Returns
///
/// * `Ok(StructureResult)` - Every member sized
/// * `Err(CalcError)` - The first failing stage's error
pub fn size_structure(input: &StructureInput, settings: &DesignSettings) -> CalcResult<StructureResult> {
    settings.validate()?;
    input.validate()?;

    let geometry = geometry::analyze(&input.geometry, settings.max_cantilever_ratio)?;
    let clear_x = geometry.clear_span_x_m;
    let clear_y = geometry.clear_span_y_m;

    let raw_bays = (clear_x / input.target_secondary_spacing_m).ceil();
    if raw_bays > f64::from(MAX_SECONDARY_BAYS) {
        return Err(CalcError::invalid_input(
            "target_secondary_spacing_m",
            input.target_secondary_spacing_m.to_string(),
            format!(
                "Spacing splits the {:.2} m span into more than {} bays",
                clear_x, MAX_SECONDARY_BAYS
            ),
        ));
    }
    // At least two bays so the principal beam carries an interior line
    let bays = (raw_bays as u32).max(2);
    let spacing = clear_x / f64::from(bays);

    let deck = SteelDeckTable::standard().select(spacing, input.deck_span_mode, input.deck_overload_kgf_m2())?;
    let area_load = input.deck_overload_kgf_m2() + deck.deck.self_weight_kg_m2;

    let beam_input = |label: &str, role: BeamRole, span: f64, load: BeamLoad| BeamInput {
        label: label.to_string(),
        role,
        clear_span_m: span,
        load,
        steel: settings.steel,
        deflection_limit_ratio: settings.deflection_limit_ratio,
        series: settings.beam_series,
    };

    let secondary = beam::calculate(&beam_input(
        "VS-1",
        BeamRole::Secondary,
        clear_y,
        BeamLoad::from_area_load(area_load, spacing),
    ))?;
    let edge_secondary = beam::calculate(&beam_input(
        "VS-0",
        BeamRole::Secondary,
        clear_y,
        BeamLoad::from_area_load(area_load, spacing / 2.0),
    ))?;

    let interior_loads = (1..bays)
        .map(|i| PointLoad {
            position_m: spacing * f64::from(i),
            magnitude_kgf: secondary.reaction.value_kgf,
        })
        .collect();
    let principal = beam::calculate(&beam_input(
        "VP-1",
        BeamRole::Principal,
        clear_x,
        BeamLoad::PointLoads { loads: interior_loads },
    ))?;

    let reactions = ColumnReactions {
        principal_kgf: principal.reaction.value_kgf,
        secondary_kgf: edge_secondary.reaction.value_kgf,
    };
    let mut column_input = ColumnInput::from_settings("P-1", input.column_height_m, reactions.sum_kgf(), settings);
    column_input.reactions = Some(reactions);
    let column = column::calculate(&column_input)?;

    let footing_load_kgf = column.axial_load_kgf + column.check.profile.weight_for_length(column.height_m);
    let footing = footing::calculate(&FootingInput {
        label: "S-1".to_string(),
        total_load_kgf: footing_load_kgf,
        allowable_soil_pressure_kgf_cm2: input.allowable_soil_pressure_kgf_cm2,
    })?;

    tracing::info!(
        secondary = %secondary.profile.name,
        principal = %principal.profile.name,
        column = %column.check.profile.name,
        footing_height_cm = footing.recommended_height_cm,
        "structure sized"
    );

    Ok(StructureResult {
        geometry,
        deck,
        secondary_spacing_m: spacing,
        secondary_count: bays + 1,
        area_load_kgf_m2: area_load,
        secondary,
        edge_secondary,
        principal,
        column,
        footing_load_kgf,
        footing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn test_input() -> StructureInput {
        StructureInput {
            dead_load_kgf_m2: 100.0,
            ..StructureInput::new(GeometryInput::without_cantilevers(8.0, 6.0), 300.0, 3.0, 1.5)
        }
    }

    #[test]
    fn test_layout_and_deck() {
        let result = size_structure(&test_input(), &DesignSettings::default()).unwrap();

        // 8 m / 2.5 m -> 4 bays of 2 m
        assert_eq!(result.secondary_count, 5);
        assert!((result.secondary_spacing_m - 2.0).abs() < 1e-12);
        assert_eq!(result.deck.load_class_kgf_m2, 400.0);
        assert_eq!(result.deck.deck.name, "MF-50 0,80");
        assert!((result.area_load_kgf_m2 - 408.9).abs() < 1e-9);
    }

    #[test]
    fn test_load_path() {
        let result = size_structure(&test_input(), &DesignSettings::default()).unwrap();

        // Secondary: 408.9 × 2 m × 6 m / 2
        assert!((result.secondary.reaction.value_kgf - 2453.4).abs() < 1e-6);
        assert!((result.edge_secondary.reaction.value_kgf - 1226.7).abs() < 1e-6);

        // Principal carries three symmetric interior reactions
        assert!((result.principal.reaction.value_kgf - 1.5 * 2453.4).abs() < 1e-6);
        assert_eq!(result.principal.profile.name, "W 410 x 46,1");

        let expected_axial = result.principal.reaction.value_kgf + result.edge_secondary.reaction.value_kgf;
        assert!((result.column.axial_load_kgf - expected_axial).abs() < 1e-9);
        assert_eq!(result.column.reactions_consistent, Some(true));
        assert!(result.column.passes());

        let column_weight = result.column.check.profile.weight_kg_m * 3.0;
        assert!((result.footing_load_kgf - expected_axial - column_weight).abs() < 1e-9);
        assert!(result.footing.recommended_height_cm >= 30.0);
    }

    #[test]
    fn test_selected_profiles_meet_requirements() {
        let result = size_structure(&test_input(), &DesignSettings::default()).unwrap();
        for beam in [&result.secondary, &result.edge_secondary, &result.principal] {
            assert!(beam.requirement().is_met_by(&beam.profile), "{}", beam.label);
        }
        assert!(result.edge_secondary.profile.weight_kg_m <= result.secondary.profile.weight_kg_m);
    }

    #[test]
    fn test_bill_of_materials() {
        let result = size_structure(&test_input(), &DesignSettings::default()).unwrap();
        let bill = result.bill_of_materials();

        let quantities: Vec<u32> = bill
            .iter()
            .map(|item| match item {
                PricingInput::Profile { quantity, .. }
                | PricingInput::Weighted { quantity, .. }
                | PricingInput::Priced { quantity, .. } => *quantity,
            })
            .collect();
        // interior secondaries, edge secondaries, principals, columns, deck
        assert_eq!(quantities, [3, 2, 2, 4, 1]);

        let mut budget = crate::pricing::Budget::new();
        budget.extend(bill, &DesignSettings::default().pricing).unwrap();
        assert!((budget.total_weight_kg() - result.total_steel_weight_kg()).abs() < 1e-6);
    }

    #[test]
    fn test_small_slab_still_has_two_bays() {
        let input = StructureInput::new(GeometryInput::without_cantilevers(3.0, 3.0), 200.0, 2.8, 2.0);
        let result = size_structure(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.secondary_count, 3);
        assert!((result.secondary_spacing_m - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_cantilevers_reduce_spans_not_deck_area() {
        let mut input = test_input();
        input.geometry = GeometryInput {
            total_span_x_m: 10.0,
            total_span_y_m: 6.0,
            cantilever_x_left_m: 1.0,
            cantilever_x_right_m: 1.0,
            cantilever_y_front_m: 0.0,
            cantilever_y_back_m: 0.0,
        };
        let result = size_structure(&input, &DesignSettings::default()).unwrap();
        assert!((result.principal.clear_span_m - 8.0).abs() < 1e-12);
        assert!((result.slab_area_m2() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_stage_errors_propagate() {
        let mut input = test_input();
        input.geometry.cantilever_x_left_m = 5.0;
        assert!(matches!(
            size_structure(&input, &DesignSettings::default()).unwrap_err(),
            CalcError::InvalidGeometry { .. }
        ));

        let mut input = test_input();
        input.live_load_kgf_m2 = 2000.0;
        assert!(matches!(
            size_structure(&input, &DesignSettings::default()).unwrap_err(),
            CalcError::NoProfileFits { .. }
        ));

        let mut input = test_input();
        input.column_height_m = 0.0;
        assert_eq!(
            size_structure(&input, &DesignSettings::default()).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_tiny_spacing_rejected() {
        for spacing in [1e-4, 1e-300] {
            let mut input = test_input();
            input.target_secondary_spacing_m = spacing;
            let err = size_structure(&input, &DesignSettings::default()).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "target_secondary_spacing_m"));
        }

        // 80 bays is well within the limit
        let mut input = test_input();
        input.target_secondary_spacing_m = 0.1;
        let result = size_structure(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.secondary_count, 81);
    }

    #[test]
    fn test_ipe_beams_from_settings() {
        let settings = DesignSettings {
            beam_series: crate::catalog::ProfileSeries::Ipe,
            ..DesignSettings::default()
        };
        let result = size_structure(&test_input(), &settings).unwrap();
        assert!(result.secondary.profile.name.starts_with("IPE"));
        assert!(result.column.check.profile.name.starts_with("W "));
    }
}
