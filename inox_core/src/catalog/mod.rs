//! # Profile Catalogs
//!
//! Static tables of rolled steel I-profiles used for beam and column
//! selection. Two series share the same record shape:
//!
//! - **W**: wide flange profiles (heavy series, Gerdau metric table)
//! - **IPE**: European I-beams (light series)
//!
//! Each catalog is built once per process and never mutated. Records are
//! kept in selection order: weight per meter ascending, ties resolved by
//! declaration order in the source table. That order decides which profile
//! is recommended, so it must not change.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::catalog::{ProfileSeries, SizingRequirement};
//!
//! let catalog = ProfileSeries::W.catalog();
//! let requirement = SizingRequirement::new(160.7, 1715.0).unwrap();
//! let profile = catalog.select(&requirement).unwrap();
//!
//! assert_eq!(profile.name, "W 250 x 17,9");
//! assert!(profile.wx_cm3 >= 160.7);
//! ```

pub mod ipe_series;
pub mod steel_deck;
pub mod w_series;

pub use steel_deck::{DeckSelection, SpanMode, SteelDeckRecord, SteelDeckTable, LOAD_CLASSES_KGF_M2};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Profile family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProfileSeries {
    /// Wide flange (heavy series)
    #[default]
    W,
    /// IPE (light series)
    #[serde(rename = "IPE")]
    Ipe,
}

static W_CATALOG: Lazy<ProfileCatalog> =
    Lazy::new(|| ProfileCatalog::new(ProfileSeries::W, build_records(ProfileSeries::W, w_series::ROWS)));

static IPE_CATALOG: Lazy<ProfileCatalog> =
    Lazy::new(|| ProfileCatalog::new(ProfileSeries::Ipe, build_records(ProfileSeries::Ipe, ipe_series::ROWS)));

impl ProfileSeries {
    /// Both series for iteration
    pub const ALL: [ProfileSeries; 2] = [ProfileSeries::W, ProfileSeries::Ipe];

    /// The compiled-in catalog for this series
    pub fn catalog(self) -> &'static ProfileCatalog {
        match self {
            ProfileSeries::W => &W_CATALOG,
            ProfileSeries::Ipe => &IPE_CATALOG,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileSeries::W => "W",
            ProfileSeries::Ipe => "IPE",
        }
    }
}

impl std::fmt::Display for ProfileSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ProfileSeries {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "W" => Ok(ProfileSeries::W),
            "IPE" => Ok(ProfileSeries::Ipe),
            other => Err(CalcError::invalid_input("series", other, "Expected 'W' or 'IPE'")),
        }
    }
}

/// Structural I-profile with its section properties.
///
/// Strong axis is X. Dimensions are in mm, section properties in cm units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Catalog label (e.g., "W 250 x 17,9", "IPE 200")
    pub name: String,

    /// Family the profile belongs to
    pub series: ProfileSeries,

    /// Nominal weight per meter (kg/m)
    pub weight_kg_m: f64,

    /// Cross-sectional area (cm²)
    pub area_cm2: f64,

    /// Moment of inertia about X (cm⁴)
    pub ix_cm4: f64,

    /// Moment of inertia about Y (cm⁴)
    pub iy_cm4: f64,

    /// Elastic section modulus about X (cm³)
    pub wx_cm3: f64,

    /// Elastic section modulus about Y (cm³)
    pub wy_cm3: f64,

    /// Radius of gyration about X (cm)
    pub rx_cm: f64,

    /// Radius of gyration about Y (cm)
    pub ry_cm: f64,

    /// Overall section height (mm)
    pub web_height_mm: f64,

    /// Flange width (mm)
    pub flange_width_mm: f64,

    /// Web thickness (mm)
    pub web_thickness_mm: f64,

    /// Flange thickness (mm)
    pub flange_thickness_mm: f64,
}

impl ProfileRecord {
    /// Governing (smallest) radius of gyration
    pub fn weakest_radius_cm(&self) -> f64 {
        self.rx_cm.min(self.ry_cm)
    }

    /// Steel weight of a piece of the given length (kg)
    pub fn weight_for_length(&self, length_m: f64) -> f64 {
        self.weight_kg_m * length_m
    }
}

impl std::fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} kg/m, A={:.1} cm², Ix={:.0} cm⁴, Wx={:.1} cm³)",
            self.name, self.weight_kg_m, self.area_cm2, self.ix_cm4, self.wx_cm3
        )
    }
}

/// Raw table row: name, kg/m, d, bf, tw, tf (mm), A (cm²), Ix, Wx, rx, Iy, Wy, ry.
pub(crate) type ProfileRow = (
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
);

fn build_records(series: ProfileSeries, rows: &[ProfileRow]) -> Vec<ProfileRecord> {
    rows.iter()
        .map(|&(name, weight, d, bf, tw, tf, area, ix, wx, rx, iy, wy, ry)| ProfileRecord {
            name: name.to_string(),
            series,
            weight_kg_m: weight,
            area_cm2: area,
            ix_cm4: ix,
            iy_cm4: iy,
            wx_cm3: wx,
            wy_cm3: wy,
            rx_cm: rx,
            ry_cm: ry,
            web_height_mm: d,
            flange_width_mm: bf,
            web_thickness_mm: tw,
            flange_thickness_mm: tf,
        })
        .collect()
}

/// Minimum section properties a beam profile must provide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRequirement {
    /// Required elastic section modulus (cm³)
    pub required_wx_cm3: f64,
    /// Required moment of inertia (cm⁴)
    pub required_ix_cm4: f64,
}

impl SizingRequirement {
    /// Build a requirement, rejecting negative or non-finite values.
    pub fn new(required_wx_cm3: f64, required_ix_cm4: f64) -> CalcResult<Self> {
        for (field, value) in [("required_wx_cm3", required_wx_cm3), ("required_ix_cm4", required_ix_cm4)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Requirement must be a non-negative number",
                ));
            }
        }
        Ok(SizingRequirement {
            required_wx_cm3,
            required_ix_cm4,
        })
    }

    /// Check whether a profile meets both thresholds
    pub fn is_met_by(&self, profile: &ProfileRecord) -> bool {
        profile.wx_cm3 >= self.required_wx_cm3 && profile.ix_cm4 >= self.required_ix_cm4
    }
}

impl std::fmt::Display for SizingRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wx >= {:.1} cm³ and Ix >= {:.1} cm⁴",
            self.required_wx_cm3, self.required_ix_cm4
        )
    }
}

/// Immutable, ordered profile table for one series.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    series: ProfileSeries,
    records: Vec<ProfileRecord>,
}

impl ProfileCatalog {
    /// Build a catalog, putting records in selection order.
    ///
    /// The sort is stable, so equal weights keep their declaration order.
    pub fn new(series: ProfileSeries, mut records: Vec<ProfileRecord>) -> Self {
        records.sort_by(|a, b| a.weight_kg_m.total_cmp(&b.weight_kg_m));
        ProfileCatalog { series, records }
    }

    /// Series this catalog holds
    pub fn series(&self) -> ProfileSeries {
        self.series
    }

    /// Records in selection order
    pub fn iter(&self) -> impl Iterator<Item = &ProfileRecord> {
        self.records.iter()
    }

    /// Records in selection order, as a slice
    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    /// Get the number of profiles in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a profile by name.
    ///
    /// Matching ignores case, whitespace and the decimal separator, so
    /// "w250x17.9" finds "W 250 x 17,9".
    pub fn lookup(&self, name: &str) -> CalcResult<&ProfileRecord> {
        let key = normalize_name(name);
        self.records
            .iter()
            .find(|r| normalize_name(&r.name) == key)
            .ok_or_else(|| CalcError::profile_not_found(format!("{} (series {})", name, self.series)))
    }

    /// Lightest profile meeting both Wx and Ix thresholds.
    ///
    /// Never falls back to the heaviest profile: an exhausted catalog is
    /// reported as `NoProfileFits`.
    pub fn select(&self, requirement: &SizingRequirement) -> CalcResult<&ProfileRecord> {
        let selected = self
            .first_where(|p| requirement.is_met_by(p))
            .ok_or_else(|| CalcError::no_profile_fits(self.series.display_name(), requirement.to_string()))?;

        tracing::debug!(
            series = %self.series,
            profile = %selected.name,
            required_wx_cm3 = requirement.required_wx_cm3,
            required_ix_cm4 = requirement.required_ix_cm4,
            "profile selected"
        );
        Ok(selected)
    }

    /// First record, in selection order, satisfying the predicate
    pub fn first_where<F>(&self, predicate: F) -> Option<&ProfileRecord>
    where
        F: FnMut(&&ProfileRecord) -> bool,
    {
        self.records.iter().find(predicate)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c.to_ascii_uppercase() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_loaded() {
        assert!(ProfileSeries::W.catalog().len() > 20);
        assert!(ProfileSeries::Ipe.catalog().len() > 15);
    }

    #[test]
    fn test_selection_order_is_weight_ascending() {
        for series in ProfileSeries::ALL {
            let records = series.catalog().records();
            assert!(records.windows(2).all(|w| w[0].weight_kg_m <= w[1].weight_kg_m));
        }
    }

    #[test]
    fn test_equal_weights_keep_declaration_order() {
        // W 150 x 22,5 is declared before W 200 x 22,5 in the source table
        let catalog = ProfileSeries::W.catalog();
        let pos = |name: &str| catalog.iter().position(|r| r.name == name).unwrap();
        assert!(pos("W 150 x 22,5") < pos("W 200 x 22,5"));

        // A requirement both satisfy resolves to the earlier declaration
        let req = SizingRequirement::new(161.0, 1200.0).unwrap();
        let both_fit = catalog.first_where(|p| req.is_met_by(p) && p.weight_kg_m == 22.5).unwrap();
        assert_eq!(both_fit.name, "W 150 x 22,5");
    }

    #[test]
    fn test_select_scenario_uniform_six_meter_beam() {
        let req = SizingRequirement::new(160.71, 1714.9).unwrap();
        assert_eq!(ProfileSeries::W.catalog().select(&req).unwrap().name, "W 250 x 17,9");
        assert_eq!(ProfileSeries::Ipe.catalog().select(&req).unwrap().name, "IPE 200");
    }

    #[test]
    fn test_select_is_minimal_over_grid() {
        for series in ProfileSeries::ALL {
            let catalog = series.catalog();
            for wx in [0.0, 10.0, 55.0, 120.0, 300.0, 640.0, 1200.0, 2500.0] {
                for ix in [0.0, 100.0, 900.0, 4000.0, 12_000.0, 40_000.0] {
                    let req = SizingRequirement::new(wx, ix).unwrap();
                    match catalog.select(&req) {
                        Ok(selected) => {
                            assert!(selected.wx_cm3 >= wx && selected.ix_cm4 >= ix);
                            let lighter_fits = catalog
                                .iter()
                                .any(|p| p.weight_kg_m < selected.weight_kg_m && req.is_met_by(p));
                            assert!(!lighter_fits, "{} not minimal for {}", selected.name, req);
                        }
                        Err(e) => {
                            assert_eq!(e.error_code(), "NO_PROFILE_FITS");
                            assert!(catalog.iter().all(|p| !req.is_met_by(p)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_absurd_requirement_has_no_fallback() {
        let req = SizingRequirement::new(100_000.0, 0.0).unwrap();
        for series in ProfileSeries::ALL {
            let err = series.catalog().select(&req).unwrap_err();
            assert!(matches!(err, CalcError::NoProfileFits { .. }));
        }
    }

    #[test]
    fn test_negative_requirement_rejected() {
        assert!(SizingRequirement::new(-1.0, 10.0).is_err());
        assert!(SizingRequirement::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_lookup_is_lenient_on_format() {
        let catalog = ProfileSeries::W.catalog();
        assert_eq!(catalog.lookup("w250x17.9").unwrap().name, "W 250 x 17,9");
        assert_eq!(ProfileSeries::Ipe.catalog().lookup("ipe 200").unwrap().weight_kg_m, 22.4);
        assert!(catalog.lookup("W 999 x 1").is_err());
    }

    #[test]
    fn test_series_parsing() {
        assert_eq!("ipe".parse::<ProfileSeries>().unwrap(), ProfileSeries::Ipe);
        assert_eq!(" W ".parse::<ProfileSeries>().unwrap(), ProfileSeries::W);
        assert!("HEB".parse::<ProfileSeries>().is_err());
    }

    #[test]
    fn test_record_helpers() {
        let p = ProfileSeries::Ipe.catalog().lookup("IPE 200").unwrap();
        assert_eq!(p.weakest_radius_cm(), p.ry_cm);
        assert!((p.weight_for_length(6.0) - 134.4).abs() < 1e-9);
        assert!(p.to_string().contains("IPE 200"));
    }
}
