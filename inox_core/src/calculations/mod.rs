//! # Structural Sizing
//!
//! Each sizer follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Sizing results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure function
//!
//! Same input, same catalog, same result: nothing here keeps state between
//! calls.
//!
//! ## Available Sizers
//!
//! - [`geometry`] - Clear spans and overhang advice
//! - [`beam`] - Simply-supported beam profile selection
//! - [`column`] - Axial compression profile selection
//! - [`footing`] - Square spread footing
//! - [`structure`] - The whole load path in one run

pub mod beam;
pub mod column;
pub mod footing;
pub mod geometry;
pub mod structure;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::DesignSettings;

pub use beam::{BeamInput, BeamLoad, BeamResult, BeamRole, PointLoad};
pub use column::{ColumnInput, ColumnResult};
pub use footing::{FootingInput, FootingResult, SoilClass};
pub use geometry::{CantileverAdvice, GeometryInput, GeometryResult};
pub use structure::{size_structure, StructureInput, StructureResult};

/// Any sizing request, tagged by kind.
///
/// Lets a front end hand over heterogeneous requests in one JSON shape:
///
/// ```json
/// { "type": "Footing", "label": "S-1", "total_load_kgf": 50000.0,
///   "allowable_soil_pressure_kgf_cm2": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SizingItem {
    Geometry(GeometryInput),
    Beam(BeamInput),
    Column(ColumnInput),
    Footing(FootingInput),
    Structure(StructureInput),
}

/// Result of a [`SizingItem`], same tag as the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SizingOutcome {
    Geometry(GeometryResult),
    Beam(BeamResult),
    Column(ColumnResult),
    Footing(FootingResult),
    Structure(Box<StructureResult>),
}

impl SizingItem {
    /// Get the request kind as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            SizingItem::Geometry(_) => "Geometry",
            SizingItem::Beam(_) => "Beam",
            SizingItem::Column(_) => "Column",
            SizingItem::Footing(_) => "Footing",
            SizingItem::Structure(_) => "Structure",
        }
    }

    /// Run the matching sizer.
    ///
    /// Settings only feed the requests that do not carry their own design
    /// parameters (geometry thresholds and the structure pipeline).
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<SizingOutcome> {
        tracing::debug!(kind = self.calc_type(), "running sizing request");
        Ok(match self {
            SizingItem::Geometry(input) => {
                SizingOutcome::Geometry(geometry::analyze(input, settings.max_cantilever_ratio)?)
            }
            SizingItem::Beam(input) => SizingOutcome::Beam(beam::calculate(input)?),
            SizingItem::Column(input) => SizingOutcome::Column(column::calculate(input)?),
            SizingItem::Footing(input) => SizingOutcome::Footing(footing::calculate(input)?),
            SizingItem::Structure(input) => SizingOutcome::Structure(Box::new(size_structure(input, settings)?)),
        })
    }
}
