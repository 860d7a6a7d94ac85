//! # Steel Deck Table
//!
//! Composite slab (steel deck) span capacities. Each deck lists, for single
//! and double (continuous) spans, the maximum span in meters for a set of
//! tabulated overload classes in kgf/m².
//!
//! A load between two classes is read at the next higher class, never
//! interpolated.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::catalog::{SpanMode, SteelDeckTable};
//!
//! let table = SteelDeckTable::standard();
//! let choice = table.select(2.0, SpanMode::Double, 350.0).unwrap();
//! assert_eq!(choice.load_class_kgf_m2, 400.0);
//! assert!(choice.max_span_m >= 2.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Tabulated overload classes (kgf/m²), ascending
pub const LOAD_CLASSES_KGF_M2: [f64; 6] = [200.0, 300.0, 400.0, 500.0, 750.0, 1000.0];

/// Support condition of the deck sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanMode {
    /// Sheet simply supported over one span
    Single,
    /// Sheet continuous over two or more spans
    Double,
}

/// One steel deck product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelDeckRecord {
    /// Product label (e.g., "MF-75 0,80")
    pub name: String,

    /// Sheet thickness (mm)
    pub sheet_thickness_mm: f64,

    /// Sheet self weight (kg/m²)
    pub self_weight_kg_m2: f64,

    /// Max span (m) per load class, single span
    pub max_span_single_m: [f64; 6],

    /// Max span (m) per load class, double span
    pub max_span_double_m: [f64; 6],
}

impl SteelDeckRecord {
    /// Maximum allowable span for the governing load class.
    ///
    /// Returns `None` when the load exceeds the highest tabulated class.
    pub fn max_span(&self, mode: SpanMode, load_kgf_m2: f64) -> Option<f64> {
        let class = load_class_index(load_kgf_m2)?;
        let spans = match mode {
            SpanMode::Single => &self.max_span_single_m,
            SpanMode::Double => &self.max_span_double_m,
        };
        Some(spans[class])
    }
}

/// Deck chosen for a given span, mode and load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSelection {
    /// Selected product
    pub deck: SteelDeckRecord,

    /// Support condition used for the lookup
    pub mode: SpanMode,

    /// Load class the applied load was read at (kgf/m²)
    pub load_class_kgf_m2: f64,

    /// Tabulated max span for that class (m)
    pub max_span_m: f64,
}

/// Immutable steel deck table, lightest first.
#[derive(Debug, Clone)]
pub struct SteelDeckTable {
    records: Vec<SteelDeckRecord>,
}

static STANDARD_TABLE: Lazy<SteelDeckTable> = Lazy::new(|| {
    SteelDeckTable::new(
        DECK_ROWS
            .iter()
            .map(|&(name, t, w, single, double)| SteelDeckRecord {
                name: name.to_string(),
                sheet_thickness_mm: t,
                self_weight_kg_m2: w,
                max_span_single_m: single,
                max_span_double_m: double,
            })
            .collect(),
    )
});

type DeckRow = (&'static str, f64, f64, [f64; 6], [f64; 6]);

const DECK_ROWS: &[DeckRow] = &[
    (
        "MF-50 0,80",
        0.80,
        8.9,
        [2.40, 2.20, 2.05, 1.90, 1.65, 1.45],
        [2.70, 2.50, 2.30, 2.15, 1.85, 1.65],
    ),
    (
        "MF-75 0,80",
        0.80,
        9.4,
        [2.80, 2.60, 2.45, 2.30, 2.00, 1.80],
        [3.20, 2.95, 2.75, 2.55, 2.20, 1.95],
    ),
    (
        "MF-75 0,95",
        0.95,
        11.1,
        [3.05, 2.85, 2.65, 2.50, 2.20, 1.95],
        [3.45, 3.20, 3.00, 2.80, 2.40, 2.15],
    ),
    (
        "MF-75 1,25",
        1.25,
        14.6,
        [3.40, 3.15, 2.95, 2.75, 2.45, 2.20],
        [3.80, 3.55, 3.30, 3.10, 2.70, 2.40],
    ),
];

impl SteelDeckTable {
    /// Build a table, ordering records by self weight (stable).
    pub fn new(mut records: Vec<SteelDeckRecord>) -> Self {
        records.sort_by(|a, b| a.self_weight_kg_m2.total_cmp(&b.self_weight_kg_m2));
        SteelDeckTable { records }
    }

    /// The compiled-in deck table
    pub fn standard() -> &'static SteelDeckTable {
        &STANDARD_TABLE
    }

    /// Records, lightest first
    pub fn records(&self) -> &[SteelDeckRecord] {
        &self.records
    }

    /// Lightest deck whose tabulated span covers `span_m` under the load.
    pub fn select(&self, span_m: f64, mode: SpanMode, load_kgf_m2: f64) -> CalcResult<DeckSelection> {
        require_positive("span_m", span_m)?;
        require_positive("load_kgf_m2", load_kgf_m2)?;

        let class = load_class_index(load_kgf_m2).ok_or_else(|| {
            CalcError::no_profile_fits(
                "steel deck",
                format!(
                    "load {:.0} kgf/m² (highest tabulated class is {:.0} kgf/m²)",
                    load_kgf_m2,
                    LOAD_CLASSES_KGF_M2[LOAD_CLASSES_KGF_M2.len() - 1]
                ),
            )
        })?;

        let selection = self
            .records
            .iter()
            .find_map(|deck| {
                let max_span_m = deck.max_span(mode, load_kgf_m2)?;
                (max_span_m >= span_m).then(|| DeckSelection {
                    deck: deck.clone(),
                    mode,
                    load_class_kgf_m2: LOAD_CLASSES_KGF_M2[class],
                    max_span_m,
                })
            })
            .ok_or_else(|| {
                CalcError::no_profile_fits(
                    "steel deck",
                    format!("{:?} span {:.2} m at {:.0} kgf/m²", mode, span_m, load_kgf_m2),
                )
            })?;

        tracing::debug!(deck = %selection.deck.name, span_m, load_kgf_m2, "steel deck selected");
        Ok(selection)
    }
}

fn load_class_index(load_kgf_m2: f64) -> Option<usize> {
    LOAD_CLASSES_KGF_M2.iter().position(|&class| load_kgf_m2 <= class)
}
