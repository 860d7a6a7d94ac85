//! # inox_core - Steel Profile Selection and Structural Pre-Sizing
//!
//! `inox_core` picks the lightest adequate rolled steel profile for beams
//! and columns, sizes the spread footing underneath, and prices the result.
//! All inputs and outputs are JSON-serializable so any front end (web form,
//! CLI, text-generation assistant) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Deterministic**: Same input and catalog, same selected profile
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use inox_core::calculations::beam::{calculate, BeamInput, BeamLoad, BeamRole};
//! use inox_core::catalog::ProfileSeries;
//! use inox_core::materials::SteelType;
//!
//! let beam = BeamInput {
//!     label: "VS-1".to_string(),
//!     role: BeamRole::Secondary,
//!     clear_span_m: 6.0,
//!     load: BeamLoad::Uniform { kgf_per_m: 500.0 },
//!     steel: SteelType::AstmA36,
//!     deflection_limit_ratio: 250.0,
//!     series: ProfileSeries::Ipe,
//! };
//!
//! let result = calculate(&beam).unwrap();
//! assert_eq!(result.profile.name, "IPE 200");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Geometry, beam, column, footing and full-structure sizers
//! - [`catalog`] - W and IPE profile tables, steel deck table
//! - [`materials`] - Steel grades
//! - [`settings`] - Shared design defaults
//! - [`pricing`] - Budget lines and totals
//! - [`narrative`] - Optional plain-language explanations
//! - [`pdf`] - Budget PDF export
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod materials;
pub mod narrative;
pub mod pdf;
pub mod pricing;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{ProfileRecord, ProfileSeries, SizingRequirement};
pub use errors::{CalcError, CalcResult};
pub use pricing::{Budget, BudgetItem, PricingInput, PricingParams};
pub use settings::DesignSettings;
