//! # Pricing and Budget
//!
//! Turns sized members and raw items into priced budget lines.
//!
//! ```text
//! final_price = ⌈cost_price × cost_multiplier × (1 + markup / 100)⌉
//! ```
//!
//! For weight-based items `cost_price = weight × cost_per_kg`. Prices are
//! whole currency units; the ceiling is taken after dropping floating-point
//! noise below 10⁻⁶, so 100 × 1.35 prices at 135 and not 136.
//!
//! The [`Budget`] list belongs to the caller (one per user session). It
//! keeps insertion order and its total is the sum of line prices.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::pricing::{Budget, PricingInput, PricingParams};
//!
//! let params = PricingParams { cost_per_kg: 10.0, cost_multiplier: 1.0, markup_percent: 35.0 };
//! let mut budget = Budget::new();
//! budget.add(PricingInput::Weighted {
//!     description: "Base plate".to_string(),
//!     weight_kg: 10.0,
//!     quantity: 4,
//! }, &params).unwrap();
//!
//! assert_eq!(budget.items()[0].unit_price, 135.0);
//! assert_eq!(budget.total(), 540.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ProfileSeries;
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// Cost factors applied to every budget line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParams {
    /// Steel cost per kilogram
    pub cost_per_kg: f64,

    /// Factor over raw cost (fabrication, consumables)
    pub cost_multiplier: f64,

    /// Markup over cost, in percent
    pub markup_percent: f64,
}

impl Default for PricingParams {
    fn default() -> Self {
        PricingParams {
            cost_per_kg: 12.5,
            cost_multiplier: 1.0,
            markup_percent: 35.0,
        }
    }
}

impl PricingParams {
    /// Validate pricing factors.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("cost_per_kg", self.cost_per_kg)?;
        require_positive("cost_multiplier", self.cost_multiplier)?;
        require_non_negative("markup_percent", self.markup_percent)
    }

    /// Selling price for a cost price, rounded up to a whole unit.
    pub fn final_price(&self, cost_price: f64) -> f64 {
        let raw = cost_price * self.cost_multiplier * (1.0 + self.markup_percent / 100.0);
        ((raw * 1e6).round() / 1e6).ceil()
    }
}

/// Something that can be turned into a budget line.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "profile", "series": "W", "profile": "W 250 x 17,9",
///   "length_m": 6.0, "quantity": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingInput {
    /// Catalog profile cut to length
    Profile {
        series: ProfileSeries,
        profile: String,
        length_m: f64,
        quantity: u32,
        #[serde(default)]
        description: Option<String>,
    },
    /// Item priced by its steel weight
    Weighted {
        description: String,
        weight_kg: f64,
        quantity: u32,
    },
    /// Item with a known cost price
    Priced {
        description: String,
        cost_price: f64,
        #[serde(default)]
        weight_kg: f64,
        quantity: u32,
    },
}

/// One priced line of the budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Line identifier
    pub id: Uuid,

    /// Line description
    pub description: String,

    /// Weight of one unit (kg)
    pub weight_kg: f64,

    /// Selling price of one unit
    pub unit_price: f64,

    /// Number of units
    pub quantity: u32,

    /// unit_price × quantity
    pub computed_price: f64,
}

impl BudgetItem {
    /// Price a pricing input.
    pub fn priced(input: &PricingInput, params: &PricingParams) -> CalcResult<Self> {
        params.validate()?;

        let (description, weight_kg, cost_price, quantity) = match input {
            PricingInput::Profile {
                series,
                profile,
                length_m,
                quantity,
                description,
            } => {
                require_positive("length_m", *length_m)?;
                let record = series.catalog().lookup(profile)?;
                let weight = record.weight_for_length(*length_m);
                let description = description
                    .clone()
                    .unwrap_or_else(|| format!("{} - {:.2} m", record.name, length_m));
                (description, weight, weight * params.cost_per_kg, *quantity)
            }
            PricingInput::Weighted {
                description,
                weight_kg,
                quantity,
            } => {
                require_positive("weight_kg", *weight_kg)?;
                (description.clone(), *weight_kg, weight_kg * params.cost_per_kg, *quantity)
            }
            PricingInput::Priced {
                description,
                cost_price,
                weight_kg,
                quantity,
            } => {
                require_positive("cost_price", *cost_price)?;
                require_non_negative("weight_kg", *weight_kg)?;
                (description.clone(), *weight_kg, *cost_price, *quantity)
            }
        };

        if description.trim().is_empty() {
            return Err(CalcError::invalid_input("description", "", "Description cannot be empty"));
        }
        if quantity == 0 {
            return Err(CalcError::invalid_input("quantity", "0", "Quantity must be at least 1"));
        }

        let unit_price = params.final_price(cost_price);
        Ok(BudgetItem {
            id: Uuid::new_v4(),
            description,
            weight_kg,
            unit_price,
            quantity,
            computed_price: unit_price * f64::from(quantity),
        })
    }

    /// Weight of the whole line (kg)
    pub fn total_weight_kg(&self) -> f64 {
        self.weight_kg * f64::from(self.quantity)
    }
}

/// Ordered, caller-owned list of budget lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    items: Vec<BudgetItem>,
}

impl Budget {
    /// Create an empty budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Price an input and append it. Returns the new line.
    pub fn add(&mut self, input: PricingInput, params: &PricingParams) -> CalcResult<&BudgetItem> {
        let item = BudgetItem::priced(&input, params)?;
        tracing::debug!(id = %item.id, description = %item.description, price = item.computed_price, "budget line added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Price and append several inputs; stops at the first invalid one.
    pub fn extend<I>(&mut self, inputs: I, params: &PricingParams) -> CalcResult<()>
    where
        I: IntoIterator<Item = PricingInput>,
    {
        for input in inputs {
            self.add(input, params)?;
        }
        Ok(())
    }

    /// Remove a line by id.
    pub fn remove(&mut self, id: &Uuid) -> Option<BudgetItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order
    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the budget is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line prices
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.computed_price).sum()
    }

    /// Sum of line weights (kg)
    pub fn total_weight_kg(&self) -> f64 {
        self.items.iter().map(BudgetItem::total_weight_kg).sum()
    }

    /// Serialize the budget for export.
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
    }
}
