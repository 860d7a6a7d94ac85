//! # Slab Geometry
//!
//! Converts the total plan dimensions and the four cantilever overhangs of
//! a slab into the clear spans carried by the two beam directions:
//!
//! ```text
//! clear_span_x = total_span_x - cantilever_x_left - cantilever_x_right
//! clear_span_y = total_span_y - cantilever_y_front - cantilever_y_back
//! ```
//!
//! A clear span that is not positive, or a cantilever longer than the
//! configured fraction of its total span, is an `InvalidGeometry` error.
//! The overhang ratio bands (15-30 % efficient, above 35 % excessive) are
//! reported as advice only.
//!
//! ## Example
//!
//! ```rust
//! use inox_core::calculations::geometry::{analyze, GeometryInput};
//!
//! let input = GeometryInput {
//!     total_span_x_m: 10.0,
//!     total_span_y_m: 8.0,
//!     cantilever_x_left_m: 1.5,
//!     cantilever_x_right_m: 1.5,
//!     cantilever_y_front_m: 1.0,
//!     cantilever_y_back_m: 0.0,
//! };
//! let result = analyze(&input, 0.5).unwrap();
//! assert_eq!(result.clear_span_x_m, 7.0);
//! assert_eq!(result.clear_span_y_m, 7.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

/// Plan dimensions of the slab, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryInput {
    /// Total length along X, overhangs included
    pub total_span_x_m: f64,

    /// Total length along Y, overhangs included
    pub total_span_y_m: f64,

    /// Overhang at the left end of X
    #[serde(default)]
    pub cantilever_x_left_m: f64,

    /// Overhang at the right end of X
    #[serde(default)]
    pub cantilever_x_right_m: f64,

    /// Overhang at the front end of Y
    #[serde(default)]
    pub cantilever_y_front_m: f64,

    /// Overhang at the back end of Y
    #[serde(default)]
    pub cantilever_y_back_m: f64,
}

impl GeometryInput {
    /// Slab without overhangs
    pub fn without_cantilevers(total_span_x_m: f64, total_span_y_m: f64) -> Self {
        GeometryInput {
            total_span_x_m,
            total_span_y_m,
            cantilever_x_left_m: 0.0,
            cantilever_x_right_m: 0.0,
            cantilever_y_front_m: 0.0,
            cantilever_y_back_m: 0.0,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("total_span_x_m", self.total_span_x_m)?;
        require_positive("total_span_y_m", self.total_span_y_m)?;
        require_non_negative("cantilever_x_left_m", self.cantilever_x_left_m)?;
        require_non_negative("cantilever_x_right_m", self.cantilever_x_right_m)?;
        require_non_negative("cantilever_y_front_m", self.cantilever_y_front_m)?;
        require_non_negative("cantilever_y_back_m", self.cantilever_y_back_m)?;
        Ok(())
    }
}

/// Advisory classification of an axis' overhangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CantileverAdvice {
    /// No overhang on this axis
    None,
    /// Largest overhang between 15 % and 30 % of the span
    Efficient,
    /// Any other ratio up to 35 %
    Acceptable,
    /// Largest overhang above 35 % of the span
    Excessive,
}

impl CantileverAdvice {
    /// Classify from the largest overhang / total span ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.0 {
            CantileverAdvice::None
        } else if ratio > 0.35 {
            CantileverAdvice::Excessive
        } else if (0.15..=0.30).contains(&ratio) {
            CantileverAdvice::Efficient
        } else {
            CantileverAdvice::Acceptable
        }
    }
}

/// Clear spans and overhang advice per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Total length along X (m)
    pub total_span_x_m: f64,

    /// Total length along Y (m)
    pub total_span_y_m: f64,

    /// Clear span along X (m)
    pub clear_span_x_m: f64,

    /// Clear span along Y (m)
    pub clear_span_y_m: f64,

    /// Largest overhang ratio along X
    pub cantilever_ratio_x: f64,

    /// Largest overhang ratio along Y
    pub cantilever_ratio_y: f64,

    /// Overhang advice along X
    pub advice_x: CantileverAdvice,

    /// Overhang advice along Y
    pub advice_y: CantileverAdvice,
}

/// Compute clear spans.
///
/// # Arguments
///
/// * `input` - Slab plan dimensions
/// * `max_cantilever_ratio` - Largest overhang allowed as a fraction of the
///   total span of its axis (0.5 by default in `DesignSettings`)
///
/// # Returns
///
/// * `Ok(GeometryResult)` - Clear spans and advice
/// * `Err(CalcError::InvalidInput)` - Non-positive span or negative overhang
/// * `Err(CalcError::InvalidGeometry)` - Overhangs leave no clear span or
///   exceed the ratio limit
pub fn analyze(input: &GeometryInput, max_cantilever_ratio: f64) -> CalcResult<GeometryResult> {
    input.validate()?;
    require_positive("max_cantilever_ratio", max_cantilever_ratio)?;

    let (clear_span_x_m, cantilever_ratio_x) = clear_span(
        "X",
        input.total_span_x_m,
        input.cantilever_x_left_m,
        input.cantilever_x_right_m,
        max_cantilever_ratio,
    )?;
    let (clear_span_y_m, cantilever_ratio_y) = clear_span(
        "Y",
        input.total_span_y_m,
        input.cantilever_y_front_m,
        input.cantilever_y_back_m,
        max_cantilever_ratio,
    )?;

    let result = GeometryResult {
        total_span_x_m: input.total_span_x_m,
        total_span_y_m: input.total_span_y_m,
        clear_span_x_m,
        clear_span_y_m,
        cantilever_ratio_x,
        cantilever_ratio_y,
        advice_x: CantileverAdvice::from_ratio(cantilever_ratio_x),
        advice_y: CantileverAdvice::from_ratio(cantilever_ratio_y),
    };

    for (axis, advice, ratio) in [
        ("X", result.advice_x, cantilever_ratio_x),
        ("Y", result.advice_y, cantilever_ratio_y),
    ] {
        if advice == CantileverAdvice::Excessive {
            tracing::warn!(axis, ratio, "cantilever exceeds 35% of the span");
        }
    }

    Ok(result)
}

fn clear_span(axis: &str, total: f64, first: f64, second: f64, max_ratio: f64) -> CalcResult<(f64, f64)> {
    let limit = total * max_ratio;
    for overhang in [first, second] {
        if overhang > limit {
            return Err(CalcError::invalid_geometry(
                axis,
                total - first - second,
                format!(
                    "cantilever of {:.2} m exceeds {:.0}% of the {:.2} m span",
                    overhang,
                    max_ratio * 100.0,
                    total
                ),
            ));
        }
    }

    let clear = total - first - second;
    if clear <= 0.0 {
        return Err(CalcError::invalid_geometry(
            axis,
            clear,
            "cantilevers leave no clear span between supports",
        ));
    }

    Ok((clear, first.max(second) / total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab() -> GeometryInput {
        GeometryInput {
            total_span_x_m: 12.0,
            total_span_y_m: 9.0,
            cantilever_x_left_m: 2.0,
            cantilever_x_right_m: 1.0,
            cantilever_y_front_m: 0.0,
            cantilever_y_back_m: 3.5,
        }
    }

    #[test]
    fn test_clear_spans() {
        let result = analyze(&slab(), 0.5).unwrap();
        assert!((result.clear_span_x_m - 9.0).abs() < 1e-12);
        assert!((result.clear_span_y_m - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_identity() {
        let spans = [3.0, 7.35, 12.0, 25.4];
        let overhangs = [0.0, 0.3, 1.1, 1.45];
        for &total in &spans {
            for &left in &overhangs {
                for &right in &overhangs {
                    let mut input = GeometryInput::without_cantilevers(total, total);
                    input.cantilever_x_left_m = left;
                    input.cantilever_x_right_m = right;
                    let result = analyze(&input, 0.5).unwrap();
                    let rebuilt = result.clear_span_x_m + left + right;
                    assert!((rebuilt - total).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_advice_bands() {
        assert_eq!(CantileverAdvice::from_ratio(0.0), CantileverAdvice::None);
        assert_eq!(CantileverAdvice::from_ratio(0.10), CantileverAdvice::Acceptable);
        assert_eq!(CantileverAdvice::from_ratio(0.15), CantileverAdvice::Efficient);
        assert_eq!(CantileverAdvice::from_ratio(0.30), CantileverAdvice::Efficient);
        assert_eq!(CantileverAdvice::from_ratio(0.33), CantileverAdvice::Acceptable);
        assert_eq!(CantileverAdvice::from_ratio(0.36), CantileverAdvice::Excessive);

        let result = analyze(&slab(), 0.5).unwrap();
        assert_eq!(result.advice_x, CantileverAdvice::Efficient); // 2/12
        assert_eq!(result.advice_y, CantileverAdvice::Excessive); // 3.5/9
    }

    #[test]
    fn test_excessive_is_not_an_error() {
        // 3.5 / 9 = 39 %: flagged, still computed
        assert!(analyze(&slab(), 0.5).is_ok());
    }

    #[test]
    fn test_cantilever_over_half_span_rejected() {
        let mut input = slab();
        input.cantilever_x_left_m = 6.5;
        input.cantilever_x_right_m = 0.0;
        let err = analyze(&input, 0.5).unwrap_err();
        assert!(matches!(err, CalcError::InvalidGeometry { ref axis, .. } if axis == "X"));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let input = slab();
        // 3.5 m is 39 % of 9 m: fails with a 30 % limit
        assert!(analyze(&input, 0.30).is_err());
        assert!(analyze(&input, 0.40).is_ok());
    }

    #[test]
    fn test_zero_clear_span_rejected() {
        let mut input = GeometryInput::without_cantilevers(4.0, 4.0);
        input.cantilever_y_front_m = 2.0;
        input.cantilever_y_back_m = 2.0;
        let err = analyze(&input, 0.5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = slab();
        input.total_span_x_m = 0.0;
        assert_eq!(analyze(&input, 0.5).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = slab();
        input.cantilever_x_right_m = -0.5;
        assert_eq!(analyze(&input, 0.5).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_missing_cantilevers_default_to_zero() {
        let input: GeometryInput =
            serde_json::from_str(r#"{ "total_span_x_m": 6.0, "total_span_y_m": 5.0 }"#).unwrap();
        let result = analyze(&input, 0.5).unwrap();
        assert_eq!(result.clear_span_x_m, 6.0);
        assert_eq!(result.advice_y, CantileverAdvice::None);
    }
}
