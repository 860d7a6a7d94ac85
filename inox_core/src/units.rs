//! # Unit Types
//!
//! Newtype wrappers for the metric technical units used by the calculator.
//! They serialize as bare numbers and exist mostly to make the conversions
//! between meters/centimeters and kgf·m/kgf·cm explicit at the call sites.
//!
//! ## Metric Technical Units
//!
//! - Length: meters (m), centimeters (cm)
//! - Force: kilogram-force (kgf)
//! - Distributed load: kgf per meter (kgf/m)
//! - Moment: kgf·m, kgf·cm
//! - Stress / pressure: kgf/cm², kgf/m², MPa
//!
//! ## Example
//!
//! ```rust
//! use inox_core::units::{Meters, Centimeters, KgfPerCm2, Mpa};
//!
//! let span = Meters(6.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 600.0);
//!
//! let stress: Mpa = KgfPerCm2(1000.0).into();
//! assert!((stress.0 - 98.0665).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// 1 kgf/cm² expressed in MPa (standard gravity)
pub const MPA_PER_KGF_CM2: f64 = 0.098_066_5;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Distributed load in kgf per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerM(pub f64);

impl KgfPerM {
    /// Same load per centimeter of length
    pub fn per_cm(self) -> f64 {
        self.0 / 100.0
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kgf·m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfM(pub f64);

/// Moment in kgf·cm
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfCm(pub f64);

impl From<KgfM> for KgfCm {
    fn from(m: KgfM) -> Self {
        KgfCm(m.0 * 100.0)
    }
}

impl From<KgfCm> for KgfM {
    fn from(cm: KgfCm) -> Self {
        KgfM(cm.0 / 100.0)
    }
}

// ============================================================================
// Stress / Pressure Units
// ============================================================================

/// Stress in kgf/cm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerCm2(pub f64);

/// Pressure in kgf/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerM2(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

impl From<KgfPerCm2> for KgfPerM2 {
    fn from(p: KgfPerCm2) -> Self {
        KgfPerM2(p.0 * 10_000.0)
    }
}

impl From<KgfPerM2> for KgfPerCm2 {
    fn from(p: KgfPerM2) -> Self {
        KgfPerCm2(p.0 / 10_000.0)
    }
}

impl From<KgfPerCm2> for Mpa {
    fn from(p: KgfPerCm2) -> Self {
        Mpa(p.0 * MPA_PER_KGF_CM2)
    }
}

impl From<Mpa> for KgfPerCm2 {
    fn from(p: Mpa) -> Self {
        KgfPerCm2(p.0 / MPA_PER_KGF_CM2)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(KgfPerM);
impl_arithmetic!(KgfM);
impl_arithmetic!(KgfCm);
impl_arithmetic!(KgfPerCm2);
impl_arithmetic!(KgfPerM2);
impl_arithmetic!(Mpa);
