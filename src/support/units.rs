//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for typed physical quantities (e.g., volume, pressure).
//! This module provides the cardiovascular quantities that [`uom`] doesn't include,
//! plus conversions to and from the clinical units the models are written in.
//!
//! ## Clinical units
//!
//! Hemodynamic formulas are conventionally written in mixed units
//! (mmHg, mL, L/min, dyn·s/cm⁵).
//! The [`Clinical`] trait converts the custom quantities to and from those units:
//!
//! ```
//! use va_coupling_models::support::units::{Clinical, HydraulicResistance};
//!
//! let svr = HydraulicResistance::from_clinical(800.0);
//! assert!((svr.to_clinical() - 800.0).abs() < 1e-9);
//! ```

mod clinical;
mod quantities;

pub use clinical::Clinical;
pub use quantities::{Elastance, HydraulicResistance};
