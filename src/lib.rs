//! # VA Coupling Models
//!
//! Ventricular-arterial coupling efficiency models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The models estimate how efficiently the left ventricle couples to the
//! arterial system across a range of heart rates, for a fixed ejection
//! fraction (EF) and systemic vascular resistance (SVR), and locate the heart
//! rate that maximizes a composite efficiency score.
//!
//! The formulas are a heuristic engineering model.
//! They are not clinically calibrated and must not be used for diagnosis.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use va_coupling_models::models::cardio::va_coupling::{Conditions, SweepConfig, sweep};
//!
//! let conditions = Conditions::new(800.0, 0.35).unwrap();
//! let result = sweep(&conditions, &SweepConfig::default()).unwrap();
//!
//! assert_eq!(result.len(), 81);
//! assert!(result.optimal_point().heart_rate > 75.0);
//! ```

pub mod models;
pub mod support;
