//! Cardiovascular models.
//!
//! This module contains lumped, algebraic models of the heart and the
//! systemic circulation.

pub mod va_coupling;
