use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N4, P1, Z0},
};

/// Volume elastance (pressure per volume), Pa/m³ in SI.
pub type Elastance = Quantity<ISQ<N4, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Hydraulic resistance (pressure per volume rate), Pa·s/m³ in SI.
pub type HydraulicResistance = Quantity<ISQ<N4, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
